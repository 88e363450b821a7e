use std::sync::Arc;
use tokio::sync::RwLock;

use rolodex_core::{AuditEvent, AuditSink, AuditSinkError};

/// Keeps every event in memory; used by tests and local runs without Redis.
#[derive(Default, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<RwLock<Vec<AuditEvent>>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait::async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn log(&self, event: AuditEvent) -> Result<(), AuditSinkError> {
        tracing::debug!(action = ?event.action, entity_id = event.entity_id, "audit event recorded");
        self.events.write().await.push(event);
        Ok(())
    }
}
