use std::sync::Arc;

use rolodex_core::{AuditAction, AuditEntity, AuditEvent, AuditSink};
use tokio_util::sync::CancellationToken;

/// Best-effort front for an [`AuditSink`].
///
/// Every event gets a single delivery attempt. Failures and cancellation are
/// logged here and never reach the caller.
pub struct AuditEmitter<A: AuditSink> {
    sink: Arc<A>,
}

impl<A: AuditSink> Clone for AuditEmitter<A> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
        }
    }
}

impl<A: AuditSink> AuditEmitter<A> {
    pub fn new(sink: Arc<A>) -> Self {
        Self { sink }
    }

    #[tracing::instrument(name = "AuditEmitter::emit", skip(self, ctx))]
    pub async fn emit(
        &self,
        ctx: &CancellationToken,
        action: AuditAction,
        entity: AuditEntity,
        entity_id: i64,
    ) {
        let event = AuditEvent::new(action, entity, entity_id);

        tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                tracing::warn!("audit delivery abandoned, context cancelled");
            }
            result = self.sink.log(event) => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "failed to deliver audit event");
                }
            }
        }
    }
}
