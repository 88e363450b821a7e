use redis::{AsyncCommands, aio::MultiplexedConnection};
use rolodex_core::{AuditEvent, AuditSink, AuditSinkError};

/// Pushes JSON-encoded audit events onto a Redis list that a consumer drains.
#[derive(Clone)]
pub struct RedisAuditSink {
    conn: MultiplexedConnection,
    queue: String,
}

impl RedisAuditSink {
    pub fn new(conn: MultiplexedConnection, queue: impl Into<String>) -> Self {
        Self {
            conn,
            queue: queue.into(),
        }
    }
}

#[async_trait::async_trait]
impl AuditSink for RedisAuditSink {
    #[tracing::instrument(name = "Publishing audit event to Redis", skip_all, fields(queue = %self.queue))]
    async fn log(&self, event: AuditEvent) -> Result<(), AuditSinkError> {
        let payload = encode(&event)?;

        let mut conn = self.conn.clone();
        conn.rpush::<_, _, ()>(&self.queue, payload)
            .await
            .map_err(|e| AuditSinkError::Delivery(e.to_string()))
    }
}

fn encode(event: &AuditEvent) -> Result<String, AuditSinkError> {
    serde_json::to_string(event).map_err(|e| AuditSinkError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use rolodex_core::{AuditAction, AuditEntity};

    use super::*;

    #[test]
    fn queued_payload_uses_upper_case_tags() {
        let event = AuditEvent::new(AuditAction::Login, AuditEntity::User, 1);
        let payload: serde_json::Value = serde_json::from_str(&encode(&event).unwrap()).unwrap();

        assert_eq!(payload["action"], "LOGIN");
        assert_eq!(payload["entity"], "USER");
        assert_eq!(payload["entity_id"], 1);
        assert!(payload["timestamp"].is_string());
    }
}
