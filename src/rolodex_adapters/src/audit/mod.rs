pub mod in_memory_audit_sink;
pub mod redis_audit_sink;
