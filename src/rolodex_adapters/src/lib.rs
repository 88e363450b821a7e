pub mod audit;
pub mod config;
pub mod hashing;
pub mod persistence;

pub use audit::{in_memory_audit_sink::InMemoryAuditSink, redis_audit_sink::RedisAuditSink};
pub use config::RolodexSettings;
pub use hashing::argon2_hasher::Argon2PasswordHasher;
pub use persistence::{
    hashmap_session_store::HashMapSessionStore, hashmap_user_store::HashMapUserStore,
    postgres_session_store::PostgresSessionStore, postgres_user_store::PostgresUserStore,
};
