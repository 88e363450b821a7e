use redis::{Client, RedisResult, aio::MultiplexedConnection};
use rolodex_adapters::RolodexSettings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connects to PostgreSQL and runs all pending migrations.
pub async fn configure_postgresql(settings: &RolodexSettings) -> color_eyre::Result<PgPool> {
    let pg_pool = get_postgres_pool(settings.postgres.url.expose_secret()).await?;

    sqlx::migrate!().run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Opens the multiplexed connection the audit sink publishes on.
pub async fn configure_redis(settings: &RolodexSettings) -> RedisResult<MultiplexedConnection> {
    get_redis_client(&settings.redis.host_name)?
        .get_multiplexed_async_connection()
        .await
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
