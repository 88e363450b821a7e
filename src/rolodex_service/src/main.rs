use color_eyre::eyre::Result;
use rolodex_adapters::RolodexSettings;
use rolodex_axum::AppState;
use rolodex_service::{
    RolodexApp, build_auth_service, refresh_cookie_config, shutdown_signal,
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = RolodexSettings::load()?;
    let auth_service = build_auth_service(&settings).await?;

    let shutdown = CancellationToken::new();
    let state = AppState::new(
        auth_service,
        shutdown.clone(),
        refresh_cookie_config(&settings)?,
    );

    let signal = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal.cancel();
    });

    let listener = TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting rolodex auth service...");

    RolodexApp::new(state)
        .run(listener, &settings.auth.allowed_origins, shutdown)
        .await?;

    Ok(())
}
