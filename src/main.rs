mod amount;
mod config;
mod ledger;
mod processing;
mod routes;
mod services;
mod state;

use services::notify::Notifier;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let notifier = match Notifier::from_config(&config.notify) {
        Ok(notifier) => notifier,
        Err(e) => {
            tracing::warn!(error = %e, "webhook notifier unavailable; notifications disabled");
            Notifier::disabled(&config.notify.user)
        }
    };
    if !notifier.is_enabled() {
        tracing::info!("no webhook configured; notifications are logged only");
    }

    let port = config.port;
    let state = state::AppState::new(config, notifier);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "campuspay listening");
    axum::serve(listener, app).await.expect("server failed");
}
