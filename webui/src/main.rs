use std::sync::Arc;

use tasktrack_core::TrackerClient;
use tasktrack_webui::{run, submit, AppState};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set default tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    setup_logging();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let tracker_url =
        std::env::var("TRACKER_URL").unwrap_or_else(|_| "http://127.0.0.1:8181".to_string());
    let tz: chrono_tz::Tz = match std::env::var("TRACKER_TZ") {
        Ok(name) => name.parse().unwrap_or_else(|_| {
            tracing::warn!(zone = %name, "unknown TRACKER_TZ, falling back to UTC");
            chrono_tz::UTC
        }),
        Err(_) => chrono_tz::UTC,
    };
    let tls_verify = std::env::var("TRACKER_TLS_VERIFY").is_ok_and(|v| v == "1");

    let state = Arc::new(AppState {
        client: TrackerClient::new(&tracker_url),
        tz,
        agent: submit::agent(tls_verify),
    });

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, tracker = %tracker_url, zone = %tz, "listening");
    run(listener, state).await
}
