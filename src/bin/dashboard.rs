//! Terminal dashboard — mounts the dashboard view against a running API.
//!
//! Usage: `cargo run --bin dashboard`
//!
//! Reads `GEARGUARD_API_URL` (default `http://localhost:5000/api`),
//! `GEARGUARD_TOKEN`, and optionally `GEARGUARD_USER` for the greeting.

use chrono::Utc;
use gearguard::client::{ClientConfig, StatsClient};
use gearguard::view::dashboard::DashboardView;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gearguard=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = StatsClient::new(ClientConfig::from_env());
    let mut view = DashboardView::new(std::env::var("GEARGUARD_USER").ok());

    view.mount(&client).await;

    print!("{}", view.render(Utc::now()));
    Ok(())
}
