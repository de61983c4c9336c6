//! Development server for company portal UI development
//!
//! Keeps the mock portal backend running so the UI can be exercised without
//! the real backend. The mock knows about these scenarios:
//! - logins succeed for alice@example.com / Alice#2024
//! - signing up with taken@example.com fails with a validation error
//! - unknown@example.com is unknown to forgot-password and resend-OTP
//! - OTP 000000 is expired and 111111 is invalid
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::{
    ALICE_EMAIL, ALICE_PASSWORD, EXPIRED_OTP, INVALID_OTP, TAKEN_EMAIL,
    UNKNOWN_EMAIL, spawn_app_on_port, telemetry,
};
use tracing::info;

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    let port = match std::env::var("MOCK_BACKEND_PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting company portal mock backend");
    let app = match spawn_app_on_port(port).await {
        Ok(app) => app,
        Err(e) => {
            telemetry::log_error(e);
            anyhow::bail!("could not start the mock backend on port {port}");
        }
    };

    info!("🎯 Development server ready!");
    info!("   API: {}", app.server.uri());
    info!(
        "   UI:  cd ui && BACKEND_URL={} trunk serve",
        app.server.uri()
    );
    info!("");
    info!("   Login:           {ALICE_EMAIL} / {ALICE_PASSWORD}");
    info!("   Taken email:     {TAKEN_EMAIL}");
    info!("   Unknown email:   {UNKNOWN_EMAIL}");
    info!("   Expired OTP:     {EXPIRED_OTP}");
    info!("   Invalid OTP:     {INVALID_OTP}");
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
