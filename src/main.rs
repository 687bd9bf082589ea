//! # WhatsApp Acknowledgement Webhook
//!
//! Answers the WhatsApp Business webhook verification handshake and replies
//! to every inbound message with a fixed acknowledgement through the send API.

pub mod config;
pub mod consts;
pub mod errors;
pub mod metric;
pub mod services;
pub mod webhook;

use logfire::config::{MetricsOptions, SendToLogfire};
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the environment may already be populated
    let dotenv_result = dotenv::dotenv();

    let app_config = config::AppConfig::load()?;

    // Initialize logging and metrics
    let mut logfire_config = logfire::configure()
        .install_panic_handler()
        .with_metrics(Some(MetricsOptions::default()))
        .send_to_logfire(SendToLogfire::IfTokenPresent);
    if let Some(token) = &app_config.logfire_token {
        logfire_config = logfire_config.with_token(token);
    }
    let shutdown_handler = logfire_config.finish()?;

    if let Err(e) = dotenv_result {
        logfire::info!("No .env file loaded: {error}", error = e.to_string());
    }
    if !app_config.uses_default_graph_api() {
        logfire::warn!(
            "Sending acknowledgements through {url}",
            url = app_config.graph_api_url.clone()
        );
    }

    let whatsapp_client = webhook::whatsapp::client::WhatsAppClient::new(&app_config)?;

    run_server(app_config, whatsapp_client).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Creates application state for one server worker
fn create_app_state(
    app_config: config::AppConfig,
    whatsapp_client: webhook::whatsapp::client::WhatsAppClient,
) -> webhook::AppState {
    webhook::AppState {
        app_config,
        message_sender: Box::new(whatsapp_client),
    }
}

/// Configures and starts the web server
async fn run_server(
    app_config: config::AppConfig,
    whatsapp_client: webhook::whatsapp::client::WhatsAppClient,
) -> anyhow::Result<()> {
    let server_addr = app_config.server_addr();

    logfire::info!(
        "Webhook listening on {host}:{port}",
        host = server_addr.0.clone(),
        port = server_addr.1.to_string()
    );

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(
                app_config.clone(),
                whatsapp_client.clone(),
            ))
            .configure(webhook::routes::whatsapp)
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
