//! Webhook handlers for the WhatsApp Business platform
//!
//! - [`whatsapp`] - verification handshake and message acknowledgement
//! - [`routes`] - route registration

pub mod routes;
pub mod whatsapp;

use crate::{config::AppConfig, services};

/// State shared by the webhook handlers. Read only once the server starts.
pub struct AppState {
    pub app_config: AppConfig,
    pub message_sender: services::ImplMessageSender,
}
