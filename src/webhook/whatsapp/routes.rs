//! WhatsApp webhook endpoint handlers
//!
//! Implements both the verification endpoint (GET) and the webhook receiver
//! (POST). Once a delivery parses, the platform always gets a 200 back, even
//! when the acknowledgement could not be sent, so it never redelivers.

use super::{handler, schemas};
use crate::{consts, errors, metric, webhook::AppState};
use ntex::{util::Bytes, web};
use subtle::ConstantTimeEq;

/// Query parameters for webhook verification
#[derive(Debug, Default)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    pub mode: Option<String>,
    /// The verification token from WhatsApp
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    pub challenge: Option<String>,
}

impl VerifyQuery {
    /// Reads the handshake parameters from a raw query string.
    ///
    /// Repeated keys keep their first value and unknown keys are ignored, so
    /// any query string yields parameters and the handshake can only be
    /// accepted or rejected.
    pub fn from_query_string(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            mode: first("hub.mode"),
            verify_token: first("hub.verify_token"),
            challenge: first("hub.challenge"),
        }
    }

    /// True when the handshake asks to subscribe with the expected token.
    pub fn is_valid_subscription(&self, expected_token: &str) -> bool {
        let mode_ok = self.mode.as_deref() == Some(consts::SUBSCRIBE_MODE);
        let token_ok: bool = self
            .verify_token
            .as_deref()
            .unwrap_or_default()
            .as_bytes()
            .ct_eq(expected_token.as_bytes())
            .into();

        mode_ok && token_ok
    }
}

/// Webhook verification endpoint (GET)
///
/// # Query Parameters
/// - `hub.mode` - Should be "subscribe"
/// - `hub.verify_token` - Token configured in WhatsApp dashboard
/// - `hub.challenge` - Challenge string to echo back
///
/// # Returns
/// - 200 with challenge string if verification succeeds
/// - 403 with an empty body otherwise
#[web::get("")]
pub async fn verify(
    req: web::HttpRequest,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let query = VerifyQuery::from_query_string(req.query_string());

    if !query.is_valid_subscription(&app_state.app_config.verify_token) {
        metric::record(metric::Stage::Verification, "rejected");
        return Err(errors::WebhookError::VerificationFailed.into());
    }

    logfire::info!("{msg}", msg = consts::WEBHOOK_VERIFIED_MSG.to_string());
    metric::record(metric::Stage::Verification, "accepted");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.unwrap_or_default()))
}

/// Webhook receiver endpoint (POST)
///
/// Parses the delivery and acknowledges its first message. The acknowledgement
/// is sent before answering, so the platform waits for the send API.
///
/// # Returns
/// - 200 with an empty body once the payload parses
/// - 400 with `{"error": ...}` if it does not
#[web::post("")]
pub async fn receive(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: schemas::WebhookPayload = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            metric::record(metric::Stage::Delivery, "malformed");
            return Err(errors::WebhookError::MalformedPayload(e.to_string()).into());
        }
    };

    logfire::info!(
        "Received webhook: object={object}, entries={entries}",
        object = payload.object.clone(),
        entries = payload.entry.len().to_string()
    );

    handler::process_webhook(&payload, app_state.message_sender.as_ref()).await;

    Ok(web::HttpResponse::Ok().finish())
}
