use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors visible to the webhook caller.
///
/// Anything not listed here (unexpected payload shapes, outbound send
/// failures) is logged and answered with 200 so the platform does not retry
/// the delivery.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    /// Handshake with a wrong mode or verify token
    VerificationFailed,
    /// Body that is not JSON or does not fit the notification shape
    #[display("failed to decode message payload: {_0}")]
    MalformedPayload(#[error(not(source))] String),
}

impl WebhookError {
    fn public_message(&self) -> &'static str {
        match self {
            WebhookError::VerificationFailed => "webhook verification failed",
            WebhookError::MalformedPayload(_) => "failed to decode message payload",
        }
    }
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        match self {
            WebhookError::VerificationFailed => {
                logfire::warn!("{msg}", msg = self.public_message().to_string());
                web::HttpResponse::build(self.status_code()).finish()
            }
            WebhookError::MalformedPayload(_) => {
                logfire::error!("{error}", error = self.to_string());
                web::HttpResponse::build(self.status_code()).json(&serde_json::json!({
                    "error": self.public_message()
                }))
            }
        }
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::VerificationFailed => http::StatusCode::FORBIDDEN,
            WebhookError::MalformedPayload(_) => http::StatusCode::BAD_REQUEST,
        }
    }
}
