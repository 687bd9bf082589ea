//! # WhatsApp Webhook Handler
//!
//! Decides whether a delivery must be acknowledged and sends the
//! acknowledgement.
//!
//! Only the first entry, its first change and that change's first message are
//! looked at. The platform may batch several items in one delivery; the rest
//! are ignored on purpose.

use super::{
    outgoing_schemas::Acknowledgement,
    schemas::{Message, WebhookPayload},
};
use crate::{consts, metric, services::MessageSender};

/// Message to acknowledge, borrowed from the delivery
#[derive(Debug)]
pub struct AcknowledgementTarget<'a> {
    /// Business phone number that received the message
    pub phone_number_id: &'a str,
    pub message: &'a Message,
}

impl AcknowledgementTarget<'_> {
    pub fn acknowledgement(&self) -> Acknowledgement {
        Acknowledgement::new(self.message.from.clone())
    }
}

/// Returns the message a delivery should be acknowledged for, if any.
pub fn acknowledgement_target(payload: &WebhookPayload) -> Option<AcknowledgementTarget<'_>> {
    if payload.object != consts::WHATSAPP_BUSINESS_ACCOUNT_OBJECT {
        return None;
    }

    let value = &payload.entry.first()?.changes.first()?.value;
    let message = value.messages.as_ref()?.first()?;

    Some(AcknowledgementTarget {
        phone_number_id: &value.metadata.phone_number_id,
        message,
    })
}

/// Info level description of an inbound message. The body stays out of it,
/// only its length is reported.
fn received_summary(message: &Message) -> String {
    format!(
        "Message received from {from} (type={msg_type}, body_chars={len})",
        from = message.from,
        msg_type = message.msg_type,
        len = message.text_body().chars().count()
    )
}

/// Acknowledges the first message of a delivery.
///
/// Send failures are logged and counted; the caller always answers the
/// platform with 200 afterwards, so nothing is returned.
pub async fn process_webhook(payload: &WebhookPayload, sender: &dyn MessageSender) {
    let Some(target) = acknowledgement_target(payload) else {
        logfire::info!(
            "Nothing to acknowledge: object={object}",
            object = payload.object.clone()
        );
        metric::record(metric::Stage::Delivery, "ignored");
        return;
    };

    logfire::info!("{summary}", summary = received_summary(target.message));
    logfire::debug!(
        "Message body: {body}",
        body = target.message.text_body().to_string()
    );
    metric::record(metric::Stage::Delivery, "acknowledged");

    let ack = target.acknowledgement();
    match sender
        .send_acknowledgement(target.phone_number_id, &ack)
        .await
    {
        Ok(()) => metric::record(metric::Stage::Send, "sent"),
        Err(e) => {
            logfire::error!(
                "Failed to send acknowledgement: {error}",
                error = format!("{e:#}")
            );
            metric::record(metric::Stage::Send, "failed");
        }
    }
}
