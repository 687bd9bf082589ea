//! # WhatsApp Outgoing Message Schemas
//!
//! Payload posted to the WhatsApp Business send API to acknowledge an inbound
//! message.

use crate::consts;
use serde::{Deserialize, Serialize};

/// Text reply sent back to the author of an inbound message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient's WhatsApp ID, always the inbound sender
    pub to: String,
    pub text: AcknowledgementText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcknowledgementText {
    pub body: String,
}

impl Acknowledgement {
    /// Creates the fixed acknowledgement addressed to `to`
    pub fn new(to: String) -> Self {
        Self {
            messaging_product: consts::MESSAGING_PRODUCT.to_string(),
            to,
            text: AcknowledgementText {
                body: consts::ACKNOWLEDGEMENT_BODY.to_string(),
            },
        }
    }
}
