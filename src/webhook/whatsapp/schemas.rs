//! # WhatsApp Webhook Schemas
//!
//! Data structures for the notifications WhatsApp Business posts to the
//! webhook. The platform omits fields freely, so every field falls back to an
//! empty value when missing or `null`; only a value of the wrong JSON type
//! makes a payload invalid.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root webhook payload from WhatsApp
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookPayload {
    /// The object type, "whatsapp_business_account" for WhatsApp deliveries
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    /// Array of entry objects containing the actual data
    #[serde(deserialize_with = "null_as_default")]
    pub entry: Vec<Entry>,
}

/// Entry object containing changes
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Entry {
    /// Business Account ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub changes: Vec<Change>,
}

/// Change object containing the actual webhook data
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Change {
    /// The field that changed (e.g., "messages")
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Value,
}

/// Value object containing messages and metadata
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Value {
    /// Messaging product (e.g., "whatsapp")
    #[serde(deserialize_with = "null_as_default")]
    pub messaging_product: String,
    /// Metadata about the receiving business phone number
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Array of contacts (senders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    /// Array of messages received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

/// Metadata about the WhatsApp Business phone number
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub display_phone_number: String,
    /// Phone number ID, used to address the send API
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number_id: String,
}

/// Contact information for the message sender
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    /// WhatsApp ID (phone number)
    #[serde(deserialize_with = "null_as_default")]
    pub wa_id: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Message object
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Message {
    /// Sender's WhatsApp ID (phone number)
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Message type (text, image, video, document, etc.)
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub msg_type: String,
    /// Text message content (if type is "text")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextMessage>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TextMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

impl Message {
    /// Text body of the message, empty for non text messages
    pub fn text_body(&self) -> &str {
        self.text.as_ref().map(|t| t.body.as_str()).unwrap_or_default()
    }
}
