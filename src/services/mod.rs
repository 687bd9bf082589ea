use crate::webhook::whatsapp::outgoing_schemas::Acknowledgement;
use async_trait::async_trait;

/// Sends acknowledgements through the messaging platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender {
    /// Posts `message` from the business phone number `phone_number_id`.
    async fn send_acknowledgement(
        &self,
        phone_number_id: &str,
        message: &Acknowledgement,
    ) -> anyhow::Result<()>;
}

pub type ImplMessageSender = Box<dyn MessageSender>;
