//! # WhatsApp API Client
//!
//! Sends acknowledgements to the WhatsApp Business send API. The access token
//! travels as the `access_token` query parameter, so transport errors are
//! stripped of their URL before being reported.

use super::outgoing_schemas::Acknowledgement;
use crate::{config::AppConfig, services::MessageSender};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// WhatsApp API client for sending acknowledgements
#[derive(Clone)]
pub struct WhatsAppClient {
    /// HTTP client for making API requests, carries the outbound timeout
    client: reqwest::Client,
    /// Source of the send endpoint and access token
    app_config: AppConfig,
}

impl WhatsAppClient {
    /// Creates a new WhatsApp client
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(app_config.outbound_timeout())
            .build()
            .context("failed to build WhatsApp HTTP client")?;

        Ok(Self {
            client,
            app_config: app_config.clone(),
        })
    }

    /// Builds the send request without executing it
    pub fn build_request(
        &self,
        phone_number_id: &str,
        message: &Acknowledgement,
    ) -> Result<reqwest::Request> {
        self.client
            .post(self.app_config.whatsapp_send_msg_endpoint(phone_number_id))
            .query(&[("access_token", self.app_config.whatsapp_token.as_str())])
            .json(message)
            .build()
            .map_err(|e| e.without_url())
            .context("failed to build WhatsApp send request")
    }
}

#[async_trait]
impl MessageSender for WhatsAppClient {
    #[tracing::instrument(skip_all, fields(phone_number_id = %phone_number_id))]
    async fn send_acknowledgement(
        &self,
        phone_number_id: &str,
        message: &Acknowledgement,
    ) -> Result<()> {
        let request = self.build_request(phone_number_id, message)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| e.without_url())
            .context("Failed to send request to WhatsApp API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("WhatsApp API returned error status {}: {}", status, body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;

    #[test]
    fn test_build_request_targets_phone_number() {
        let client = WhatsAppClient::new(&test_config()).unwrap();
        let ack = Acknowledgement::new("5511999999999".to_string());

        let request = client.build_request("123", &ack).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://graph.facebook.com/v12.0/123/messages?access_token=access-token"
        );
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_build_request_body_is_acknowledgement() {
        let client = WhatsAppClient::new(&test_config()).unwrap();
        let ack = Acknowledgement::new("5511999999999".to_string());

        let request = client.build_request("123", &ack).unwrap();
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();

        assert_eq!(
            body,
            br#"{"messaging_product":"whatsapp","to":"5511999999999","text":{"body":"Ack: qualquer coisa"}}"#
        );
    }

    #[test]
    fn test_access_token_is_url_encoded() {
        let mut app_config = test_config();
        app_config.whatsapp_token = "a b&c".to_string();
        let client = WhatsAppClient::new(&app_config).unwrap();

        let request = client
            .build_request("123", &Acknowledgement::new("1".to_string()))
            .unwrap();

        assert_eq!(request.url().query(), Some("access_token=a+b%26c"));
    }
}
