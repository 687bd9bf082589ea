//! Application configuration management with security considerations.
//!
//! All values come from environment variables (optionally seeded from a
//! `.env` file) and are read once at startup. The resulting [`AppConfig`] is
//! immutable and handed to the web server state explicitly; request handlers
//! never read the environment themselves.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Empty secrets are rejected at startup, so an unset verify token can never
//!   match an empty `hub.verify_token` parameter

use crate::consts;
use envconfig::Envconfig;
use std::time::Duration;

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// 🔒 SENSITIVE: WhatsApp Business access token used to send messages
    /// Security: Store in secure secret management system
    #[envconfig(from = "WHATSAPP_TOKEN")]
    pub whatsapp_token: String,

    /// 🔒 SENSITIVE: Token configured in the Meta dashboard for the webhook
    /// verification handshake
    #[envconfig(from = "VERIFY_TOKEN")]
    pub verify_token: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(from = "BIND_ADDRESS", default = "0.0.0.0")]
    pub bind_address: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,

    /// Base URL of the Graph API, including the API version (NON-SENSITIVE)
    #[envconfig(from = "GRAPH_API_URL", default = "https://graph.facebook.com/v12.0")]
    pub graph_api_url: String,

    /// Seconds to wait for the Graph API before giving up on a send
    #[envconfig(from = "OUTBOUND_TIMEOUT_SECS", default = "20")]
    pub outbound_timeout_secs: u64,

    /// 🔒 SENSITIVE: Logfire write token. Telemetry stays on the console when unset
    #[envconfig(from = "LOGFIRE_TOKEN")]
    pub logfire_token: Option<String>,
}

impl AppConfig {
    /// Loads the configuration from the process environment and validates it.
    pub fn load() -> anyhow::Result<Self> {
        let app_config = Self::init_from_env()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Rejects configurations that would weaken the webhook contract.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.whatsapp_token.trim().is_empty() {
            anyhow::bail!("WHATSAPP_TOKEN must not be empty");
        }
        if self.verify_token.trim().is_empty() {
            anyhow::bail!("VERIFY_TOKEN must not be empty");
        }
        if self.graph_api_url.trim().is_empty() {
            anyhow::bail!("GRAPH_API_URL must not be empty");
        }
        if self.outbound_timeout_secs == 0 {
            anyhow::bail!("OUTBOUND_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    /// Constructs the WhatsApp Business API endpoint for sending messages
    /// from the given business phone number.
    pub fn whatsapp_send_msg_endpoint(&self, phone_number_id: &str) -> String {
        format!(
            "{base}/{id}/messages",
            base = self.graph_api_url.trim_end_matches('/'),
            id = phone_number_id
        )
    }

    pub fn outbound_timeout(&self) -> Duration {
        Duration::from_secs(self.outbound_timeout_secs)
    }

    /// Address the web server binds to
    pub fn server_addr(&self) -> (String, u16) {
        (self.bind_address.clone(), self.port)
    }

    pub fn uses_default_graph_api(&self) -> bool {
        self.graph_api_url == consts::DEFAULT_GRAPH_API_URL
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) fn test_config() -> AppConfig {
        AppConfig {
            whatsapp_token: "access-token".to_string(),
            verify_token: "verify-secret".to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            graph_api_url: consts::DEFAULT_GRAPH_API_URL.to_string(),
            outbound_timeout_secs: 20,
            logfire_token: None,
        }
    }

    fn env_with_secrets() -> HashMap<String, String> {
        HashMap::from([
            ("WHATSAPP_TOKEN".to_string(), "access-token".to_string()),
            ("VERIFY_TOKEN".to_string(), "verify-secret".to_string()),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let app_config = AppConfig::init_from_hashmap(&env_with_secrets()).unwrap();

        assert_eq!(app_config.port, 8080);
        assert_eq!(app_config.bind_address, "0.0.0.0");
        assert!(app_config.uses_default_graph_api());
        assert_eq!(app_config.outbound_timeout(), Duration::from_secs(20));
        assert!(app_config.logfire_token.is_none());
        assert!(app_config.validate().is_ok());
    }

    #[test]
    fn test_port_override() {
        let mut env = env_with_secrets();
        env.insert("PORT".to_string(), "3000".to_string());

        let app_config = AppConfig::init_from_hashmap(&env).unwrap();

        assert_eq!(app_config.server_addr(), ("0.0.0.0".to_string(), 3000));
    }

    #[test]
    fn test_missing_secrets_fail() {
        let mut env = env_with_secrets();
        env.remove("VERIFY_TOKEN");

        assert!(AppConfig::init_from_hashmap(&env).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let mut env = env_with_secrets();
        env.insert("PORT".to_string(), "not-a-port".to_string());

        assert!(AppConfig::init_from_hashmap(&env).is_err());
    }

    #[test]
    fn test_empty_verify_token_rejected() {
        let mut env = env_with_secrets();
        env.insert("VERIFY_TOKEN".to_string(), "".to_string());

        let app_config = AppConfig::init_from_hashmap(&env).unwrap();

        assert!(app_config.validate().is_err());
    }

    #[test]
    fn test_empty_access_token_rejected() {
        let mut app_config = test_config();
        app_config.whatsapp_token = "  ".to_string();

        assert!(app_config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut app_config = test_config();
        app_config.outbound_timeout_secs = 0;

        assert!(app_config.validate().is_err());
    }

    #[test]
    fn test_send_msg_endpoint() {
        let mut app_config = test_config();
        assert_eq!(
            app_config.whatsapp_send_msg_endpoint("123"),
            "https://graph.facebook.com/v12.0/123/messages"
        );

        app_config.graph_api_url = "http://localhost:9000/v12.0/".to_string();
        assert_eq!(
            app_config.whatsapp_send_msg_endpoint("123"),
            "http://localhost:9000/v12.0/123/messages"
        );
    }
}
