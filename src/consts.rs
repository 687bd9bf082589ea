/// `object` value of every notification sent by the WhatsApp Business platform
pub const WHATSAPP_BUSINESS_ACCOUNT_OBJECT: &str = "whatsapp_business_account";

/// `hub.mode` value sent by Meta when subscribing the webhook
pub const SUBSCRIBE_MODE: &str = "subscribe";

pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Fixed text sent back to every sender. It acknowledges receipt, it never
/// echoes the inbound content.
pub const ACKNOWLEDGEMENT_BODY: &str = "Ack: qualquer coisa";

pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com/v12.0";

/// Log line emitted once the platform handshake succeeds
pub const WEBHOOK_VERIFIED_MSG: &str = "WEBHOOK_VERIFIED";
