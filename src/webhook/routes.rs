use ntex::web;

/// Configures the webhook routes.
///
/// These routes are public endpoints called by the WhatsApp Business platform
/// and don't require authentication.
///
/// # Routes
/// - `GET /webhook` - WhatsApp webhook verification
/// - `POST /webhook` - WhatsApp webhook receiver
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook").service((super::whatsapp::verify, super::whatsapp::receive)),
    );
}
