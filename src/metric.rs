use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static WEBHOOK_EVENTS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("whatsapp_ack_webhook_events")
        .with_description("Handshakes, deliveries and acknowledgement sends")
        .with_unit("event")
        .build()
});

/// Stage of the webhook an event belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Verification,
    Delivery,
    Send,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Verification => "verification",
            Stage::Delivery => "delivery",
            Stage::Send => "send",
        }
    }
}

fn event_attributes(stage: Stage, outcome: &'static str) -> [KeyValue; 2] {
    [
        KeyValue::new("stage", stage.as_str()),
        KeyValue::new("outcome", outcome),
    ]
}

/// Counts one webhook event.
///
/// Outcomes per stage: verification "accepted" | "rejected", delivery
/// "acknowledged" | "ignored" | "malformed", send "sent" | "failed".
pub fn record(stage: Stage, outcome: &'static str) {
    WEBHOOK_EVENTS.add(1, &event_attributes(stage, outcome));
}
