use chrono::{DateTime, Utc};

/// One inbound WhatsApp message, as handed to the interpreter by the webhook.
/// Ephemeral: built per request, never persisted.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Phone-number-like sender identifier, `whatsapp:` prefix already stripped.
    pub sender: String,
    /// Message text. Empty for image-only messages.
    pub body: String,
    /// At most one attached image, as an opaque media URL.
    pub media_url: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        media_url: Option<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            media_url,
            received_at: Utc::now(),
        }
    }
}
