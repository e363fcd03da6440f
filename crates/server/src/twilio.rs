//! Twilio side of the webhook: the inbound form shape, TwiML rendering, and
//! authenticated media download.

use libreta_core::InboundMessage;
use serde::Deserialize;

/// The subset of Twilio's webhook form the bot consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioWebhook {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "NumMedia", default)]
    pub num_media: String,
    #[serde(rename = "MediaUrl0", default)]
    pub media_url0: Option<String>,
}

impl TwilioWebhook {
    pub fn into_message(self) -> InboundMessage {
        let sender = self
            .from
            .strip_prefix("whatsapp:")
            .unwrap_or(&self.from)
            .to_string();
        let num_media: u32 = self.num_media.trim().parse().unwrap_or(0);
        let media_url = if num_media > 0 { self.media_url0 } else { None };
        InboundMessage::new(sender, self.body, media_url)
    }
}

/// Wrap a reply text in a minimal TwiML messaging response.
pub fn twiml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Downloads webhook media. Twilio media URLs require HTTP basic auth with
/// the account SID and auth token.
#[derive(Clone)]
pub struct TwilioMedia {
    http: reqwest::Client,
    account_sid: Option<String>,
    auth_token: Option<String>,
}

impl TwilioMedia {
    pub fn from_env() -> Self {
        Self {
            http: reqwest::Client::new(),
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok(),
        }
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>, String> {
        let mut req = self.http.get(url);
        if let (Some(sid), Some(token)) = (&self.account_sid, &self.auth_token) {
            req = req.basic_auth(sid, Some(token));
        }
        let res = req.send().await.map_err(|e| e.to_string())?;
        if !res.status().is_success() {
            return Err(format!("media download failed: {}", res.status()));
        }
        let bytes = res.bytes().await.map_err(|e| e.to_string())?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_whatsapp_prefix() {
        let form = TwilioWebhook {
            from: "whatsapp:+593990000001".into(),
            body: "taxi 7".into(),
            num_media: "0".into(),
            media_url0: None,
        };
        let msg = form.into_message();
        assert_eq!(msg.sender, "+593990000001");
        assert_eq!(msg.media_url, None);
    }

    #[test]
    fn media_url_only_counts_when_num_media_is_positive() {
        let form = TwilioWebhook {
            from: "+1".into(),
            body: String::new(),
            num_media: "1".into(),
            media_url0: Some("https://api.twilio.com/m/0".into()),
        };
        assert!(form.into_message().media_url.is_some());

        let form = TwilioWebhook {
            from: "+1".into(),
            body: String::new(),
            // Twilio sends counts as strings; garbage means no media.
            num_media: "".into(),
            media_url0: Some("https://api.twilio.com/m/0".into()),
        };
        assert!(form.into_message().media_url.is_none());
    }

    #[test]
    fn twiml_escapes_markup() {
        let xml = twiml("a < b & c");
        assert!(xml.contains("<Message>a &lt; b &amp; c</Message>"));
        assert!(xml.starts_with("<?xml"));
    }
}
