//! OCR backend using Google Vision `images:annotate` TEXT_DETECTION.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use serde_json::json;

use libreta_ocr::{OcrBackend, OcrError};

use crate::google::auth::GoogleAuth;
use crate::twilio::TwilioMedia;

const VISION_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

pub struct VisionOcr {
    auth: Arc<GoogleAuth>,
    http: reqwest::Client,
    media: TwilioMedia,
}

impl VisionOcr {
    pub fn new(auth: Arc<GoogleAuth>, media: TwilioMedia) -> Self {
        Self {
            auth,
            http: reqwest::Client::new(),
            media,
        }
    }
}

#[async_trait]
impl OcrBackend for VisionOcr {
    async fn fetch_text(&self, image_url: &str) -> Result<String, OcrError> {
        let bytes = self.media.download(image_url).await.map_err(OcrError::Fetch)?;
        let token = self
            .auth
            .token()
            .await
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        let content = base64::engine::general_purpose::STANDARD.encode(bytes);
        let body = json!({
            "requests": [{
                "image": { "content": content },
                "features": [{ "type": "TEXT_DETECTION" }],
            }]
        });
        let res = self
            .http
            .post(VISION_URL)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::Engine(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(OcrError::Engine(format!("annotate: {status} {body}")));
        }
        let parsed: serde_json::Value = res
            .json()
            .await
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        // First annotation is the full detected text; no annotations means a
        // blank (or unreadable) image, which callers treat as empty.
        Ok(parsed["responses"][0]["textAnnotations"][0]["description"]
            .as_str()
            .unwrap_or("")
            .to_string())
    }
}
