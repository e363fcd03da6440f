//! Asset store backed by Google Drive: download the Twilio media, upload it
//! into the configured folder, make it link-readable, return the public link.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use libreta_core::{AssetStore, AssetTarget, SinkError};

use crate::config::DriveConfig;
use crate::google::auth::GoogleAuth;
use crate::twilio::TwilioMedia;

const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart";
const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

pub struct DriveStore {
    auth: Arc<GoogleAuth>,
    http: reqwest::Client,
    media: TwilioMedia,
    config: DriveConfig,
}

impl DriveStore {
    pub fn new(auth: Arc<GoogleAuth>, media: TwilioMedia, config: DriveConfig) -> Self {
        Self {
            auth,
            http: reqwest::Client::new(),
            media,
            config,
        }
    }

    fn folder_id(&self, target: AssetTarget) -> &str {
        match target {
            AssetTarget::Expenses => &self.config.expenses_folder_id,
            AssetTarget::Rentals => &self.config.rentals_folder_id,
        }
    }
}

#[async_trait]
impl AssetStore for DriveStore {
    async fn store_image(
        &self,
        image_url: &str,
        target: AssetTarget,
    ) -> Result<String, SinkError> {
        let bytes = self
            .media
            .download(image_url)
            .await
            .map_err(SinkError::Transport)?;
        let token = self
            .auth
            .token()
            .await
            .map_err(|e| SinkError::Auth(e.to_string()))?;

        let name = format!("recibo-{}.jpg", chrono::Utc::now().format("%Y%m%d%H%M%S"));
        let metadata = json!({ "name": name, "parents": [self.folder_id(target)] }).to_string();
        let form = Form::new()
            .part(
                "metadata",
                Part::text(metadata)
                    .mime_str("application/json")
                    .map_err(|e| SinkError::Transport(e.to_string()))?,
            )
            .part(
                "file",
                Part::bytes(bytes)
                    .file_name(name.clone())
                    .mime_str("image/jpeg")
                    .map_err(|e| SinkError::Transport(e.to_string()))?,
            );

        let res = self
            .http
            .post(UPLOAD_URL)
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SinkError::Upstream(format!("upload: {status} {body}")));
        }
        let uploaded: serde_json::Value = res
            .json()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        let file_id = uploaded["id"]
            .as_str()
            .ok_or_else(|| SinkError::Upstream("upload response without file id".into()))?
            .to_string();

        // A private file is useless in the ledger; but if only the permission
        // call fails, the link is still worth storing.
        let perm = self
            .http
            .post(format!("{FILES_URL}/{file_id}/permissions"))
            .bearer_auth(&token)
            .json(&json!({ "role": "reader", "type": "anyone" }))
            .send()
            .await;
        match perm {
            Ok(res) if !res.status().is_success() => {
                tracing::warn!(status = %res.status(), "drive permission request rejected");
            }
            Err(e) => tracing::warn!(error = %e, "drive permission request failed"),
            Ok(_) => {}
        }

        Ok(public_link(&file_id))
    }
}

fn public_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?id={file_id}")
}
