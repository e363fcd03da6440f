//! Collaborator seams: the ledger (spreadsheet) sink and the asset (image)
//! store. The interpreter only ever talks to these traits; the Google-backed
//! implementations live in the server crate, the in-memory ones below are for
//! tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::routing::{AssetTarget, LedgerTarget};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream rejected request: {0}")]
    Upstream(String),
    #[error("credentials unavailable: {0}")]
    Auth(String),
}

/// Append-only row sink. There is no update or delete path.
#[async_trait]
pub trait LedgerSink: Send + Sync {
    async fn append(&self, target: LedgerTarget, row: Vec<String>) -> Result<(), SinkError>;
}

/// Uploads an attachment and returns a public link to it.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn store_image(&self, image_url: &str, target: AssetTarget)
        -> Result<String, SinkError>;
}

/// In-memory collaborator doubles. Always compiled (not `cfg(test)`) so the
/// bot and server test suites can share them.
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    /// Records every appended row.
    #[derive(Default)]
    pub struct MemoryLedger {
        rows: Mutex<Vec<(LedgerTarget, Vec<String>)>>,
    }

    impl MemoryLedger {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn rows(&self) -> Vec<(LedgerTarget, Vec<String>)> {
            self.rows.lock().await.clone()
        }
    }

    #[async_trait]
    impl LedgerSink for MemoryLedger {
        async fn append(&self, target: LedgerTarget, row: Vec<String>) -> Result<(), SinkError> {
            self.rows.lock().await.push((target, row));
            Ok(())
        }
    }

    /// Rejects every append, for degraded-path tests.
    pub struct FailingLedger;

    #[async_trait]
    impl LedgerSink for FailingLedger {
        async fn append(&self, _target: LedgerTarget, _row: Vec<String>) -> Result<(), SinkError> {
            Err(SinkError::Upstream("ledger offline".into()))
        }
    }

    /// Returns a fixed link for every upload.
    pub struct FixedAssetStore {
        pub link: String,
    }

    impl FixedAssetStore {
        pub fn new(link: impl Into<String>) -> Self {
            Self { link: link.into() }
        }
    }

    #[async_trait]
    impl AssetStore for FixedAssetStore {
        async fn store_image(
            &self,
            _image_url: &str,
            _target: AssetTarget,
        ) -> Result<String, SinkError> {
            Ok(self.link.clone())
        }
    }

    /// Fails every upload, for degraded-path tests.
    pub struct FailingAssetStore;

    #[async_trait]
    impl AssetStore for FailingAssetStore {
        async fn store_image(
            &self,
            _image_url: &str,
            _target: AssetTarget,
        ) -> Result<String, SinkError> {
            Err(SinkError::Transport("upload failed".into()))
        }
    }
}
