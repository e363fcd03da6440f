use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("could not fetch image: {0}")]
    Fetch(String),
    #[error("OCR service error: {0}")]
    Engine(String),
}

/// Abstraction over an OCR collaborator: takes an image reference (a media
/// URL) and returns the recognized text. The Google Vision implementation
/// lives in the server crate.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    async fn fetch_text(&self, image_url: &str) -> Result<String, OcrError>;
}

/// Returns a pre-set string, so the interpretation pipeline can be tested
/// without any OCR service.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl OcrBackend for MockRecognizer {
    async fn fetch_text(&self, _image_url: &str) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

/// Fails every request, for degraded-path tests.
pub struct FailingRecognizer;

#[async_trait]
impl OcrBackend for FailingRecognizer {
    async fn fetch_text(&self, _image_url: &str) -> Result<String, OcrError> {
        Err(OcrError::Engine("recognizer offline".into()))
    }
}
