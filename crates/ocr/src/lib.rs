pub mod extract;
pub mod recognizer;

pub use extract::{extract_receipt, ReceiptFields};
pub use recognizer::{FailingRecognizer, MockRecognizer, OcrBackend, OcrError};
