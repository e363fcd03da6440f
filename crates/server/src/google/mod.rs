//! Google-backed collaborators: OAuth2 service-account auth, the Sheets
//! ledger sink, the Drive asset store, and the Vision OCR backend.

pub mod auth;
pub mod drive;
pub mod sheets;
pub mod vision;

pub use auth::GoogleAuth;
pub use drive::DriveStore;
pub use sheets::SheetsLedger;
pub use vision::VisionOcr;
