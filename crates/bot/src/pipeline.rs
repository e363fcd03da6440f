//! The interpretation pipeline: one inbound message in, one outcome out.
//!
//! Orchestrates the parsers, the session store and the routing policy, and
//! hands finished records to the collaborators. The pipeline itself performs
//! no I/O; every message is an isolated unit of work and no failure here is
//! fatal to the process.

use std::sync::Arc;

use libreta_core::{
    AssetStore, Directory, ExpenseRecord, InboundMessage, LedgerSink, LedgerTarget,
    RentalReceiptRecord, RoutingPolicy, SessionMode, SessionStore,
};
use libreta_ocr::{extract_receipt, OcrBackend};
use libreta_parse::{classify, clean_description, AmountExtractor};

/// What the interpreter decided for one message. The webhook renders this
/// into the acknowledgement text.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// An admin switched their accounting context. No record produced.
    ModeChanged(SessionMode),
    /// Rental intake is armed but the message carried no image.
    PhotoRequired,
    RentalRecorded(RentalReceiptRecord),
    ExpenseRecorded(ExpenseRecord),
    /// The ledger sink rejected the append. Terminal for this message only.
    LedgerUnavailable,
}

pub struct Interpreter {
    directory: Directory,
    policy: RoutingPolicy,
    sessions: SessionStore,
    extractor: AmountExtractor,
    ledger: Arc<dyn LedgerSink>,
    assets: Arc<dyn AssetStore>,
    ocr: Arc<dyn OcrBackend>,
}

impl Interpreter {
    pub fn new(
        directory: Directory,
        policy: RoutingPolicy,
        extractor: AmountExtractor,
        ledger: Arc<dyn LedgerSink>,
        assets: Arc<dyn AssetStore>,
        ocr: Arc<dyn OcrBackend>,
    ) -> Self {
        Self {
            directory,
            policy,
            sessions: SessionStore::new(),
            extractor,
            ledger,
            assets,
            ocr,
        }
    }

    /// Current mode of a sender, for diagnostics and tests.
    pub async fn current_mode(&self, sender: &str) -> SessionMode {
        self.sessions.get(sender).await
    }

    pub async fn handle(&self, msg: &InboundMessage) -> Outcome {
        if let Some(mode) = SessionMode::from_command(&msg.body) {
            if self.directory.is_admin(&msg.sender) {
                self.sessions.set(&msg.sender, mode).await;
                tracing::info!(sender = %msg.sender, %mode, "session mode changed");
                return Outcome::ModeChanged(mode);
            }
            // A mode letter from a non-admin is just a (strange) expense
            // message; falling through silently is the intended policy.
        }

        if self.directory.is_rental_authorized(&msg.sender)
            && self.sessions.rental_active(&self.directory).await
        {
            return self.handle_rental(msg).await;
        }

        self.handle_expense(msg).await
    }

    async fn handle_rental(&self, msg: &InboundMessage) -> Outcome {
        let Some(image_url) = msg.media_url.as_deref() else {
            return Outcome::PhotoRequired;
        };

        let text = match self.ocr.fetch_text(image_url).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "OCR failed, continuing with empty text");
                String::new()
            }
        };
        let fields = extract_receipt(&text);
        let route = self
            .policy
            .route(&msg.sender, SessionMode::RentalIncome, &self.directory);
        let asset_link = self.upload(image_url, route.assets).await;

        let record = RentalReceiptRecord {
            timestamp: msg.received_at,
            payer_name: fields.payer_name,
            document_number: fields.document_number,
            amount: fields.amount,
            asset_link,
        };

        match self.ledger.append(LedgerTarget::Rentals, record.to_row()).await {
            Ok(()) => {
                tracing::info!(document = %record.document_number, "rental receipt recorded");
                Outcome::RentalRecorded(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rental append failed");
                Outcome::LedgerUnavailable
            }
        }
    }

    async fn handle_expense(&self, msg: &InboundMessage) -> Outcome {
        let mode = match self.sessions.get(&msg.sender).await {
            // The rentals ledger only ever takes receipt rows; an admin in
            // mode A writing plain text records a personal expense.
            SessionMode::RentalIncome => SessionMode::Personal,
            mode => mode,
        };
        let route = self.policy.route(&msg.sender, mode, &self.directory);

        let extracted = self.extractor.extract(&msg.body);
        let asset_link = match msg.media_url.as_deref() {
            Some(url) => self.upload(url, route.assets).await,
            None => String::new(),
        };

        let record = ExpenseRecord {
            timestamp: msg.received_at,
            sender: msg.sender.clone(),
            category: classify(&msg.body).to_string(),
            description: clean_description(&msg.body),
            amount: extracted.amount,
            currency: extracted.currency,
            asset_link,
        };

        match self.ledger.append(route.ledger, record.to_row()).await {
            Ok(()) => {
                tracing::info!(
                    ledger = route.ledger.as_str(),
                    category = %record.category,
                    "expense recorded"
                );
                Outcome::ExpenseRecorded(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, "expense append failed");
                Outcome::LedgerUnavailable
            }
        }
    }

    /// Upload failure degrades to an empty link; the record is still produced.
    async fn upload(&self, image_url: &str, target: libreta_core::AssetTarget) -> String {
        match self.assets.store_image(image_url, target).await {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!(error = %e, "asset upload failed, storing empty link");
                String::new()
            }
        }
    }
}
