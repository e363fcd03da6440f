pub mod message;
pub mod record;
pub mod routing;
pub mod session;
pub mod sink;

pub use message::InboundMessage;
pub use record::{ExpenseRecord, RentalReceiptRecord};
pub use routing::{AssetTarget, DefaultRoute, Directory, LedgerTarget, Route, RoutingPolicy};
pub use session::{SessionMode, SessionStore};
pub use sink::{AssetStore, LedgerSink, SinkError};
