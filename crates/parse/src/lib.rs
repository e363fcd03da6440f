pub mod amount;
pub mod category;
pub mod sanitize;
pub(crate) mod util;

pub use amount::{AmountExtractor, ExtractedAmount, DEFAULT_CURRENCY};
pub use category::{classify, DEFAULT_CATEGORY};
pub use sanitize::clean_description;
