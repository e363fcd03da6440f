//! Amount and currency extraction from free text.
//!
//! An ordered rule table is evaluated top to bottom and the first matching
//! rule wins, with no backtracking across rules. The amount is kept as a string
//! (comma normalized to a period) rather than parsed into a float, so
//! currency-significant digits survive untouched.

use std::sync::OnceLock;

use regex::Regex;

/// Currency assigned to a bare number with no symbol or code next to it.
/// Overridable per deployment via `AmountExtractor::new`.
pub const DEFAULT_CURRENCY: &str = "USD";

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Integer digits unbounded, fractional part 1–2 digits, comma or period.
// Recognized units: €, $, USD, EUR (case-insensitive).
re!(re_unit_prefix, r"(?i)(€|\$|\b(?:usd|eur))\s*([0-9]+(?:[.,][0-9]{1,2})?)");
re!(re_unit_suffix, r"(?i)([0-9]+(?:[.,][0-9]{1,2})?)\s*(€|\$|(?:usd|eur)\b)");
re!(re_bare_number, r"[0-9]+(?:[.,][0-9]{1,2})?");

/// `(amount, currency)` as extracted from a message. Both are `None` when the
/// text holds no numeric token at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAmount {
    pub amount: Option<String>,
    pub currency: Option<String>,
}

impl ExtractedAmount {
    fn none() -> Self {
        Self { amount: None, currency: None }
    }
}

#[derive(Debug, Clone)]
pub struct AmountExtractor {
    default_currency: String,
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl AmountExtractor {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self { default_currency: default_currency.into() }
    }

    /// Ordered rules, highest priority first:
    /// 1. unit immediately before the number (`€12,50`, `USD 12.50`);
    /// 2. unit immediately after the number (`12,50€`, `12 usd`);
    /// 3. bare number → the configured default currency.
    pub fn extract(&self, text: &str) -> ExtractedAmount {
        if let Some(c) = re_unit_prefix().captures(text) {
            return ExtractedAmount {
                amount: Some(normalize_amount(&c[2])),
                currency: Some(normalize_unit(&c[1])),
            };
        }
        if let Some(c) = re_unit_suffix().captures(text) {
            return ExtractedAmount {
                amount: Some(normalize_amount(&c[1])),
                currency: Some(normalize_unit(&c[2])),
            };
        }
        if let Some(m) = re_bare_number().find(text) {
            return ExtractedAmount {
                amount: Some(normalize_amount(m.as_str())),
                currency: Some(self.default_currency.clone()),
            };
        }
        ExtractedAmount::none()
    }
}

fn normalize_amount(raw: &str) -> String {
    raw.replace(',', ".")
}

fn normalize_unit(raw: &str) -> String {
    match raw {
        "€" | "$" => raw.to_string(),
        code => code.to_ascii_uppercase(),
    }
}
