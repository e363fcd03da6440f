use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ledger timestamp format, shared by both record types and the reply texts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One interpreted expense message, ready to append to a ledger.
/// Always fully formed before routing: unparsable fields are `None`/empty,
/// never missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub category: String,
    pub description: String,
    /// Decimal amount as a string (comma already normalized to period).
    pub amount: Option<String>,
    /// Currency symbol or code (`€`, `$`, `USD`, `EUR`).
    pub currency: Option<String>,
    /// Public link to the uploaded attachment; empty when absent or upload failed.
    pub asset_link: String,
}

impl ExpenseRecord {
    /// Row form in ledger column order. Null amount/currency become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.sender.clone(),
            self.category.clone(),
            self.description.clone(),
            self.amount.clone().unwrap_or_default(),
            self.currency.clone().unwrap_or_default(),
            self.asset_link.clone(),
        ]
    }
}

/// One registered rental deposit slip, produced only through the rental
/// receipt flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalReceiptRecord {
    pub timestamp: DateTime<Utc>,
    pub payer_name: String,
    pub document_number: String,
    pub amount: Option<String>,
    pub asset_link: String,
}

impl RentalReceiptRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.payer_name.clone(),
            self.document_number.clone(),
            self.amount.clone().unwrap_or_default(),
            self.asset_link.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 13, 45, 9).unwrap()
    }

    #[test]
    fn expense_row_order_and_format() {
        let r = ExpenseRecord {
            timestamp: ts(),
            sender: "+593990000001".into(),
            category: "Supermercado".into(),
            description: "Supermercado".into(),
            amount: Some("25".into()),
            currency: Some("€".into()),
            asset_link: String::new(),
        };
        assert_eq!(
            r.to_row(),
            vec![
                "2024-05-02 13:45:09",
                "+593990000001",
                "Supermercado",
                "Supermercado",
                "25",
                "€",
                "",
            ]
        );
    }

    #[test]
    fn expense_row_null_sentinels_become_empty_cells() {
        let r = ExpenseRecord {
            timestamp: ts(),
            sender: "+1".into(),
            category: "Gastos varios".into(),
            description: String::new(),
            amount: None,
            currency: None,
            asset_link: String::new(),
        };
        let row = r.to_row();
        assert_eq!(row[4], "");
        assert_eq!(row[5], "");
    }

    #[test]
    fn rental_row_order() {
        let r = RentalReceiptRecord {
            timestamp: ts(),
            payer_name: "Juan Perez".into(),
            document_number: "123456".into(),
            amount: Some("45.00".into()),
            asset_link: "https://drive.google.com/uc?id=abc".into(),
        };
        assert_eq!(
            r.to_row(),
            vec![
                "2024-05-02 13:45:09",
                "Juan Perez",
                "123456",
                "45.00",
                "https://drive.google.com/uc?id=abc",
            ]
        );
    }
}
