//! User-facing acknowledgement texts. Presentation only, but the fields
//! surfaced here always match the fields actually stored.

use libreta_core::record::TIMESTAMP_FORMAT;
use libreta_core::SessionMode;

use crate::pipeline::Outcome;

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::ModeChanged(SessionMode::RentalIncome) => {
            "🏠 Modo *ARRIENDOS* activado.\nEnvía la imagen del comprobante.".to_string()
        }
        Outcome::ModeChanged(mode) => format!("✔ Modo cambiado a: *{mode}*"),
        Outcome::PhotoRequired => {
            "📸 Envía una *imagen del comprobante* para procesar el arriendo.".to_string()
        }
        Outcome::RentalRecorded(r) => {
            let mut text = format!(
                "🏠 *ARRIENDO REGISTRADO*\n📅 Fecha: {}\n👤 Nombre: {}\n📄 Comprobante: {}\n💰 Valor: {}",
                r.timestamp.format(TIMESTAMP_FORMAT),
                r.payer_name,
                r.document_number,
                r.amount.as_deref().unwrap_or(""),
            );
            if !r.asset_link.is_empty() {
                text.push_str(&format!("\n🔗 {}", r.asset_link));
            }
            text
        }
        Outcome::ExpenseRecorded(r) => {
            let mut text = format!(
                "✅ Gasto registrado\n📅 {}\n🏷️ {}\n💬 {}\n💰 {}{}",
                r.timestamp.format(TIMESTAMP_FORMAT),
                r.category,
                r.description,
                r.amount.as_deref().unwrap_or(""),
                r.currency.as_deref().unwrap_or(""),
            );
            if !r.asset_link.is_empty() {
                text.push_str(&format!("\n🔗 {}", r.asset_link));
            }
            text
        }
        Outcome::LedgerUnavailable => {
            "⚠️ No se pudo registrar el movimiento. Intenta de nuevo.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use libreta_core::{ExpenseRecord, RentalReceiptRecord};

    #[test]
    fn expense_reply_surfaces_every_stored_field() {
        let r = ExpenseRecord {
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
            sender: "+1".into(),
            category: "Supermercado".into(),
            description: "Supermercado".into(),
            amount: Some("25".into()),
            currency: Some("€".into()),
            asset_link: "https://drive.google.com/uc?id=x".into(),
        };
        let text = render(&Outcome::ExpenseRecorded(r));
        assert!(text.contains("2024-05-02 10:00:00"));
        assert!(text.contains("Supermercado"));
        assert!(text.contains("25€"));
        assert!(text.contains("https://drive.google.com/uc?id=x"));
    }

    #[test]
    fn null_amount_renders_as_blank_not_placeholder() {
        let r = ExpenseRecord {
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
            sender: "+1".into(),
            category: "Gastos varios".into(),
            description: String::new(),
            amount: None,
            currency: None,
            asset_link: String::new(),
        };
        let text = render(&Outcome::ExpenseRecorded(r));
        assert!(text.contains("💰 \n") || text.ends_with("💰 "));
        assert!(!text.contains("🔗"));
    }

    #[test]
    fn rental_reply_lists_the_receipt_fields() {
        let r = RentalReceiptRecord {
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
            payer_name: "Luis Andrade".into(),
            document_number: "123456".into(),
            amount: Some("45.00".into()),
            asset_link: String::new(),
        };
        let text = render(&Outcome::RentalRecorded(r));
        assert!(text.contains("Luis Andrade"));
        assert!(text.contains("123456"));
        assert!(text.contains("45.00"));
    }

    #[test]
    fn mode_change_names_the_new_mode() {
        assert!(render(&Outcome::ModeChanged(SessionMode::Partnership)).contains("COMPARTIDO"));
        assert!(render(&Outcome::ModeChanged(SessionMode::RentalIncome)).contains("ARRIENDOS"));
    }
}
