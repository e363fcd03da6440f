//! Field extraction from bank deposit-slip OCR text: payer name, document
//! (reference) number, and amount.

use std::sync::OnceLock;

use regex::Regex;

/// Payer name when the text holds no letter run at all.
pub const UNKNOWN_PAYER: &str = "Unknown";
/// Document number when neither a labeled number nor a digit run is found.
pub const UNDETECTED_DOCUMENT: &str = "NOT_DETECTED";

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Runs of letters (Ñ included) and spaces, matched against the uppercased
// text; bank slips print the payer in caps and OCR casing is unreliable.
re!(re_payer, r"[A-ZÑ ]{4,}");
re!(re_doc_label, r"(?i)(?:COMPROBANTE|TRANSACCIÓN|DOC|REFERENCIA)[^0-9]*([0-9]+)");
re!(re_digit_run, r"[0-9]{6,}");
// Receipt amounts always carry a two-digit decimal part; a bare integer on a
// slip is a reference number, never the amount.
re!(re_decimal_amount, r"[0-9]+[.,][0-9]{2}");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFields {
    pub payer_name: String,
    pub document_number: String,
    pub amount: Option<String>,
}

/// Extract the three receipt fields. Fields that cannot be detected come back
/// as their documented placeholders, never as an error.
pub fn extract_receipt(text: &str) -> ReceiptFields {
    ReceiptFields {
        payer_name: extract_payer(text),
        document_number: extract_document(text),
        amount: extract_amount(text),
    }
}

fn extract_payer(text: &str) -> String {
    let upper = text.to_uppercase();
    re_payer()
        .find_iter(&upper)
        .map(|m| m.as_str().trim())
        // The run between two digit groups can be all spaces; skip those.
        .find(|s| !s.is_empty())
        .map(title_case)
        .unwrap_or_else(|| UNKNOWN_PAYER.to_string())
}

fn extract_amount(text: &str) -> Option<String> {
    re_decimal_amount()
        .find(text)
        .map(|m| m.as_str().replace(',', "."))
}

fn extract_document(text: &str) -> String {
    if let Some(c) = re_doc_label().captures(text) {
        return c[1].to_string();
    }
    // Slips without a label: the first long digit run, ignoring whitespace the
    // OCR may have inserted mid-number.
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    re_digit_run()
        .find(&compact)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNDETECTED_DOCUMENT.to_string())
}

fn title_case(run: &str) -> String {
    run.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_fields_from_a_labeled_slip() {
        let text = "BANCO DEL SUR\nDeposito recibido de\nMARIA FERNANDA TORRES\nCOMPROBANTE No. 123456\n$45.00";
        let r = extract_receipt(text);
        assert_eq!(r.payer_name, "Banco Del Sur");
        assert_eq!(r.document_number, "123456");
        assert_eq!(r.amount.as_deref(), Some("45.00"));
    }

    #[test]
    fn payer_run_stops_at_the_line_break() {
        let r = extract_receipt("juan perez\nCOMPROBANTE 99887766");
        assert_eq!(r.payer_name, "Juan Perez");
    }

    #[test]
    fn lowercase_slip_still_yields_a_payer() {
        let r = extract_receipt("deposito de rosa maria");
        assert_eq!(r.payer_name, "Deposito De Rosa Maria");
    }

    #[test]
    fn whitespace_only_run_is_skipped_for_the_payer() {
        // Four spaces between the digit groups match before the name does.
        let r = extract_receipt("12    34 maria perez");
        assert_eq!(r.payer_name, "Maria Perez");
    }

    #[test]
    fn missing_payer_falls_back_to_unknown() {
        let r = extract_receipt("#123 45.00");
        assert_eq!(r.payer_name, UNKNOWN_PAYER);
    }

    #[test]
    fn bare_integers_are_never_the_amount() {
        let r = extract_receipt("COMPROBANTE 123456\nvalor 45,00");
        assert_eq!(r.document_number, "123456");
        assert_eq!(r.amount.as_deref(), Some("45.00"));

        let r = extract_receipt("COMPROBANTE 123456");
        assert_eq!(r.amount, None);
    }

    #[test]
    fn document_label_variants_are_case_insensitive() {
        assert_eq!(extract_receipt("referencia: 9087").document_number, "9087");
        assert_eq!(extract_receipt("DOC # 555123").document_number, "555123");
        assert_eq!(extract_receipt("Transacción nro 42").document_number, "42");
    }

    #[test]
    fn unlabeled_digit_run_survives_ocr_spacing() {
        // OCR split the number across spaces; six-plus digits after compaction.
        let r = extract_receipt("TRANSFERENCIA\n987 654 321\n$10.00");
        assert_eq!(r.document_number, "987654321");
    }

    #[test]
    fn short_digit_runs_are_not_document_numbers() {
        let r = extract_receipt("ABONO 123 45");
        assert_eq!(r.document_number, UNDETECTED_DOCUMENT);
    }

    #[test]
    fn empty_text_yields_all_placeholders() {
        let r = extract_receipt("");
        assert_eq!(r.payer_name, UNKNOWN_PAYER);
        assert_eq!(r.document_number, UNDETECTED_DOCUMENT);
        assert_eq!(r.amount, None);
    }
}
