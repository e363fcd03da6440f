//! Description cleanup: what remains of the message once amounts, dates,
//! clock-times and channel noise are stripped.

use std::sync::OnceLock;

use regex::Regex;

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_clock_time, r"\b[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?\b");
re!(re_date, r"\b[0-9]{1,4}[/-][0-9]{1,2}(?:[/-][0-9]{1,4})?\b");
// Any number with an optional currency unit on either side. Must run after
// the time/date passes so "14:30" is not half-eaten as a bare number.
re!(re_money, r"(?i)(?:€|\$|\b(?:usd|eur))?\s*[0-9]+(?:[.,][0-9]{1,2})?\s*(?:€|\$|(?:usd|eur)\b)?");
// WhatsApp edit/forward markers, with any decoration around them.
re!(re_noise, r"(?i)[<*_]*\b(?:editado|reenviado)\b[>*_]*");

/// Strip monetary tokens, dates, times and noise words; collapse whitespace;
/// trim; capitalize the first character. Idempotent.
pub fn clean_description(text: &str) -> String {
    let s = re_clock_time().replace_all(text, " ");
    let s = re_date().replace_all(&s, " ");
    let s = re_money().replace_all(&s, " ");
    let s = re_noise().replace_all(&s, " ");
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize(&collapsed)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_amount_and_currency() {
        assert_eq!(clean_description("Supermercado 25€"), "Supermercado");
        assert_eq!(clean_description("taxi $7.50 al centro"), "Taxi al centro");
        assert_eq!(clean_description("usd 12,50 almuerzo"), "Almuerzo");
    }

    #[test]
    fn strips_clock_times_and_dates() {
        assert_eq!(clean_description("cena 14:30 con amigos"), "Cena con amigos");
        assert_eq!(clean_description("luz 02/05/2024 pagada"), "Luz pagada");
    }

    #[test]
    fn strips_noise_words() {
        assert_eq!(clean_description("farmacia <editado>"), "Farmacia");
        assert_eq!(clean_description("taxi aeropuerto reenviado"), "Taxi aeropuerto");
    }

    #[test]
    fn collapses_internal_whitespace_and_trims() {
        assert_eq!(clean_description("  pan   y   leche  "), "Pan y leche");
    }

    #[test]
    fn capitalizes_first_character() {
        assert_eq!(clean_description("almuerzo"), "Almuerzo");
    }

    #[test]
    fn empty_and_numeric_only_input_become_empty() {
        assert_eq!(clean_description(""), "");
        assert_eq!(clean_description("25"), "");
        assert_eq!(clean_description("€12,50"), "");
    }

    #[test]
    fn idempotent() {
        for text in [
            "Supermercado 25€",
            "cena 14:30 con amigos <editado>",
            "  pan   y  leche 3,50€ ",
            "",
        ] {
            let once = clean_description(text);
            assert_eq!(clean_description(&once), once);
        }
    }
}
