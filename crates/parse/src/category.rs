//! Fuzzy spending-category classification.
//!
//! One strategy, applied consistently: the text is tokenized on word
//! boundaries and a category matches when any token is close enough
//! (similarity ≥ 0.8) to one of its trigger keywords. The table is scanned in
//! a fixed order and the first matching category wins; there is no scoring
//! across categories.

use crate::util::similarity;

/// Label used when no keyword comes close.
pub const DEFAULT_CATEGORY: &str = "Gastos varios";

const FUZZY_THRESHOLD: f32 = 0.8;

/// Category table in tie-break order. Keywords carry both accented and plain
/// spellings where people actually type both.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("Supermercado", &["supermercado", "super", "mercado", "despensa", "compras"]),
    ("Restaurante", &["restaurante", "almuerzo", "cena", "desayuno", "comida", "cafeteria", "cafetería"]),
    ("Transporte", &["transporte", "taxi", "uber", "bus", "gasolina", "peaje", "pasaje"]),
    ("Salud", &["salud", "farmacia", "medico", "médico", "doctor", "consulta", "medicina"]),
    ("Servicios", &["servicios", "luz", "agua", "internet", "telefono", "teléfono", "plan"]),
    ("Hogar", &["hogar", "casa", "arreglo", "muebles", "limpieza", "ferreteria", "ferretería"]),
    ("Ocio", &["ocio", "cine", "juego", "netflix", "spotify", "concierto"]),
    ("Ropa", &["ropa", "zapatos", "camisa", "pantalon", "pantalón"]),
];

/// Total: every input yields exactly one label from the closed set.
pub fn classify(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    for (label, keywords) in CATEGORIES {
        for keyword in *keywords {
            if tokens.iter().any(|t| similarity(t, keyword) >= FUZZY_THRESHOLD) {
                return label;
            }
        }
    }
    DEFAULT_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keyword_matches() {
        assert_eq!(classify("Supermercado 25€"), "Supermercado");
        assert_eq!(classify("taxi al aeropuerto 7"), "Transporte");
        assert_eq!(classify("farmacia 12,30€"), "Salud");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ALMUERZO con el equipo"), "Restaurante");
    }

    #[test]
    fn close_misspelling_still_matches() {
        // One edit away from "supermercado".
        assert_eq!(classify("supermercadp 30"), "Supermercado");
        assert_eq!(classify("gasolna 45"), "Transporte");
    }

    #[test]
    fn plural_form_matches() {
        assert_eq!(classify("supermercados 18€"), "Supermercado");
    }

    #[test]
    fn unknown_text_falls_back_to_default() {
        assert_eq!(classify("regalo para mamá 20"), DEFAULT_CATEGORY);
        assert_eq!(classify(""), DEFAULT_CATEGORY);
        assert_eq!(classify("25"), DEFAULT_CATEGORY);
    }

    #[test]
    fn first_category_in_table_order_wins_ties() {
        // Both Supermercado ("compras") and Ropa ("ropa") trigger; the table
        // order decides.
        assert_eq!(classify("compras de ropa"), "Supermercado");
    }

    #[test]
    fn distant_words_do_not_match() {
        assert_eq!(classify("sopa 3€"), DEFAULT_CATEGORY);
    }
}
