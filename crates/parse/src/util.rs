/// Levenshtein edit distance, two-row O(min(m,n)) space.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a = s1.as_bytes();
    let b = s2.as_bytes();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let (a, b, m, n) = if m <= n { (a, b, m, n) } else { (b, a, n, m) };

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Normalized similarity in 0.0–1.0: 1 − distance / max-length.
pub fn similarity(s1: &str, s2: &str) -> f32 {
    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein_distance(s1, s2) as f32 / max_len as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("taxi", "taxi"), 0);
        assert_eq!(levenshtein_distance("", "taxi"), 4);
        assert_eq!(levenshtein_distance("farmacia", "farmasia"), 1);
        assert_eq!(levenshtein_distance("cena", "cenar"), 1);
    }

    #[test]
    fn distance_is_commutative() {
        assert_eq!(
            levenshtein_distance("mercado", "mrcado"),
            levenshtein_distance("mrcado", "mercado")
        );
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("supermercado", "supermercado"), 1.0);
        assert!(similarity("supermercado", "xyz") < 0.3);
    }

    #[test]
    fn one_edit_on_a_long_word_stays_above_threshold() {
        // "supermercados" vs "supermercado" → 1/13 ≈ 0.92
        assert!(similarity("supermercados", "supermercado") >= 0.8);
    }
}
