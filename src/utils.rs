//! String normalization shared by the ranker.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: NFD-decompose, drop combining marks,
/// lowercase, trim surrounding whitespace.
///
/// This makes accented and plain spellings find each other:
/// - "Keskuskeittiö" → "keskuskeittio"
/// - "Café Linné" → "cafe linne"
///
/// Interior whitespace is left alone; word-level scoring splits on it later.
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Keskustori "), "keskustori");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Keskuskeittiö"), "keskuskeittio");
        assert_eq!(normalize("Hämeenlinna"), "hameenlinna");
        assert_eq!(normalize("naïve café"), "naive cafe");
    }

    #[test]
    fn empty_and_whitespace_collapse_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn interior_whitespace_preserved() {
        assert_eq!(normalize("Iso  Keittiö"), "iso  keittio");
    }
}
