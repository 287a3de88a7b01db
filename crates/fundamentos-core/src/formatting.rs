//! Text transforms applied to validated input before it is displayed.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercases the trimmed text and uppercases its first character.
///
/// Blank input yields an empty string. Accents are preserved, only case changes.
/// A first character whose uppercase form is several characters (`ß`) is kept as is.
pub fn capitalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            let head = match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => first,
            };
            std::iter::once(head).chain(chars).collect()
        }
        None => String::new(),
    }
}

/// Number of characters left once every whitespace run is removed.
pub fn count_non_whitespace(text: &str) -> usize {
    WHITESPACE_RUNS.replace_all(text, "").chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_keeps_accents() {
        assert_eq!(capitalize("joão"), "João");
        assert_eq!(capitalize("élida"), "Élida");
    }

    #[test]
    fn test_capitalize_trims_and_folds_case() {
        assert_eq!(capitalize("  MARIA  "), "Maria");
        assert_eq!(capitalize("jOSÉ sILVA"), "José silva");
    }

    #[test]
    fn test_capitalize_keeps_first_char_without_single_uppercase() {
        assert_eq!(capitalize("ßara"), "ßara");
        assert_eq!(capitalize("ÿves"), "Ÿves");
    }

    #[test]
    fn test_capitalize_blank_is_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "");
    }

    #[test]
    fn test_count_ignores_all_whitespace() {
        assert_eq!(count_non_whitespace("a b  c"), 3);
        assert_eq!(count_non_whitespace("\tolá\n mundo "), 8);
        assert_eq!(count_non_whitespace("   "), 0);
    }
}
