//! Input predicates shared by the menu handlers
//!
//! Every function here is pure: it classifies a line of text and never
//! transforms it. Normalisation (trimming, capitalisation) lives in
//! `formatting`, and the retry policy lives in `console`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters accepted in a name: ASCII plus the Latin-1 accented ranges.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s]+$").expect("name pattern is valid"));

/// Plain decimal syntax: optional sign, digits, at most one separator. No exponent.
static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("decimal pattern is valid"));

const MIN_NAME_LETTERS: usize = 2;

/// Accepts names made of letters and interior spaces with at least two letters.
pub fn is_valid_name(text: &str) -> bool {
    let name = text.trim();
    if name.is_empty() {
        return false;
    }

    NAME_PATTERN.is_match(name)
        && name.chars().filter(|c| !c.is_whitespace()).count() >= MIN_NAME_LETTERS
}

/// Parses a decimal number written with either `.` or `,` as separator.
///
/// Returns `None` for anything that is not a plain decimal literal,
/// including empty input, exponents, `inf` and `NaN`, and for literals too
/// large to represent.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if !DECIMAL_PATTERN.is_match(&normalized) {
        return None;
    }

    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// True when `text` is a decimal number, rejecting negatives unless `allow_negative`.
pub fn is_numeric(text: &str, allow_negative: bool) -> bool {
    match parse_decimal(text) {
        Some(value) => allow_negative || value >= 0.0,
        None => false,
    }
}

/// Legacy Brazilian plate shape: three letters followed by four digits.
pub fn is_legacy_plate(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 7 {
        return false;
    }

    let (letters, digits) = chars.split_at(3);
    letters.iter().all(|c| c.is_alphabetic()) && digits.iter().all(|c| c.is_ascii_digit())
}
