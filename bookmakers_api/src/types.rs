//! Entry types served by `bookmakers.json`.

use serde::{Deserialize, Serialize};

/// One bookmaker's record.
///
/// Entries carry no identity key; their position in the array is the only
/// ordering signal consumed downstream.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Bookmaker {
    /// Image reference for the bookmaker's logo.
    pub logo: String,

    /// Whether the verification badge is shown.
    pub verified: bool,

    /// Editorial score, expected range [0, 5]. Drives both the displayed
    /// numeric score and the star glyph count.
    pub rating: f64,

    /// Number of user reviews.
    pub reviews_count: u64,

    /// Signup bonus as served: a plain number or a display string like
    /// `"100$"`. Absent or `null` in many entries.
    #[serde(default)]
    pub bonus: Option<Bonus>,

    /// Reliability sub-score, consulted only by the reliability sub-sort.
    #[serde(default)]
    pub reliability: Option<f64>,

    /// Badge category, used as the badge CSS class modifier.
    #[serde(default)]
    pub badge: Option<String>,

    /// Human-readable badge label. Well-formed data pairs it with
    /// `badge`, but the pairing is not enforced.
    #[serde(default)]
    pub badge_name: Option<String>,

    /// Destination of the review action link.
    pub internal_link: String,

    /// Destination of the site action link.
    pub external_link: String,
}

/// Bonus value in either of the forms the data source uses.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum Bonus {
    Number(f64),
    Text(String),
}

impl Bonus {
    /// Numeric value used by the bonus sort. String bonuses contribute
    /// their longest leading numeric prefix; anything non-numeric counts
    /// as zero. This coercion affects sort output directly and must not
    /// become a failure.
    pub fn amount(&self) -> f64 {
        match self {
            Bonus::Number(n) => *n,
            Bonus::Text(s) => parse_leading_number(s).unwrap_or(0.0),
        }
    }

    /// Whether the bonus block is rendered at all. An empty string and
    /// the number zero hide the block; any non-empty string (including
    /// `"0"`) shows it.
    pub fn is_displayable(&self) -> bool {
        match self {
            Bonus::Number(n) => *n != 0.0,
            Bonus::Text(s) => !s.is_empty(),
        }
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bonus::Number(n) => write!(f, "{}", n),
            Bonus::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Longest leading numeric prefix of `s` after leading whitespace:
/// optional sign, digits with an optional fraction, optional exponent.
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    // The exponent is only part of the number if it has digits of its own.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus_text(s: &str) -> Bonus {
        Bonus::Text(s.to_string())
    }

    #[test]
    fn amount_of_plain_number() {
        assert_eq!(Bonus::Number(50.0).amount(), 50.0);
    }

    #[test]
    fn amount_of_string_with_trailing_text() {
        assert_eq!(bonus_text("100$ bonus").amount(), 100.0);
        assert_eq!(bonus_text("12.5%").amount(), 12.5);
    }

    #[test]
    fn amount_of_non_numeric_string_is_zero() {
        assert_eq!(bonus_text("free spin").amount(), 0.0);
        assert_eq!(bonus_text("").amount(), 0.0);
        assert_eq!(bonus_text("$100").amount(), 0.0);
    }

    #[test]
    fn amount_handles_sign_fraction_and_exponent() {
        assert_eq!(bonus_text("-3.5").amount(), -3.5);
        assert_eq!(bonus_text(".5x").amount(), 0.5);
        assert_eq!(bonus_text("1e2 credits").amount(), 100.0);
        // A bare trailing "e" is not an exponent.
        assert_eq!(bonus_text("10e").amount(), 10.0);
    }

    #[test]
    fn displayable_follows_the_source_gating() {
        assert!(Bonus::Number(50.0).is_displayable());
        assert!(!Bonus::Number(0.0).is_displayable());
        assert!(bonus_text("0").is_displayable());
        assert!(bonus_text("free spin").is_displayable());
        assert!(!bonus_text("").is_displayable());
    }

    #[test]
    fn entry_deserializes_with_optional_fields_missing() {
        let entry: Bookmaker = serde_json::from_str(
            r#"{
                "logo": "img/logos/stavka.svg",
                "verified": false,
                "rating": 3.2,
                "reviews_count": 861,
                "internal_link": "/reviews/stavka",
                "external_link": "https://stavka.example.com"
            }"#,
        )
        .unwrap();
        assert!(entry.bonus.is_none());
        assert!(entry.reliability.is_none());
        assert!(entry.badge.is_none());
        assert!(entry.badge_name.is_none());
    }

    #[test]
    fn bonus_deserializes_from_number_and_string() {
        let entry: Bookmaker = serde_json::from_str(
            r#"{
                "logo": "l", "verified": true, "rating": 4.0,
                "reviews_count": 1, "bonus": 50,
                "internal_link": "i", "external_link": "e"
            }"#,
        )
        .unwrap();
        assert!(matches!(entry.bonus, Some(Bonus::Number(n)) if n == 50.0));

        let entry: Bookmaker = serde_json::from_str(
            r#"{
                "logo": "l", "verified": true, "rating": 4.0,
                "reviews_count": 1, "bonus": "100$",
                "internal_link": "i", "external_link": "e"
            }"#,
        )
        .unwrap();
        assert!(matches!(entry.bonus, Some(Bonus::Text(ref s)) if s == "100$"));
    }

    #[test]
    fn null_bonus_deserializes_as_none() {
        let entry: Bookmaker = serde_json::from_str(
            r#"{
                "logo": "l", "verified": true, "rating": 4.0,
                "reviews_count": 1, "bonus": null,
                "internal_link": "i", "external_link": "e"
            }"#,
        )
        .unwrap();
        assert!(entry.bonus.is_none());
    }
}
