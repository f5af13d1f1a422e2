use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// Loose grammar used to mine addresses out of arbitrary text.
static BULK_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("bulk address pattern must compile")
});

// Strict grammar: the whole candidate must be one standalone address.
static SINGLE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("single address pattern must compile")
});

/// A validated recipient address, always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipientEmail(String);

impl RecipientEmail {
    /// Parses a manually typed address. Surrounding whitespace and byte order
    /// marks are trimmed, anything else that is not a complete standalone address is rejected.
    pub fn parse(s: String) -> Result<RecipientEmail, String> {
        validate_single(&normalize(trim_entry(&s)))
            .ok_or_else(|| format!("{} is not a valid recipient email.", s))
    }

    /// Wraps a substring produced by [`extract_addresses`].
    pub(crate) fn from_match(raw: &str) -> Self {
        Self(normalize(raw))
    }
}

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// U+FEFF is not Unicode White_Space but pasted text often carries it.
fn trim_entry(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Scans `raw_text` left to right and yields every non-overlapping address
/// match, untouched and in order of appearance. Duplicates are kept.
pub fn extract_addresses(raw_text: &str) -> impl Iterator<Item = &str> {
    BULK_ADDRESS.find_iter(raw_text).map(|m| m.as_str())
}

/// Canonical form used for storage and duplicate detection.
pub fn normalize(address: &str) -> String {
    address.to_lowercase()
}

/// Accepts `candidate` only if the whole string is a single address:
/// exactly one `@`, no whitespace or byte order mark anywhere, and a
/// dotted domain.
/// No trimming happens here.
pub fn validate_single(candidate: &str) -> Option<RecipientEmail> {
    SINGLE_ADDRESS
        .is_match(candidate)
        .then(|| RecipientEmail(normalize(candidate)))
}
