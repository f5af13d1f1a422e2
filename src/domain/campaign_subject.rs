use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

const MAX_SUBJECT_GRAPHEMES: usize = 256;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CampaignSubject(String);

impl CampaignSubject {
    /// Returns an instance of `CampaignSubject` if the input is a usable
    /// subject line: non-blank, at most 256 graphemes, no control characters.
    pub fn parse(s: String) -> Result<CampaignSubject, String> {
        let trimmed = s.trim();

        let is_empty_or_whitespace = trimmed.is_empty();
        let is_too_long = trimmed.graphemes(true).count() > MAX_SUBJECT_GRAPHEMES;
        let contains_control_characters = trimmed.chars().any(char::is_control);

        if is_empty_or_whitespace || is_too_long || contains_control_characters {
            Err(format!("{} is not a valid campaign subject.", s))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for CampaignSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
