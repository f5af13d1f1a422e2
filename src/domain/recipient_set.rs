use std::collections::HashSet;

use serde::Serialize;

use super::recipient_email::{RecipientEmail, extract_addresses};

/// Whether a draft has anyone to send to. Submission is only possible
/// when the set is `NonEmpty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientSetState {
    Empty,
    NonEmpty,
}

/// Ordered, duplicate-free list of recipients for one campaign draft.
///
/// Every operation takes the set by value and hands back the next one.
/// Rejected input (malformed address, duplicate, bad index) leaves the set
/// untouched and is never reported as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipientSet(Vec<RecipientEmail>);

impl RecipientSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn state(&self) -> RecipientSetState {
        if self.0.is_empty() {
            RecipientSetState::Empty
        } else {
            RecipientSetState::NonEmpty
        }
    }

    pub fn contains(&self, email: &RecipientEmail) -> bool {
        self.0.contains(email)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipientEmail> {
        self.0.iter()
    }

    /// Mines every address out of `raw_text` and appends the ones not yet
    /// present, in scan order. Merging the same text twice is a no-op.
    pub fn merge_bulk(mut self, raw_text: &str) -> Self {
        let mut seen: HashSet<RecipientEmail> = self.0.iter().cloned().collect();
        for email in extract_addresses(raw_text).map(RecipientEmail::from_match) {
            if seen.insert(email.clone()) {
                self.0.push(email);
            }
        }
        self
    }

    /// Appends one typed address if it is valid and not already present.
    /// Commit key and focus loss both land here, so calling it twice with
    /// the same text is harmless.
    pub fn commit_single(mut self, typed_text: &str) -> Self {
        if let Ok(email) = RecipientEmail::parse(typed_text.to_owned()) {
            if !self.contains(&email) {
                self.0.push(email);
            }
        }
        self
    }

    /// Drops the element at `position`; out of range positions are ignored.
    pub fn remove_at(mut self, position: usize) -> Self {
        if position < self.0.len() {
            self.0.remove(position);
        }
        self
    }

    pub fn clear(self) -> Self {
        Self::default()
    }
}
