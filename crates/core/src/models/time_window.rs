use serde::{Deserialize, Serialize};

/// An open booking window on a facility.
///
/// `start` and `end` are opaque tokens: they are never parsed, and two windows
/// are the same window only when both strings are byte-for-byte equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn matches(&self, start: &str, end: &str) -> bool {
        self.start == start && self.end == end
    }
}
