//! History configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Depth used when the caller supplies no configuration.
pub const DEFAULT_MAX_DEPTH: usize = 10;

fn default_max_depth() -> Option<usize> {
    Some(DEFAULT_MAX_DEPTH)
}

/// Errors that can occur while loading options from host configuration.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The configuration text was not valid options JSON
    #[error("Failed to parse history options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for a history.
///
/// `max_depth` bounds both the undo and the redo stack. When a push would
/// exceed it, the oldest entry is evicted. `None` means unbounded. Values are
/// accepted as given: a depth of 0 keeps both stacks permanently empty.
///
/// Serialized with camelCase keys. A missing `maxDepth` resolves to
/// [`DEFAULT_MAX_DEPTH`]; an explicit `null` means unbounded.
///
/// # Example
///
/// ```rust
/// use lithe_undo::HistoryOptions;
///
/// assert_eq!(HistoryOptions::default().max_depth, Some(10));
/// assert_eq!(HistoryOptions::with_max_depth(3).max_depth, Some(3));
/// assert_eq!(HistoryOptions::unbounded().max_depth, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOptions {
    /// Maximum entries retained in either stack
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl HistoryOptions {
    /// Options with the given depth bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Options with no depth bound.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Parse options from a JSON document such as `{"maxDepth": 25}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lithe_undo::HistoryOptions;
    ///
    /// let options = HistoryOptions::from_json(r#"{"maxDepth": 25}"#).unwrap();
    /// assert_eq!(options.max_depth, Some(25));
    ///
    /// let defaults = HistoryOptions::from_json("{}").unwrap();
    /// assert_eq!(defaults, HistoryOptions::default());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a stack of `len` entries is over the bound.
    pub(crate) fn exceeded_by(&self, len: usize) -> bool {
        self.max_depth.is_some_and(|max| len > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_ten() {
        assert_eq!(HistoryOptions::default().max_depth, Some(10));
    }

    #[test]
    fn exceeded_by_respects_bound() {
        let options = HistoryOptions::with_max_depth(3);
        assert!(!options.exceeded_by(3));
        assert!(options.exceeded_by(4));
    }

    #[test]
    fn zero_depth_is_exceeded_by_any_entry() {
        let options = HistoryOptions::with_max_depth(0);
        assert!(!options.exceeded_by(0));
        assert!(options.exceeded_by(1));
    }

    #[test]
    fn unbounded_is_never_exceeded() {
        assert!(!HistoryOptions::unbounded().exceeded_by(usize::MAX));
    }

    #[test]
    fn missing_key_uses_default() {
        let options = HistoryOptions::from_json("{}").unwrap();
        assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn explicit_null_is_unbounded() {
        let options = HistoryOptions::from_json(r#"{"maxDepth": null}"#).unwrap();
        assert_eq!(options, HistoryOptions::unbounded());
    }

    #[test]
    fn values_are_accepted_verbatim() {
        let small = HistoryOptions::from_json(r#"{"maxDepth": 0}"#).unwrap();
        let large = HistoryOptions::from_json(r#"{"maxDepth": 5000}"#).unwrap();
        assert_eq!(small.max_depth, Some(0));
        assert_eq!(large.max_depth, Some(5000));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = HistoryOptions::from_json(r#"{"maxDepth": "ten"}"#);
        assert!(matches!(result, Err(OptionsError::Parse(_))));
    }

    #[test]
    fn options_serialize_with_camel_case() {
        let json = serde_json::to_string(&HistoryOptions::with_max_depth(4)).unwrap();
        assert_eq!(json, r#"{"maxDepth":4}"#);
    }
}
