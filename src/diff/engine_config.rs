//! Configuration types for the diff engine.

use crate::matching::DEFAULT_CACHE_CAPACITY;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default similarity threshold for replace pairing.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Markers used to render replace values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReplaceFormat {
    /// Text placed between the old and new value
    pub separator: String,
    /// Stands in for a value that was removed
    pub deleted: String,
    /// Stands in for a value that was added
    pub added: String,
}

impl Default for ReplaceFormat {
    fn default() -> Self {
        Self {
            separator: " ---> ".to_string(),
            deleted: "DEL".to_string(),
            added: "ADD".to_string(),
        }
    }
}

impl ReplaceFormat {
    /// Default markers with a custom separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }
}

/// Options controlling a single diff.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOptions {
    /// Suppress `equal` records (they are still counted)
    pub skip_equal: bool,
    /// Order records by index
    pub sort: bool,
    /// Descending order when sorting
    pub reverse: bool,
    /// Minimum similarity for pairing a delete with an insert.
    /// Values outside the open interval (0, 1) disable pairing.
    pub similarity_threshold: f64,
    /// Index of the first row on each side
    pub start_index: usize,
    /// Synthesize a header row
    pub header: bool,
    /// Replace value markers
    pub replace_format: ReplaceFormat,
    /// Capacity of the engine's similarity cache
    pub cache_capacity: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            skip_equal: true,
            sort: true,
            reverse: false,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            start_index: 1,
            header: false,
            replace_format: ReplaceFormat::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl DiffOptions {
    /// Whether fuzzy replace pairing runs at all.
    #[must_use]
    pub fn fuzzy_enabled(&self) -> bool {
        self.similarity_threshold > 0.0 && self.similarity_threshold < 1.0
    }

    #[must_use]
    pub const fn skip_equal(mut self, skip: bool) -> Self {
        self.skip_equal = skip;
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn start_index(mut self, start: usize) -> Self {
        self.start_index = start;
        self
    }

    #[must_use]
    pub const fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn replace_format(mut self, format: ReplaceFormat) -> Self {
        self.replace_format = format;
        self
    }

    #[must_use]
    pub const fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DiffOptions::default();
        assert!(opts.skip_equal);
        assert!(opts.sort);
        assert!(!opts.reverse);
        assert_eq!(opts.start_index, 1);
        assert!(opts.fuzzy_enabled());
        assert_eq!(opts.replace_format.separator, " ---> ");
    }

    #[test]
    fn test_fuzzy_mode_switch() {
        assert!(!DiffOptions::default().similarity_threshold(0.0).fuzzy_enabled());
        assert!(!DiffOptions::default().similarity_threshold(1.0).fuzzy_enabled());
        assert!(!DiffOptions::default().similarity_threshold(-0.5).fuzzy_enabled());
        assert!(!DiffOptions::default().similarity_threshold(f64::NAN).fuzzy_enabled());
        assert!(DiffOptions::default().similarity_threshold(0.99).fuzzy_enabled());
    }
}
