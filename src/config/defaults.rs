//! Default values and presets for rowdiff.

use super::types::{AppConfig, BehaviorConfig, MatchingConfig};

// ============================================================================
// Default Values
// ============================================================================

/// Row terminator for CSV and TSV output.
pub const DEFAULT_LINE_TERMINATOR: &str = "\r\n";

/// Placeholder for an index that does not apply.
pub const DEFAULT_NA_VALUE: &str = "-";

/// Threshold used by the strict preset.
pub const STRICT_THRESHOLD: f64 = 0.8;

/// Threshold used by the loose preset.
pub const LOOSE_THRESHOLD: f64 = 0.4;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings
    Default,
    /// Pair only rows that are nearly identical
    Strict,
    /// Pair rows that share less than half their content
    Loose,
    /// Never pair; every change is a delete plus an insert
    Exact,
    /// Report equal rows as well
    Full,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Loose => "loose",
            Self::Exact => "exact",
            Self::Full => "full",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "loose" | "permissive" => Some(Self::Loose),
            "exact" | "no-replace" => Some(Self::Exact),
            "full" | "all" => Some(Self::Full),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Replace pairing at similarity 0.6, changed rows only",
            Self::Strict => "Replace pairing only for nearly identical rows",
            Self::Loose => "Replace pairing for loosely similar rows",
            Self::Exact => "No replace pairing; changes are deletes and inserts",
            Self::Full => "Default pairing with equal rows included",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Strict,
            Self::Loose,
            Self::Exact,
            Self::Full,
        ]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::with_threshold(STRICT_THRESHOLD),
            ConfigPreset::Loose => Self::with_threshold(LOOSE_THRESHOLD),
            ConfigPreset::Exact => Self::with_threshold(0.0),
            ConfigPreset::Full => Self {
                behavior: BehaviorConfig {
                    show_equal: true,
                    ..BehaviorConfig::default()
                },
                ..Self::default()
            },
        }
    }

    fn with_threshold(threshold: f64) -> Self {
        Self {
            matching: MatchingConfig {
                threshold,
                ..MatchingConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("PERMISSIVE"), Some(ConfigPreset::Loose));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_preset_settings() {
        assert!(!AppConfig::from_preset(ConfigPreset::Exact).diff_options().fuzzy_enabled());
        assert!(AppConfig::from_preset(ConfigPreset::Strict).diff_options().fuzzy_enabled());
        assert!(AppConfig::from_preset(ConfigPreset::Full).behavior.show_equal);
    }
}
