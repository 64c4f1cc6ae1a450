//! Accordion configuration.
//!
//! The configuration fixes the expansion policy and the presentation tokens
//! (glyph pair, active style class) at construction time. Shells that keep
//! their UI settings on disk can round-trip the configuration through TOML.
//!
//! # Example
//!
//! ```
//! use concertina::config::{AccordionConfig, ExpandMode};
//!
//! let config = AccordionConfig::default().with_mode(ExpandMode::Independent);
//! assert_eq!(config.expand_glyph, '+');
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyph shown on a closed item's trigger.
pub const DEFAULT_EXPAND_GLYPH: char = '+';

/// Glyph shown on an open item's trigger (U+2212 minus sign).
pub const DEFAULT_COLLAPSE_GLYPH: char = '−';

/// Style class applied to an open item's trigger.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Errors from loading or saving an accordion configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML input could not be parsed into a configuration.
    #[error("failed to parse accordion config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized to TOML.
    #[error("failed to serialize accordion config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How many items may be open at once.
///
/// The two policies are mutually exclusive and chosen once at construction;
/// the accordion never mixes their behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandMode {
    /// At most one item is open at a time. Activating a closed item closes
    /// the currently open one; activating the open item collapses it.
    #[default]
    Exclusive,

    /// Each item toggles independently of the others.
    Independent,
}

/// Configuration for an [`Accordion`](crate::Accordion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionConfig {
    /// The expansion policy.
    pub mode: ExpandMode,

    /// Glyph shown while an item is closed.
    pub expand_glyph: char,

    /// Glyph shown while an item is open.
    pub collapse_glyph: char,

    /// Style class the shell applies to an open item's trigger.
    pub active_class: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            mode: ExpandMode::default(),
            expand_glyph: DEFAULT_EXPAND_GLYPH,
            collapse_glyph: DEFAULT_COLLAPSE_GLYPH,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl AccordionConfig {
    /// Set the expansion policy using builder pattern.
    pub fn with_mode(mut self, mode: ExpandMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the glyph pair using builder pattern.
    pub fn with_glyphs(mut self, expand: char, collapse: char) -> Self {
        self.expand_glyph = expand;
        self.collapse_glyph = collapse;
        self
    }

    /// Set the active style class using builder pattern.
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Parse a configuration from a TOML string.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AccordionConfig::default();
        assert_eq!(config.mode, ExpandMode::Exclusive);
        assert_eq!(config.expand_glyph, '+');
        assert_eq!(config.collapse_glyph, '−');
        assert_eq!(config.active_class, "active");
    }

    #[test]
    fn test_builder() {
        let config = AccordionConfig::default()
            .with_mode(ExpandMode::Independent)
            .with_glyphs('▸', '▾')
            .with_active_class("open");

        assert_eq!(config.mode, ExpandMode::Independent);
        assert_eq!(config.expand_glyph, '▸');
        assert_eq!(config.collapse_glyph, '▾');
        assert_eq!(config.active_class, "open");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AccordionConfig::from_toml_str("mode = \"independent\"").unwrap();
        assert_eq!(config.mode, ExpandMode::Independent);
        // Unspecified fields keep their defaults
        assert_eq!(config.expand_glyph, '+');
        assert_eq!(config.active_class, "active");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AccordionConfig::default()
            .with_mode(ExpandMode::Independent)
            .with_active_class("expanded");

        let toml = config.to_toml_string().unwrap();
        let parsed = AccordionConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_error() {
        let err = AccordionConfig::from_toml_str("mode = \"both\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
