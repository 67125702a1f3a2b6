//! # Support Configuration
//!
//! How the beam is held at its ends. Only two configurations are analysed:
//!
//! ```text
//!   Simply supported              Cantilever
//!
//!   ────────────────              █───────────────
//!   △              ○              █
//!   pin         roller          fixed           free
//! ```
//!
//! For a simply-supported beam the end tags (pin/roller/fixed) are carried
//! for display only: the reaction math treats both ends as hinges or rollers
//! whatever the tag says.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Support tag shown at a beam end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportType {
    /// Pinned: restrains translation, free to rotate
    Pin,
    /// Roller: restrains vertical translation only
    Roller,
    /// Fixed: restrains translation and rotation
    Fixed,
}

impl SupportType {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Pin => "Pin",
            SupportType::Roller => "Roller",
            SupportType::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Beam support configuration.
///
/// # Example
/// ```
/// use beam_core::supports::{SupportConfiguration, SupportType};
///
/// let beam = SupportConfiguration::simply_supported(SupportType::Pin, SupportType::Roller);
/// assert_eq!(beam.left_support(), SupportType::Pin);
/// assert_eq!(beam.right_support(), Some(SupportType::Roller));
///
/// let cantilever = SupportConfiguration::Cantilever;
/// assert_eq!(cantilever.left_support(), SupportType::Fixed);
/// assert_eq!(cantilever.right_support(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SupportConfiguration {
    /// Supported at both ends, no moment restraint in the analysis
    SimplySupported { left: SupportType, right: SupportType },
    /// Fixed at the left end, free at the right
    Cantilever,
}

impl Default for SupportConfiguration {
    fn default() -> Self {
        SupportConfiguration::SimplySupported {
            left: SupportType::Pin,
            right: SupportType::Roller,
        }
    }
}

impl SupportConfiguration {
    /// Create a simply-supported configuration with the given end tags
    pub fn simply_supported(left: SupportType, right: SupportType) -> Self {
        SupportConfiguration::SimplySupported { left, right }
    }

    /// Tag drawn at the left end
    pub fn left_support(&self) -> SupportType {
        match self {
            SupportConfiguration::SimplySupported { left, .. } => *left,
            SupportConfiguration::Cantilever => SupportType::Fixed,
        }
    }

    /// Tag drawn at the right end (a cantilever has none)
    pub fn right_support(&self) -> Option<SupportType> {
        match self {
            SupportConfiguration::SimplySupported { right, .. } => Some(*right),
            SupportConfiguration::Cantilever => None,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportConfiguration::SimplySupported { .. } => "Simply Supported",
            SupportConfiguration::Cantilever => "Cantilever",
        }
    }
}

impl fmt::Display for SupportConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportConfiguration::SimplySupported { left, right } => {
                write!(f, "Simply Supported ({} / {})", left, right)
            }
            SupportConfiguration::Cantilever => f.write_str("Cantilever (fixed / free)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pin_roller() {
        let config = SupportConfiguration::default();
        assert_eq!(config.left_support(), SupportType::Pin);
        assert_eq!(config.right_support(), Some(SupportType::Roller));
    }

    #[test]
    fn test_display() {
        let config = SupportConfiguration::simply_supported(SupportType::Fixed, SupportType::Pin);
        assert_eq!(config.to_string(), "Simply Supported (Fixed / Pin)");
        assert_eq!(SupportConfiguration::Cantilever.to_string(), "Cantilever (fixed / free)");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SupportConfiguration::Cantilever).unwrap();
        assert_eq!(json, r#"{"type":"cantilever"}"#);

        let parsed: SupportConfiguration =
            serde_json::from_str(r#"{"type":"simply_supported","left":"pin","right":"roller"}"#).unwrap();
        assert_eq!(parsed, SupportConfiguration::default());
    }
}
