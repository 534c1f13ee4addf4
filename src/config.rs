//! Grid configuration.
//!
//! A [`GridConfig`] is plain data; validation happens when an engine is
//! constructed from it. The defaults reproduce the classic 960px wide,
//! 12-column grid with 10px gutters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recognized grid options.
///
/// All derived geometry is a pure function of these three values; changing
/// any of them changes every width, padding and offset consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Total container width in pixels.
    pub total_width: u32,
    /// Number of grid columns.
    pub columns: u32,
    /// Margin reserved on each side of a column, in pixels.
    pub gutter: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_width: 960,
            columns: 12,
            gutter: 10,
        }
    }
}

impl GridConfig {
    /// Create a configuration with explicit values.
    pub const fn new(total_width: u32, columns: u32, gutter: u32) -> Self {
        Self {
            total_width,
            columns,
            gutter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_960_grid() {
        let config = GridConfig::default();
        assert_eq!(config.total_width, 960);
        assert_eq!(config.columns, 12);
        assert_eq!(config.gutter, 10);
    }

    #[test]
    fn test_new_sets_all_fields() {
        let config = GridConfig::new(1200, 16, 5);
        assert_eq!(config.total_width, 1200);
        assert_eq!(config.columns, 16);
        assert_eq!(config.gutter, 5);
    }
}
