//! Core output types for gridspan.
//!
//! These records are what the engine hands to a template-rendering layer:
//! plain pixel values, one field per style property they map onto. They carry
//! no behavior of their own; all arithmetic lives in [`crate::engine`].

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Column geometry
// =============================================================================

/// Pixel geometry for an element spanning whole grid columns.
///
/// Placing the element with these margins makes it fill exactly its span of
/// grid cells: the content width plus one gutter on each side lines up with
/// the column edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnGeometry {
    /// Content width in pixels.
    pub width: u32,
    /// Margin on the left side, in pixels (one gutter).
    pub margin_left: u32,
    /// Margin on the right side, in pixels (one gutter).
    pub margin_right: u32,
}

// =============================================================================
// Prefix / suffix
// =============================================================================

/// Empty space inserted before an element without changing its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefixGeometry {
    /// Padding on the left side, in pixels.
    pub padding_left: u32,
}

/// Empty space inserted after an element without changing its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuffixGeometry {
    /// Padding on the right side, in pixels.
    pub padding_right: u32,
}

// =============================================================================
// Push / pull
// =============================================================================

/// Relative positional offset for visual reordering without changing document
/// order.
///
/// Positive moves the element right (push), negative moves it left (pull).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetGeometry {
    /// Horizontal offset from the element's normal position, in pixels.
    pub offset_left: i32,
}

// =============================================================================
// Clear floats
// =============================================================================

bitflags! {
    /// Which floated siblings a clear marker clears.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearSides: u8 {
        /// Clear floats that come before the marker.
        const BEFORE = 1 << 0;
        /// Clear floats that come after the marker.
        const AFTER = 1 << 1;
    }
}

/// Data-only clear-floats marker.
///
/// Occupies zero visible box and clears floated siblings. This is a style
/// descriptor, not computed geometry: it has no parameters and no error
/// conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearStyle {
    /// Box width in pixels (always 0).
    pub width: u32,
    /// Box height in pixels (always 0).
    pub height: u32,
    /// Whether the box is visible (always false).
    pub visible: bool,
    /// Sides on which floats are cleared.
    pub clear: ClearSides,
}

impl ClearStyle {
    /// The fixed descriptor: zero box, invisible, clears both sides.
    pub const BOTH: Self = Self {
        width: 0,
        height: 0,
        visible: false,
        clear: ClearSides::all(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_style_is_zero_box() {
        let style = ClearStyle::BOTH;
        assert_eq!(style.width, 0);
        assert_eq!(style.height, 0);
        assert!(!style.visible);
    }

    #[test]
    fn test_clear_style_clears_both_sides() {
        let style = ClearStyle::BOTH;
        assert!(style.clear.contains(ClearSides::BEFORE));
        assert!(style.clear.contains(ClearSides::AFTER));
    }
}
