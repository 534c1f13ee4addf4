//! Grid layout engine.
//!
//! Computes pixel geometry for elements spanning whole columns of a fixed
//! grid. Hand-written grid stylesheets encode width, prefix, suffix, push
//! and pull as independent per-span tables that can silently drift apart
//! when one is edited; here every span-proportional distance derives from a
//! single primitive, [`GridLayout::unit_step`], so the variants cannot
//! disagree and any configuration works without re-deriving magic numbers.
//!
//! # Formulas
//!
//! With `unit = (total_width - columns * 2 * gutter) / columns`:
//!
//! - `unit_step(s) = s * (unit + 2 * gutter)`
//! - `column_width(s) = unit_step(s) - 2 * gutter`
//!   (equivalently `s * unit + (s - 1) * 2 * gutter`)
//! - prefix, suffix and push are `unit_step(s)`; pull is `-unit_step(s)`
//!
//! For the default 960/12/10 grid, `unit = 60` and `unit_step(1) = 80`, so
//! widths run 60, 140, 220, … 940 and offsets run in steps of 80.
//!
//! # Purity
//!
//! The engine holds no mutable state and does no I/O. Every call is O(1)
//! arithmetic, idempotent, and safe from any number of concurrent callers.

use crate::config::GridConfig;
use crate::error::{GridConfigError, InvalidSpanError};
use crate::types::{
    ClearStyle, ColumnGeometry, OffsetGeometry, PrefixGeometry, SuffixGeometry,
};

// =============================================================================
// Engine
// =============================================================================

/// Parameterized fixed-column grid engine.
///
/// Construct with [`GridLayout::new`] for a custom [`GridConfig`], or use
/// [`GridLayout::default`] for the 960px / 12-column / 10px-gutter grid.
///
/// # Example
///
/// ```
/// use gridspan::GridLayout;
///
/// let grid = GridLayout::default();
/// assert_eq!(grid.column_width(6).unwrap(), 460);
/// assert_eq!(grid.push_offset(6).unwrap(), 480);
/// assert_eq!(grid.pull_offset(6).unwrap(), -480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    config: GridConfig,
    column_unit: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        // The default config always passes validation.
        Self::from_validated(GridConfig::default())
    }
}

impl GridLayout {
    /// Create an engine from a configuration.
    ///
    /// Fails if the grid has no columns, if the container is wider than
    /// signed 32-bit offsets can express, or if the gutters alone consume
    /// the whole container width. A `total_width` that does not divide
    /// evenly after subtracting gutters is accepted; the column unit is
    /// floored.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        if config.columns == 0 {
            return Err(GridConfigError::ZeroColumns);
        }
        // unit_step of any valid span never exceeds total_width, so this cap
        // keeps every offset within i32.
        if config.total_width > i32::MAX as u32 {
            return Err(GridConfigError::WidthOverflow {
                total_width: config.total_width,
            });
        }
        let gutter_total = u64::from(config.columns) * 2 * u64::from(config.gutter);
        if gutter_total >= u64::from(config.total_width) {
            return Err(GridConfigError::GutterOverflow {
                total_width: config.total_width,
                columns: config.columns,
                gutter: config.gutter,
            });
        }
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: GridConfig) -> Self {
        let column_unit = (config.total_width - config.columns * 2 * config.gutter) / config.columns;
        Self {
            config,
            column_unit,
        }
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Width of a single column excluding its gutters, in pixels.
    pub fn column_unit(&self) -> u32 {
        self.column_unit
    }

    // =========================================================================
    // Base primitive
    // =========================================================================

    /// Span-proportional distance: `span * (column_unit + 2 * gutter)`.
    ///
    /// This is the single source of truth every other operation derives from.
    /// `unit_step(1)` is the horizontal distance from one column's left edge
    /// to the next (80px for the default grid). Performs no range check; the
    /// span-validated operations below are the public contract.
    pub fn unit_step(&self, span: u32) -> u32 {
        span * (self.column_unit + 2 * self.config.gutter)
    }

    fn check_span(&self, span: u32, max: u32) -> Result<(), InvalidSpanError> {
        if span == 0 || span > max {
            return Err(InvalidSpanError { span, min: 1, max });
        }
        Ok(())
    }

    // =========================================================================
    // Scalar operations
    // =========================================================================

    /// Pixel width of an element spanning `span` columns.
    ///
    /// Valid for `span` in `[1, columns]`. With one gutter margin on each
    /// side, the element fills exactly `span` grid cells.
    pub fn column_width(&self, span: u32) -> Result<u32, InvalidSpanError> {
        self.check_span(span, self.config.columns)?;
        Ok(self.unit_step(span) - 2 * self.config.gutter)
    }

    /// Left padding that indents an element by `span` columns.
    ///
    /// Valid for `span` in `[1, columns - 1]`; there is no full-row prefix.
    pub fn prefix_padding(&self, span: u32) -> Result<u32, InvalidSpanError> {
        self.check_span(span, self.config.columns - 1)?;
        Ok(self.unit_step(span))
    }

    /// Right padding that reserves `span` columns after an element.
    ///
    /// Valid for `span` in `[1, columns - 1]`.
    pub fn suffix_padding(&self, span: u32) -> Result<u32, InvalidSpanError> {
        self.check_span(span, self.config.columns - 1)?;
        Ok(self.unit_step(span))
    }

    /// Relative offset that moves an element `span` columns to the right.
    ///
    /// Valid for `span` in `[1, columns - 1]`.
    pub fn push_offset(&self, span: u32) -> Result<i32, InvalidSpanError> {
        self.check_span(span, self.config.columns - 1)?;
        // Lossless: construction caps total_width at i32::MAX, and
        // unit_step of a valid span never exceeds total_width.
        Ok(self.unit_step(span) as i32)
    }

    /// Relative offset that moves an element `span` columns to the left.
    ///
    /// Valid for `span` in `[1, columns - 1]`. Always negative.
    pub fn pull_offset(&self, span: u32) -> Result<i32, InvalidSpanError> {
        self.check_span(span, self.config.columns - 1)?;
        Ok(-(self.unit_step(span) as i32))
    }

    // =========================================================================
    // Geometry records
    // =========================================================================

    /// Full geometry record for a column span: width plus gutter margins.
    pub fn column(&self, span: u32) -> Result<ColumnGeometry, InvalidSpanError> {
        Ok(ColumnGeometry {
            width: self.column_width(span)?,
            margin_left: self.config.gutter,
            margin_right: self.config.gutter,
        })
    }

    /// Geometry record for a prefix indent.
    pub fn prefix(&self, span: u32) -> Result<PrefixGeometry, InvalidSpanError> {
        Ok(PrefixGeometry {
            padding_left: self.prefix_padding(span)?,
        })
    }

    /// Geometry record for a suffix reservation.
    pub fn suffix(&self, span: u32) -> Result<SuffixGeometry, InvalidSpanError> {
        Ok(SuffixGeometry {
            padding_right: self.suffix_padding(span)?,
        })
    }

    /// Geometry record for a rightward push.
    pub fn push(&self, span: u32) -> Result<OffsetGeometry, InvalidSpanError> {
        Ok(OffsetGeometry {
            offset_left: self.push_offset(span)?,
        })
    }

    /// Geometry record for a leftward pull.
    pub fn pull(&self, span: u32) -> Result<OffsetGeometry, InvalidSpanError> {
        Ok(OffsetGeometry {
            offset_left: self.pull_offset(span)?,
        })
    }

    /// The clear-floats style descriptor.
    ///
    /// Fixed data, independent of the configuration: a zero visible box that
    /// clears floated siblings before and after.
    pub fn clearfix(&self) -> ClearStyle {
        ClearStyle::BOTH
    }
}
