//! Error types for gridspan.
//!
//! Geometry requests fail synchronously or not at all: every operation is
//! pure arithmetic, so there are no transient failures and nothing to retry.
//! Out-of-range spans are rejected rather than clamped or wrapped.

use thiserror::Error;

/// A requested span falls outside the valid range for the operation.
///
/// Column widths accept spans in `[1, columns]`; prefix, suffix, push and
/// pull accept `[1, columns - 1]` (there is no full-row or zero-column
/// variant of those).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("span {span} outside valid range {min}..={max}")]
pub struct InvalidSpanError {
    /// The rejected span.
    pub span: u32,
    /// Smallest accepted span.
    pub min: u32,
    /// Largest accepted span.
    pub max: u32,
}

/// A grid configuration that cannot produce any column geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridConfigError {
    /// The grid must have at least one column.
    #[error("column count must be at least 1")]
    ZeroColumns,

    /// The container is too wide for signed pixel offsets.
    #[error("total width {total_width}px does not fit the signed 32-bit offset range")]
    WidthOverflow {
        /// Configured container width in pixels.
        total_width: u32,
    },

    /// The gutters alone consume the whole container width.
    #[error(
        "gutters ({columns} columns x 2 x {gutter}px) leave no column width in {total_width}px"
    )]
    GutterOverflow {
        /// Configured container width in pixels.
        total_width: u32,
        /// Configured column count.
        columns: u32,
        /// Configured gutter per side in pixels.
        gutter: u32,
    },
}
