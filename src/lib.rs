//! # gridspan
//!
//! Fixed-column grid layout engine.
//!
//! Computes pixel geometry for elements spanning whole columns of a fixed
//! grid — the classic 960px / 12-column / 10px-gutter layout by default:
//! content widths, gutter margins, prefix/suffix padding, push/pull offsets,
//! and a data-only clear-floats marker.
//!
//! ## Architecture
//!
//! Everything derives from one primitive. With
//! `unit = (total_width - columns * 2 * gutter) / columns`, the engine
//! exposes `unit_step(span) = span * (unit + 2 * gutter)` and derives all
//! five operations from it, so width/prefix/suffix/push/pull can never drift
//! apart and any configuration yields consistent geometry without
//! hand-maintained per-span tables.
//!
//! The engine is pure: no mutable state, no I/O, O(1) arithmetic per call,
//! safe from any number of concurrent callers.
//!
//! ## Example
//!
//! ```
//! use gridspan::{GridConfig, GridLayout};
//!
//! // Default 960/12/10 grid.
//! let grid = GridLayout::default();
//! assert_eq!(grid.column_width(6).unwrap(), 460);
//! assert_eq!(grid.push_offset(6).unwrap(), 480);
//!
//! // Any other configuration, same formulas.
//! let wide = GridLayout::new(GridConfig::new(1200, 12, 10)).unwrap();
//! assert_eq!(wide.column_width(12).unwrap(), 1180);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Grid options (total width, column count, gutter)
//! - [`engine`] - The [`GridLayout`] engine and its operations
//! - [`types`] - Geometry records handed to the template layer
//! - [`error`] - Span and configuration errors

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

// Re-export the public surface flat.
pub use config::GridConfig;
pub use engine::GridLayout;
pub use error::{GridConfigError, InvalidSpanError};
pub use types::{
    ClearSides, ClearStyle, ColumnGeometry, OffsetGeometry, PrefixGeometry, SuffixGeometry,
};
