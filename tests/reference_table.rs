//! Pins the engine's default output to the classic 960 grid reference table.
//!
//! The numbers here are the published 960px/12-column values, written out
//! span by span on purpose: the engine derives them from formulas, and this
//! table is the independent check that the derivation matches.

use gridspan::{GridConfig, GridLayout};

#[test]
fn default_widths_match_reference_table() {
    let grid = GridLayout::default();
    let expected = [
        (1, 60),
        (2, 140),
        (3, 220),
        (4, 300),
        (5, 380),
        (6, 460),
        (7, 540),
        (8, 620),
        (9, 700),
        (10, 780),
        (11, 860),
        (12, 940),
    ];
    for (span, width) in expected {
        assert_eq!(grid.column_width(span).unwrap(), width, "span {span}");
    }
}

#[test]
fn default_offsets_match_reference_table() {
    let grid = GridLayout::default();
    for span in 1..=11u32 {
        let expected = 80 * span;
        assert_eq!(grid.prefix_padding(span).unwrap(), expected, "prefix {span}");
        assert_eq!(grid.suffix_padding(span).unwrap(), expected, "suffix {span}");
        assert_eq!(grid.push_offset(span).unwrap(), expected as i32, "push {span}");
        assert_eq!(
            grid.pull_offset(span).unwrap(),
            -(expected as i32),
            "pull {span}"
        );
    }
}

#[test]
fn template_layer_scenario() {
    // The call sequence a template layer makes when rendering a half-width
    // element swapped with its sibling.
    let grid = GridLayout::default();

    let body = grid.column(6).unwrap();
    assert_eq!(body.width, 460);
    assert_eq!(body.margin_left, 10);
    assert_eq!(body.margin_right, 10);

    assert_eq!(grid.push(6).unwrap().offset_left, 480);
    assert_eq!(grid.pull(6).unwrap().offset_left, -480);

    let row_end = grid.clearfix();
    assert_eq!((row_end.width, row_end.height), (0, 0));
}

#[test]
fn reconfigured_grid_keeps_formulas() {
    let grid = GridLayout::new(GridConfig::new(1200, 12, 10)).unwrap();
    assert_eq!(grid.column_width(1).unwrap(), 80);
    assert_eq!(grid.column_width(12).unwrap(), 1180);
    assert_eq!(grid.prefix_padding(1).unwrap(), 100);
}

#[cfg(feature = "serde")]
#[test]
fn geometry_serializes_for_the_template_layer() {
    let grid = GridLayout::default();
    let json = serde_json::to_value(grid.column(6).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "width": 460,
            "margin_left": 10,
            "margin_right": 10,
        })
    );
}
