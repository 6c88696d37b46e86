//! Box-drawn grid assembly: horizontal rules, content rows, and the full
//! table.
//!
//! Output is a plain `String` of `\n`-joined lines with no trailing
//! newline.  Every cell carries one padding column per side, so each rule
//! runs `width + 2` fill glyphs per column.

use crate::core::{align::Alignment, cell::Cell, layout::column_widths, table::Table};
use crate::render::pad::padded;

// Box-drawing glyphs
const V: &str = "│";
const H: &str = "─";
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const JT: &str = "┬";
const JL: &str = "├";
const JC: &str = "┼";
const JR: &str = "┤";
const JB: &str = "┴";

/// One horizontal rule: `left`, a `fill` run of `width + 2` per column
/// joined by `centre`, then `right`.
#[must_use]
pub fn horizontal_rule(
    column_widths: &[usize],
    left: &str,
    centre: &str,
    right: &str,
    fill: &str,
) -> String {
    let mut line = String::from(left);
    for (i, width) in column_widths.iter().enumerate() {
        if i > 0 {
            line.push_str(centre);
        }
        line.push_str(&fill.repeat(width + 2));
    }
    line.push_str(right);
    line
}

/// One content line: │ then every padded cell, each closed by │.
#[must_use]
pub fn content_row(cells: &[Cell], column_widths: &[usize], align: Alignment) -> String {
    let mut line = String::from(V);
    for (cell, width) in cells.iter().zip(column_widths) {
        line.push_str(&padded(align, cell, *width));
        line.push_str(V);
    }
    line
}

/// Assemble `table` into its box-drawn form.
///
/// Top rule, the label row plus separator rule when labels are set, one
/// line per data row in input order, bottom rule.
#[must_use]
pub fn render(table: &Table) -> String {
    let widths = column_widths(table.rows(), table.labels());
    let mut lines = Vec::with_capacity(table.rows().len() + 4);

    lines.push(horizontal_rule(&widths, TL, JT, TR, H));
    if let Some(labels) = table.labels() {
        lines.push(content_row(labels, &widths, table.align()));
        lines.push(horizontal_rule(&widths, JL, JC, JR, H));
    }
    for row in table.rows() {
        lines.push(content_row(row, &widths, table.align()));
    }
    lines.push(horizontal_rule(&widths, BL, JB, BR, H));

    lines.join("\n")
}
