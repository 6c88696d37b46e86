//! Public-facing crate root – re-exports + one-shot helper.

pub mod core;
pub mod render;

pub use core::{
    align::Alignment,
    cell::Cell,
    error::TableError,
    layout::column_widths,
    table::{Table, TableBuilder},
};

pub use render::grid::render;

/// Convenience function for the common one-shot call shape.  Renders `rows`
/// (plus optional column `labels`) straight to a box-drawn string,
/// left-aligned unless `centered`.
pub fn render_table(
    rows: Vec<Vec<Cell>>,
    labels: Option<Vec<Cell>>,
    centered: bool,
) -> Result<String, TableError> {
    let mut builder = Table::builder();
    if centered {
        builder = builder.centered();
    }
    for row in rows {
        builder = builder.row(row);
    }
    if let Some(labels) = labels {
        builder = builder.labels(labels);
    }
    Ok(render(&builder.build()?))
}
