pub mod grid;
pub mod pad;

pub use grid::{content_row, horizontal_rule, render};
pub use pad::{centered, left_justified, padded};
