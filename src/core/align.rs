//! Horizontal cell alignment.

/// How cell content sits inside its padded field.  One choice applies to
/// every cell of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// One leading space, then the value flush left.
    #[default]
    Left,
    /// Value centred; an odd leftover space lands on the right.
    Center,
}
