//! Column geometry derived from cell contents.

use crate::core::cell::Cell;

/// Width of every column: the widest cell in that column, label included.
///
/// Expects a non-empty, rectangular row set with matching label length (the
/// [`Table`](crate::core::table::Table) builder enforces exactly that);
/// widths are recomputed from scratch on every call.
#[must_use]
pub fn column_widths(rows: &[Vec<Cell>], labels: Option<&[Cell]>) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|col| {
            let label_width = labels.map_or(0, |l| l[col].width());
            rows.iter()
                .map(|row| row[col].width())
                .fold(label_width, usize::max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(texts: &[&str]) -> Vec<Cell> {
        texts.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn widest_cell_wins_per_column() {
        let rows = vec![cells(&["Lemon", "Owner"]), cells(&["Sebastiaan", "ok"])];
        assert_eq!(column_widths(&rows, None), vec![10, 5]);
    }

    #[test]
    fn labels_participate_in_the_max() {
        let rows = vec![cells(&["Lemon"]), cells(&["Jake"])];
        let labels = cells(&["User"]);
        assert_eq!(column_widths(&rows, Some(&labels)), vec![5]);

        let long = cells(&["Membership"]);
        assert_eq!(column_widths(&rows, Some(&long)), vec![10]);
    }

    #[test]
    fn single_row_widths_are_its_cell_widths() {
        let rows = vec![cells(&["Joe", "-12", "Idk"])];
        assert_eq!(column_widths(&rows, None), vec![3, 3, 3]);
    }
}
