//! Greedy line packing of children into cross-axis cells.

use cellgrid_core::GridError;
use smallvec::SmallVec;

use crate::item::{GridItemData, GridItemSpanScope};

/// Grid coordinate assigned to one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedItem {
    /// Index of the child in the host's order
    pub index: usize,
    /// Line (row or column) the child belongs to
    pub line: usize,
    /// First cross-axis cell the child occupies
    pub cell: usize,
    /// Number of cells occupied, already capped to the cell count
    pub span: usize,
}

impl PackedItem {
    /// One past the last occupied cell.
    pub fn cell_end(&self) -> usize {
        self.cell + self.span
    }
}

pub type GridLine = SmallVec<[PackedItem; 8]>;

/// Children assigned to lines and cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedGrid {
    pub lines: Vec<GridLine>,
    pub cell_count: usize,
}

impl PackedGrid {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|line| line.len()).sum()
    }

    /// All packed items in child order.
    pub fn items(&self) -> impl Iterator<Item = &PackedItem> {
        self.lines.iter().flatten()
    }
}

/// Pack children into lines of `cell_count` cells.
///
/// A child whose span does not fit the room left in the current line starts a
/// new line; spans larger than `cell_count` are capped to a full line. Span
/// callbacks see the room left at the moment their child is visited.
pub fn pack<'a, I>(items: I, cell_count: usize) -> Result<PackedGrid, GridError>
where
    I: IntoIterator<Item = &'a GridItemData>,
{
    if cell_count == 0 {
        return Err(GridError::NoCells);
    }

    let mut lines = Vec::new();
    let mut current = GridLine::new();
    let mut remaining = cell_count;

    for (index, data) in items.into_iter().enumerate() {
        let scope = GridItemSpanScope {
            max_line_span: cell_count,
            max_current_line_span: remaining,
        };
        let span = data
            .span
            .resolve(&scope)
            .map_err(|err| err.with_child_index(index))?
            .get()
            .min(cell_count);

        if span > remaining {
            lines.push(std::mem::take(&mut current));
            remaining = cell_count;
        }

        current.push(PackedItem {
            index,
            line: lines.len(),
            cell: cell_count - remaining,
            span,
        });
        remaining -= span;

        if remaining == 0 {
            lines.push(std::mem::take(&mut current));
            remaining = cell_count;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    tracing::trace!(
        target: "cellgrid::packer",
        cell_count,
        lines = lines.len(),
        "packed grid lines"
    );

    Ok(PackedGrid { lines, cell_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spans(spans: &[i32]) -> Vec<GridItemData> {
        spans
            .iter()
            .map(|&span| GridItemData::new().with_span(span).unwrap())
            .collect()
    }

    fn line_indices(grid: &PackedGrid) -> Vec<Vec<usize>> {
        grid.lines
            .iter()
            .map(|line| line.iter().map(|item| item.index).collect())
            .collect()
    }

    #[test]
    fn test_single_spans_fill_lines() {
        let items = spans(&[1; 7]);
        let grid = pack(&items, 3).unwrap();
        assert_eq!(line_indices(&grid), vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
        let cells: Vec<_> = grid.items().map(|item| item.cell).collect();
        assert_eq!(cells, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(grid.item_count(), 7);
    }

    #[test]
    fn test_span_that_fits_stays_on_line() {
        let items = spans(&[1, 2, 2]);
        let grid = pack(&items, 3).unwrap();
        assert_eq!(line_indices(&grid), vec![vec![0, 1], vec![2]]);
        assert_eq!(grid.lines[0][1].cell, 1);
    }

    #[test]
    fn test_span_that_does_not_fit_wraps() {
        let items = spans(&[1, 2, 2]);
        let grid = pack(&items, 2).unwrap();
        assert_eq!(line_indices(&grid), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(grid.lines[1][0].line, 1);
        assert_eq!(grid.lines[2][0].cell, 0);
    }

    #[test]
    fn test_oversized_span_is_capped() {
        let items = spans(&[1, 10, 1]);
        let grid = pack(&items, 3).unwrap();
        assert_eq!(line_indices(&grid), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(grid.lines[1][0].span, 3);
        assert_eq!(grid.lines[1][0].cell_end(), 3);
    }

    #[test]
    fn test_full_span_on_empty_line_does_not_wrap() {
        let items = spans(&[3, 1]);
        let grid = pack(&items, 3).unwrap();
        assert_eq!(line_indices(&grid), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_span_callback_sees_packing_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut items = spans(&[1]);
        for _ in 0..2 {
            let seen = Rc::clone(&seen);
            items.push(GridItemData::new().with_span_fn(move |scope| {
                seen.borrow_mut().push((scope.max_line_span, scope.max_current_line_span));
                scope.max_current_line_span as i32
            }));
        }

        let grid = pack(&items, 4).unwrap();

        assert_eq!(*seen.borrow(), vec![(4, 3), (4, 4)]);
        assert_eq!(line_indices(&grid), vec![vec![0, 1], vec![2]]);
        assert_eq!(grid.lines[1][0].span, 4);
    }

    #[test]
    fn test_callback_span_error_names_child() {
        let mut items = spans(&[1, 1]);
        items.push(GridItemData::new().with_span_fn(|_| 0));
        assert_eq!(
            pack(&items, 3).unwrap_err(),
            GridError::InvalidSpan { index: Some(2), span: 0 }
        );
    }

    #[test]
    fn test_zero_cells_is_an_error() {
        let items = spans(&[1]);
        assert_eq!(pack(&items, 0).unwrap_err(), GridError::NoCells);
    }

    #[test]
    fn test_no_children_packs_no_lines() {
        let items: Vec<GridItemData> = Vec::new();
        let grid = pack(&items, 3).unwrap();
        assert_eq!(grid.line_count(), 0);
    }
}
