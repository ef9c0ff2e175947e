//! Final child positions from arranged lines and cells.

use cellgrid_core::{Alignment, Bounds, LayoutDirection, Size};

use crate::arrange::ArrangedGrid;
use crate::axis::AxisMap;
use crate::packer::{PackedGrid, PackedItem};

/// Where one child ends up, relative to the grid origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    /// Index of the child in the host's order
    pub index: usize,
    pub bounds: Bounds,
}

/// The box a packed item may occupy: its line's thickness by the union of its
/// spanned cells, as (main start, cross start, size).
fn item_box(item: &PackedItem, arranged: &ArrangedGrid, axes: AxisMap) -> (i32, i32, Size) {
    let main_start = arranged.line_offsets[item.line];
    let line_size = arranged.line_sizes[item.line];

    let (cross_start, cross_end) = (item.cell..item.cell_end()).fold(
        (i32::MAX, i32::MIN),
        |(start, end), cell| {
            let offset = arranged.cell_offsets[cell];
            (start.min(offset), end.max(offset.saturating_add(arranged.cell_sizes[cell])))
        },
    );

    (main_start, cross_start, axes.size(line_size, cross_end.saturating_sub(cross_start)))
}

/// Position every packed child inside its box according to its alignment.
///
/// Placements are returned in child order.
pub fn place_children(
    packed: &PackedGrid,
    sizes: &[Size],
    alignment_of: impl Fn(usize) -> Alignment,
    arranged: &ArrangedGrid,
    axes: AxisMap,
    direction: LayoutDirection,
) -> Vec<Placement> {
    let mut placements = vec![Placement::default(); sizes.len()];

    for item in packed.items() {
        let (main_start, cross_start, space) = item_box(item, arranged, axes);
        let size = sizes[item.index];
        let origin = axes.offset(main_start, cross_start);
        let position = origin + alignment_of(item.index).align(size, space, direction);

        placements[item.index] = Placement {
            index: item.index,
            bounds: Bounds::from_position_size(position, size),
        };
    }

    placements
}
