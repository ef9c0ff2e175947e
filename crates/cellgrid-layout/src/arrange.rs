//! Turning measured line and cell sizes into offsets and a final grid size.

use cellgrid_core::{Density, LayoutDirection};
use smallvec::{smallvec, SmallVec};

use crate::arrangement::Arrange;
use crate::measure::{line_extent, CellTrack, MeasuredGrid};

pub type AxisOffsets = SmallVec<[i32; 16]>;

/// Offsets and sizes of lines and cells after arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangedGrid {
    /// Main-axis offset of each line
    pub line_offsets: AxisOffsets,
    /// Main-axis thickness of each line
    pub line_sizes: SmallVec<[i32; 16]>,
    /// Cross-axis offset of each cell
    pub cell_offsets: AxisOffsets,
    /// Cross-axis size of each cell
    pub cell_sizes: SmallVec<[i32; 8]>,
    pub main_size: i32,
    pub cross_size: i32,
}

/// One axis to arrange: its policy, spacing, direction and size limits.
pub struct AxisArrangement<'a> {
    pub arrangement: &'a dyn Arrange,
    pub density: Density,
    pub direction: LayoutDirection,
    pub spacing: i32,
    pub min: i32,
    pub max: i32,
}

/// Arranged offsets along one axis and the resulting axis size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangedAxis {
    pub offsets: AxisOffsets,
    pub size: i32,
}

impl AxisArrangement<'_> {
    /// Arrange `sizes` in a space of at least `provisional` pixels.
    ///
    /// The axis is sized to fit the laid-out content, offsets come from the
    /// arrangement policy, and the size is widened again if the arranged
    /// content reaches past it.
    pub fn arrange(&self, sizes: &[i32], provisional: i32) -> ArrangedAxis {
        let content = line_extent(sizes, self.spacing);
        let total = content.max(provisional).clamp(self.min, self.max);

        let mut offsets: AxisOffsets = smallvec![0; sizes.len()];
        self.arrangement
            .arrange(self.density, total, sizes, self.direction, &mut offsets);

        let extent = offsets
            .iter()
            .zip(sizes)
            .map(|(&offset, &size)| offset.saturating_add(size))
            .max()
            .unwrap_or(0);
        let size = total.max(extent).clamp(self.min, self.max);

        ArrangedAxis { offsets, size }
    }
}

/// Arrange lines along the main axis and cells along the cross axis.
///
/// Cells keep the size the strategy gave them unless a single-span child
/// measured larger.
pub fn arrange_grid(
    measured: &MeasuredGrid,
    cells: &CellTrack,
    main: &AxisArrangement<'_>,
    cross: &AxisArrangement<'_>,
) -> ArrangedGrid {
    let main_axis = main.arrange(&measured.line_thickness, measured.main_size);

    let cell_sizes: SmallVec<[i32; 8]> = cells
        .sizes()
        .iter()
        .zip(&measured.cell_max_cross)
        .map(|(&cell, &largest)| cell.max(largest))
        .collect();
    let cross_axis = cross.arrange(&cell_sizes, measured.cross_size);

    tracing::trace!(
        target: "cellgrid::arrange",
        main_size = main_axis.size,
        cross_size = cross_axis.size,
        lines = measured.line_thickness.len(),
        cells = cell_sizes.len(),
        "arranged grid axes"
    );

    ArrangedGrid {
        line_offsets: main_axis.offsets,
        line_sizes: measured.line_thickness.clone(),
        cell_offsets: cross_axis.offsets,
        cell_sizes,
        main_size: main_axis.size,
        cross_size: cross_axis.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::Arrangement;
    use cellgrid_core::Dp;

    fn axis(arrangement: &dyn Arrange, spacing: i32, min: i32, max: i32) -> AxisArrangement<'_> {
        AxisArrangement {
            arrangement,
            density: Density::default(),
            direction: LayoutDirection::Ltr,
            spacing,
            min,
            max,
        }
    }

    fn measured(lines: &[i32], cell_max: &[i32], main: i32, cross: i32) -> MeasuredGrid {
        MeasuredGrid {
            sizes: Vec::new(),
            line_thickness: SmallVec::from_slice(lines),
            cell_max_cross: SmallVec::from_slice(cell_max),
            main_size: main,
            cross_size: cross,
        }
    }

    #[test]
    fn test_start_arrangement_stacks_lines() {
        let start = Arrangement::Start;
        let result = axis(&start, 0, 0, 1000).arrange(&[10, 20, 5], 35);
        assert_eq!(result.offsets.as_slice(), &[0, 10, 30]);
        assert_eq!(result.size, 35);
    }

    #[test]
    fn test_spaced_arrangement_includes_spacing_in_size() {
        let spaced = Arrangement::spaced_by(Dp(4.0));
        let result = axis(&spaced, 4, 0, 1000).arrange(&[10, 10], 0);
        assert_eq!(result.offsets.as_slice(), &[0, 14]);
        assert_eq!(result.size, 24);
    }

    #[test]
    fn test_minimum_size_gives_room_to_distribute() {
        let center = Arrangement::Center;
        let result = axis(&center, 0, 40, 1000).arrange(&[10, 10], 0);
        assert_eq!(result.offsets.as_slice(), &[10, 20]);
        assert_eq!(result.size, 40);
    }

    #[test]
    fn test_overflowing_arrangement_widens_size() {
        let overlapping_end = |total: i32, sizes: &[i32], _: LayoutDirection, out: &mut [i32]| {
            for (index, offset) in out.iter_mut().enumerate().take(sizes.len()) {
                *offset = total + index as i32;
            }
        };
        let result = axis(&overlapping_end, 0, 0, 1000).arrange(&[10], 10);
        assert_eq!(result.size, 20);

        let capped = axis(&overlapping_end, 0, 0, 15).arrange(&[10], 10);
        assert_eq!(capped.size, 15);
    }

    #[test]
    fn test_arrange_grid_uses_larger_of_cell_and_child() {
        let start = Arrangement::Start;
        let cells = CellTrack::new(&[10, 10, 10], 0);
        let grid = arrange_grid(
            &measured(&[8, 6], &[10, 12, 0], 14, 30),
            &cells,
            &axis(&start, 0, 0, 100),
            &axis(&start, 0, 0, 100),
        );
        assert_eq!(grid.line_offsets.as_slice(), &[0, 8]);
        assert_eq!(grid.cell_sizes.as_slice(), &[10, 12, 10]);
        assert_eq!(grid.cell_offsets.as_slice(), &[0, 10, 22]);
        assert_eq!(grid.main_size, 14);
        assert_eq!(grid.cross_size, 32);
    }
}
