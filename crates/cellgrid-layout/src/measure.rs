//! Measuring packed children under per-cell constraints.

use cellgrid_core::{Constraints, Size};
use smallvec::{smallvec, SmallVec};

use crate::axis::{AxisConstraints, AxisMap};
use crate::item::{GridChild, Measurable};
use crate::packer::PackedGrid;

/// Start offsets and sizes of the cross-axis cells before arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTrack {
    sizes: SmallVec<[i32; 8]>,
    starts: SmallVec<[i32; 8]>,
}

impl CellTrack {
    pub fn new(sizes: &[i32], spacing: i32) -> Self {
        let mut starts = SmallVec::with_capacity(sizes.len());
        let mut position = 0i32;
        for &size in sizes {
            starts.push(position);
            position = position.saturating_add(size).saturating_add(spacing);
        }
        Self {
            sizes: SmallVec::from_slice(sizes),
            starts,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[i32] {
        &self.sizes
    }

    /// Space taken by the cells before `cell`, spacing included.
    pub fn start(&self, cell: usize) -> i32 {
        self.starts[cell]
    }

    /// Size of `span` cells starting at `cell`, with the spacing between them.
    pub fn span_size(&self, cell: usize, span: usize) -> i32 {
        let last = cell + span - 1;
        self.starts[last] + self.sizes[last] - self.starts[cell]
    }

    /// Extent of all cells with the spacing between them.
    pub fn total_size(&self) -> i32 {
        match self.sizes.len() {
            0 => 0,
            len => self.span_size(0, len),
        }
    }
}

/// Inputs shared by every child measurement in a pass.
#[derive(Debug, Clone, Copy)]
pub struct MeasureInput<'a> {
    pub axes: AxisMap,
    pub constraints: AxisConstraints,
    pub cells: &'a CellTrack,
    pub main_spacing: i32,
    pub fill_cells: bool,
}

/// Result of measuring every child of a packed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredGrid {
    /// Measured size of each child, in child order
    pub sizes: Vec<Size>,
    /// Largest main-axis size within each line
    pub line_thickness: SmallVec<[i32; 16]>,
    /// Largest cross-axis size among single-span children of each cell
    pub cell_max_cross: SmallVec<[i32; 8]>,
    /// Provisional main-axis size, coerced into the grid constraints
    pub main_size: i32,
    /// Provisional cross-axis size, coerced into the grid constraints
    pub cross_size: i32,
}

/// Measure every packed child, line by line.
///
/// A child may use the main-axis space not yet taken by earlier lines and the
/// cross-axis space of its span, limited to what is left of the grid's cross
/// extent. Minimums are zero unless the cells fill, in which case the child is
/// stretched across its span.
pub fn measure_grid<M: Measurable>(
    packed: &PackedGrid,
    children: &mut [GridChild<M>],
    input: &MeasureInput<'_>,
) -> MeasuredGrid {
    let MeasureInput {
        axes,
        constraints,
        cells,
        main_spacing,
        fill_cells,
    } = *input;

    let mut sizes = vec![Size::ZERO; children.len()];
    let mut line_thickness = SmallVec::with_capacity(packed.line_count());
    let mut cell_max_cross: SmallVec<[i32; 8]> = smallvec![0; cells.len()];
    let mut main_used = 0i32;

    for line in &packed.lines {
        let main_max = if constraints.has_bounded_main() {
            (constraints.main_max - main_used).max(0)
        } else {
            Constraints::INFINITY
        };

        let mut thickness = 0;
        for item in line {
            let span_size = cells.span_size(item.cell, item.span);
            let cross_left = (constraints.cross_max - cells.start(item.cell)).max(0);
            let cross_max = span_size.min(cross_left).max(0);
            let cross_min = if fill_cells { cross_max } else { 0 };

            let child_constraints =
                AxisConstraints::new(0, main_max, cross_min, cross_max).to_constraints(axes);
            let size = children[item.index].measurable.measure(child_constraints);
            if !child_constraints.is_satisfied_by(size) {
                tracing::warn!(
                    target: "cellgrid::measure",
                    child = item.index,
                    ?size,
                    ?child_constraints,
                    "grid child measured outside its constraints"
                );
            }

            sizes[item.index] = size;
            thickness = thickness.max(axes.main(size));
            if item.span == 1 {
                let max = &mut cell_max_cross[item.cell];
                *max = (*max).max(axes.cross(size));
            }
        }

        tracing::trace!(
            target: "cellgrid::measure",
            line = line_thickness.len(),
            items = line.len(),
            thickness,
            "measured grid line"
        );
        line_thickness.push(thickness);
        main_used = main_used.saturating_add(thickness).saturating_add(main_spacing);
    }

    let main_content = line_extent(&line_thickness, main_spacing);

    MeasuredGrid {
        sizes,
        line_thickness,
        cell_max_cross,
        main_size: constraints.constrain_main(main_content),
        cross_size: constraints.constrain_cross(cells.total_size()),
    }
}

/// Total extent of `sizes` laid end to end with `spacing` between them.
pub fn line_extent(sizes: &[i32], spacing: i32) -> i32 {
    let gaps = sizes.len().saturating_sub(1) as i32;
    sizes
        .iter()
        .fold(0i32, |total, &size| total.saturating_add(size))
        .saturating_add(spacing.saturating_mul(gaps))
}
