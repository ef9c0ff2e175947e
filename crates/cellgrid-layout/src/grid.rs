//! Grid layout entry point.
//!
//! [`GridLayout`] ties the pipeline together: cell sizing, packing,
//! measurement, arrangement and placement all run once per [`GridLayout::measure`].

use std::fmt;

use cellgrid_core::{Alignment, Bounds, Constraints, Density, GridError, LayoutDirection, Orientation, Size};

use crate::arrange::{arrange_grid, AxisArrangement};
use crate::arrangement::{Arrange, Arrangement};
use crate::axis::{AxisConstraints, AxisMap};
use crate::cells::{CellSizeCache, CellSizes, GridCells, SimpleGridCells};
use crate::item::{GridChild, Measurable};
use crate::measure::{measure_grid, CellTrack, MeasureInput};
use crate::packer::pack;
use crate::place::{place_children, Placement};

/// Grid layout configuration and per-layout state.
pub struct GridLayout {
    orientation: Orientation,
    cells: Box<dyn GridCells>,
    main_axis_arrangement: Box<dyn Arrange>,
    cross_axis_arrangement: Box<dyn Arrange>,
    layout_direction: LayoutDirection,
    density: Density,
    cell_cache: CellSizeCache,
}

/// Serializable description of a grid using the built-in strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GridConfig {
    pub orientation: Orientation,
    pub cells: SimpleGridCells,
    pub main_axis_arrangement: Arrangement,
    pub cross_axis_arrangement: Arrangement,
    pub layout_direction: LayoutDirection,
    pub density: Density,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            cells: SimpleGridCells::Fixed { count: 1, fill: true },
            main_axis_arrangement: Arrangement::default(),
            cross_axis_arrangement: Arrangement::default(),
            layout_direction: LayoutDirection::default(),
            density: Density::default(),
        }
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMeasureResult {
    /// Final size of the grid
    pub size: Size,
    /// One placement per child, in child order
    pub placements: Vec<Placement>,
    pub line_count: usize,
    /// Cross-axis cell sizes computed by the strategy
    pub cell_sizes: CellSizes,
}

impl GridMeasureResult {
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Bounding box of every placed child, or empty bounds when there are none.
    pub fn content_bounds(&self) -> Bounds {
        let mut bounds = self.placements.iter().map(|placement| placement.bounds);
        match bounds.next() {
            Some(first) => bounds.fold(first, |acc, next| acc.union(&next)),
            None => Bounds::default(),
        }
    }
}

impl GridLayout {
    /// Create a grid with the given orientation and cell strategy.
    pub fn new(orientation: Orientation, cells: impl GridCells + 'static) -> Self {
        Self {
            orientation,
            cells: Box::new(cells),
            main_axis_arrangement: Box::new(Arrangement::Start),
            cross_axis_arrangement: Box::new(Arrangement::Start),
            layout_direction: LayoutDirection::Ltr,
            density: Density::default(),
            cell_cache: CellSizeCache::new(),
        }
    }

    /// A grid of rows stacked top to bottom, split into columns.
    pub fn vertical(cells: impl GridCells + 'static) -> Self {
        Self::new(Orientation::Vertical, cells)
    }

    /// A grid of columns stacked left to right, split into rows.
    pub fn horizontal(cells: impl GridCells + 'static) -> Self {
        Self::new(Orientation::Horizontal, cells)
    }

    /// Build a grid from a configuration, validating its cell strategy.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.cells.validate()?;
        config.density.validate()?;
        Ok(Self::new(config.orientation, config.cells)
            .with_main_axis_arrangement(config.main_axis_arrangement)
            .with_cross_axis_arrangement(config.cross_axis_arrangement)
            .with_layout_direction(config.layout_direction)
            .with_density(config.density))
    }

    /// Set how lines are arranged along the main axis.
    pub fn with_main_axis_arrangement(mut self, arrangement: impl Arrange + 'static) -> Self {
        self.main_axis_arrangement = Box::new(arrangement);
        self
    }

    /// Set how cells are arranged along the cross axis.
    pub fn with_cross_axis_arrangement(mut self, arrangement: impl Arrange + 'static) -> Self {
        self.cross_axis_arrangement = Box::new(arrangement);
        self
    }

    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Set the density used to resolve dp lengths. It is validated on measure.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Replace the cell strategy, dropping any cached cell sizes.
    pub fn with_cells(mut self, cells: impl GridCells + 'static) -> Self {
        self.cells = Box::new(cells);
        self.cell_cache.clear();
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Run one full layout pass over `children`.
    ///
    /// Every child is measured exactly once. On error no child placement is
    /// produced.
    pub fn measure<M: Measurable>(
        &self,
        constraints: Constraints,
        children: &mut [GridChild<M>],
    ) -> Result<GridMeasureResult, GridError> {
        constraints.validate()?;
        self.cells.validate()?;
        self.density.validate()?;

        let axes = AxisMap::new(self.orientation);
        let axis_constraints = AxisConstraints::from_constraints(constraints, axes);
        if !axis_constraints.has_bounded_cross() {
            return Err(GridError::UnboundedCrossAxis {
                orientation: self.orientation,
            });
        }

        let main_spacing = self.main_axis_arrangement.spacing(self.density);
        let cross_spacing = self.cross_axis_arrangement.spacing(self.density);

        let cell_sizes = self.cell_cache.get_or_calculate(
            self.cells.as_ref(),
            self.density,
            axis_constraints.cross_max,
            cross_spacing,
        );
        if cell_sizes.is_empty() {
            return Err(GridError::NoCells);
        }

        let packed = pack(children.iter().map(|child| &child.data), cell_sizes.len())?;

        let track = CellTrack::new(&cell_sizes, cross_spacing);
        let input = MeasureInput {
            axes,
            constraints: axis_constraints,
            cells: &track,
            main_spacing,
            fill_cells: self.cells.fill_cell_size(),
        };
        let measured = measure_grid(&packed, children, &input);

        let main = AxisArrangement {
            arrangement: self.main_axis_arrangement.as_ref(),
            density: self.density,
            direction: axes.main_direction(self.layout_direction),
            spacing: main_spacing,
            min: axis_constraints.main_min,
            max: axis_constraints.main_max,
        };
        let cross = AxisArrangement {
            arrangement: self.cross_axis_arrangement.as_ref(),
            density: self.density,
            direction: axes.cross_direction(self.layout_direction),
            spacing: cross_spacing,
            min: axis_constraints.cross_min,
            max: axis_constraints.cross_max,
        };
        let arranged = arrange_grid(&measured, &track, &main, &cross);

        let alignment_of = |index: usize| -> Alignment { children[index].data.alignment };
        let placements = place_children(
            &packed,
            &measured.sizes,
            alignment_of,
            &arranged,
            axes,
            self.layout_direction,
        );

        let size = axes.size(arranged.main_size, arranged.cross_size);
        tracing::debug!(
            target: "cellgrid::grid",
            orientation = ?self.orientation,
            children = children.len(),
            lines = packed.line_count(),
            cells = cell_sizes.len(),
            width = size.width,
            height = size.height,
            "grid layout pass complete"
        );

        Ok(GridMeasureResult {
            size,
            placements,
            line_count: packed.line_count(),
            cell_sizes,
        })
    }
}

impl fmt::Debug for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridLayout")
            .field("orientation", &self.orientation)
            .field("layout_direction", &self.layout_direction)
            .field("density", &self.density)
            .field("cell_cache", &self.cell_cache)
            .finish_non_exhaustive()
    }
}
