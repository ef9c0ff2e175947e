//! Span-aware grid measurement and arrangement.
//!
//! This crate lays out an ordered list of children into a lazy-list style
//! grid: the cross axis is split into cells, children are packed into lines
//! by span, measured under per-cell constraints, and positioned by pluggable
//! arrangement policies.
//!
//! # Architecture
//!
//! 1. **Cell sizing**: [`GridCells`] splits the cross axis into cells
//! 2. **Packing**: [`pack`] assigns every child a line and a first cell
//! 3. **Measurement**: [`measure_grid`] measures children against their cells
//! 4. **Arrangement**: [`arrange_grid`] offsets lines and cells via [`Arrange`]
//! 5. **Placement**: [`place_children`] aligns each child inside its box
//!
//! [`GridLayout`] runs all of these in one pass.
//!
//! # Example
//!
//! ```ignore
//! use cellgrid_layout::{GridChild, GridLayout, SimpleGridCells};
//! use cellgrid_core::Constraints;
//!
//! let grid = GridLayout::vertical(SimpleGridCells::fixed(3, true)?);
//! let mut children: Vec<GridChild<_>> = nodes.iter_mut().map(GridChild::new).collect();
//! let result = grid.measure(Constraints::loose(300, Constraints::INFINITY), &mut children)?;
//!
//! for placement in &result.placements {
//!     println!("{}: {:?}", placement.index, placement.bounds);
//! }
//! ```

mod arrange;
mod arrangement;
mod axis;
mod cells;
mod grid;
mod item;
mod measure;
mod packer;
mod place;

pub use arrange::{arrange_grid, ArrangedAxis, ArrangedGrid, AxisArrangement, AxisOffsets};
pub use arrangement::{Arrange, Arrangement};
pub use axis::{AxisConstraints, AxisMap};
pub use cells::{equal_cell_sizes, CellSizeCache, CellSizes, GridCells, SimpleGridCells};
pub use grid::{GridConfig, GridLayout, GridMeasureResult};
pub use item::{GridChild, GridItemData, GridItemSpan, GridItemSpanScope, Measurable};
pub use measure::{line_extent, measure_grid, CellTrack, MeasureInput, MeasuredGrid};
pub use packer::{pack, GridLine, PackedGrid, PackedItem};
pub use place::{place_children, Placement};
