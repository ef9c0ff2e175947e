//! Cross-axis cell sizing strategies.

use std::cell::RefCell;

use cellgrid_core::{Density, Dp, GridError};
use smallvec::SmallVec;

/// Cross-axis cell sizes, in order from the start edge.
pub type CellSizes = SmallVec<[i32; 8]>;

/// Strategy that splits the available cross-axis space into cells.
pub trait GridCells {
    /// Compute the size of every cell for `available_size` pixels of cross
    /// axis with `spacing` pixels between neighbouring cells.
    fn calculate_cell_sizes(&self, density: Density, available_size: i32, spacing: i32) -> CellSizes;

    /// Whether children are stretched to the full cross size of their span.
    fn fill_cell_size(&self) -> bool {
        true
    }

    /// Reject invalid parameters before a layout pass starts.
    fn validate(&self) -> Result<(), GridError> {
        Ok(())
    }
}

/// The built-in cell strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimpleGridCells {
    /// A fixed number of equally sized cells
    Fixed { count: i32, fill: bool },
    /// As many cells as fit while each stays at least `min_size`
    Adaptive { min_size: Dp, fill: bool },
}

impl SimpleGridCells {
    /// `count` equal cells; fails when `count` is not positive.
    pub fn fixed(count: i32, fill: bool) -> Result<Self, GridError> {
        let cells = SimpleGridCells::Fixed { count, fill };
        cells.validate()?;
        Ok(cells)
    }

    /// Cells of at least `min_size`; fails when `min_size` is not positive.
    pub fn adaptive(min_size: Dp, fill: bool) -> Result<Self, GridError> {
        let cells = SimpleGridCells::Adaptive { min_size, fill };
        cells.validate()?;
        Ok(cells)
    }
}

impl GridCells for SimpleGridCells {
    fn calculate_cell_sizes(&self, density: Density, available_size: i32, spacing: i32) -> CellSizes {
        match *self {
            SimpleGridCells::Fixed { count, .. } => {
                equal_cell_sizes(count.max(1) as usize, available_size, spacing)
            }
            SimpleGridCells::Adaptive { min_size, .. } => {
                let min_px = i64::from(density.round_to_px(min_size).max(1));
                let available = i64::from(available_size.max(0));
                let spacing_px = i64::from(spacing.max(0));
                let count = ((available + spacing_px) / (min_px + spacing_px)).max(1);
                equal_cell_sizes(count as usize, available_size, spacing)
            }
        }
    }

    fn fill_cell_size(&self) -> bool {
        match *self {
            SimpleGridCells::Fixed { fill, .. } | SimpleGridCells::Adaptive { fill, .. } => fill,
        }
    }

    fn validate(&self) -> Result<(), GridError> {
        match *self {
            SimpleGridCells::Fixed { count, .. } if count <= 0 => {
                Err(GridError::InvalidCellCount { count })
            }
            SimpleGridCells::Adaptive { min_size, .. } if !(min_size.0 > 0.0 && min_size.0.is_finite()) => {
                Err(GridError::InvalidMinCellSize { min_size: min_size.0 })
            }
            _ => Ok(()),
        }
    }
}

/// Split `available_size` into `count` cells separated by `spacing`.
///
/// Cells are equal except that the first one takes an extra pixel when the
/// division leaves a remainder.
pub fn equal_cell_sizes(count: usize, available_size: i32, spacing: i32) -> CellSizes {
    if count == 0 {
        return CellSizes::new();
    }
    let total_spacing = i64::from(spacing.max(0)) * (count as i64 - 1);
    let basis = (i64::from(available_size.max(0)) - total_spacing).max(0);
    let cell = basis / count as i64;
    let remainder = basis % count as i64;

    (0..count)
        .map(|index| {
            let extra = if index == 0 && remainder > 0 { 1 } else { 0 };
            (cell + extra) as i32
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct CachedCells {
    available_size: i32,
    spacing: i32,
    density: Density,
    sizes: CellSizes,
}

/// Memo of the most recent cell computation for an unchanged strategy.
///
/// Owners must call [`CellSizeCache::clear`] whenever the strategy changes.
#[derive(Debug, Default)]
pub struct CellSizeCache {
    last: RefCell<Option<CachedCells>>,
}

impl CellSizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_calculate(
        &self,
        cells: &dyn GridCells,
        density: Density,
        available_size: i32,
        spacing: i32,
    ) -> CellSizes {
        if let Some(cached) = self.last.borrow().as_ref() {
            if cached.available_size == available_size
                && cached.spacing == spacing
                && cached.density == density
            {
                return cached.sizes.clone();
            }
        }

        let sizes = cells.calculate_cell_sizes(density, available_size, spacing);
        *self.last.borrow_mut() = Some(CachedCells {
            available_size,
            spacing,
            density,
            sizes: sizes.clone(),
        });
        sizes
    }

    pub fn clear(&self) {
        self.last.borrow_mut().take();
    }

    pub fn is_empty(&self) -> bool {
        self.last.borrow().is_none()
    }
}
