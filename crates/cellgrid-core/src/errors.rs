//! Error types for the cellgrid engine.

use crate::types::Orientation;
use thiserror::Error;

/// Errors raised while configuring or running a grid layout pass.
///
/// Every variant describes a programming error in the host's layout tree, so a
/// pass that hits one is aborted as a whole and never yields partial placements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Fixed grid cell count must be positive, got {count}")]
    InvalidCellCount { count: i32 },

    #[error("Adaptive grid minimum cell size must be positive, got {min_size}dp")]
    InvalidMinCellSize { min_size: f32 },

    #[error("{}", invalid_span_message(.index, .span))]
    InvalidSpan { index: Option<usize>, span: i32 },

    #[error("Density must be positive and finite, got {density}")]
    InvalidDensity { density: f32 },

    #[error("{orientation:?} grid was measured with an unbounded cross axis; cells need a finite extent")]
    UnboundedCrossAxis { orientation: Orientation },

    #[error("Invalid constraints: {reason}")]
    InvalidConstraints { reason: String },

    #[error("Cell sizing strategy produced no cells")]
    NoCells,
}

impl GridError {
    /// Whether this error stems from invalid configuration.
    ///
    /// All current variants do; span overflow is clamped rather than reported.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            GridError::InvalidCellCount { .. }
            | GridError::InvalidMinCellSize { .. }
            | GridError::InvalidSpan { .. }
            | GridError::InvalidDensity { .. }
            | GridError::UnboundedCrossAxis { .. }
            | GridError::InvalidConstraints { .. }
            | GridError::NoCells => true,
        }
    }

    /// Attach the child index to a span error raised without one.
    pub fn with_child_index(self, child: usize) -> Self {
        match self {
            GridError::InvalidSpan { index: None, span } => GridError::InvalidSpan {
                index: Some(child),
                span,
            },
            other => other,
        }
    }
}

fn invalid_span_message(index: &Option<usize>, span: &i32) -> String {
    match index {
        Some(index) => format!("Grid item {index} declared span {span}; span must be positive"),
        None => format!("Grid item span must be positive, got {span}"),
    }
}
