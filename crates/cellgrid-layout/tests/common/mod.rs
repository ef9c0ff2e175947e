//! Shared fixtures for grid integration tests.

#![allow(dead_code)]

use cellgrid_core::{Alignment, Constraints, Size};
use cellgrid_layout::{GridChild, GridItemData, Measurable};

/// A leaf that prefers a fixed size and otherwise obeys its constraints.
#[derive(Debug, Clone)]
pub struct FixedBox {
    pub preferred: Size,
    pub measured_with: Vec<Constraints>,
}

impl FixedBox {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            preferred: Size::new(width, height),
            measured_with: Vec::new(),
        }
    }
}

impl Measurable for FixedBox {
    fn measure(&mut self, constraints: Constraints) -> Size {
        self.measured_with.push(constraints);
        constraints.constrain(self.preferred)
    }
}

/// `count` identical boxes with default grid attributes.
pub fn boxes(count: usize, width: i32, height: i32) -> Vec<GridChild<FixedBox>> {
    (0..count)
        .map(|_| GridChild::new(FixedBox::new(width, height)))
        .collect()
}

/// Boxes of one size carrying the given fixed spans.
pub fn spanned(spans: &[i32], width: i32, height: i32) -> Vec<GridChild<FixedBox>> {
    spans
        .iter()
        .map(|&span| {
            GridChild::with_data(
                FixedBox::new(width, height),
                GridItemData::new().with_span(span).unwrap(),
            )
        })
        .collect()
}

/// A single box with an alignment inside its cell.
pub fn aligned(width: i32, height: i32, alignment: Alignment) -> GridChild<FixedBox> {
    GridChild::with_data(
        FixedBox::new(width, height),
        GridItemData::new().with_alignment(alignment),
    )
}
