//! Per-child grid attributes and the host measurement contract.

use std::fmt;
use std::num::NonZeroUsize;

use cellgrid_core::{Alignment, Constraints, GridError, Size};

/// Something the host can measure under constraints.
pub trait Measurable {
    /// Measure under `constraints`. The returned size should satisfy them.
    fn measure(&mut self, constraints: Constraints) -> Size;
}

impl<M: Measurable + ?Sized> Measurable for &mut M {
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

/// Packing state visible to a span callback while its child is being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridItemSpanScope {
    /// Total number of cross-axis cells in a line
    pub max_line_span: usize,
    /// Cells still free in the line the child would join
    pub max_current_line_span: usize,
}

type SpanFn = dyn Fn(&GridItemSpanScope) -> i32;

/// How many cross-axis cells a child occupies.
pub enum GridItemSpan {
    Fixed(NonZeroUsize),
    Computed(Box<SpanFn>),
}

impl GridItemSpan {
    /// A fixed span; fails when `span` is not positive.
    pub fn fixed(span: i32) -> Result<Self, GridError> {
        usize::try_from(span)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(GridItemSpan::Fixed)
            .ok_or(GridError::InvalidSpan { index: None, span })
    }

    /// A span chosen from the packing state at the time the child is placed.
    pub fn computed(span: impl Fn(&GridItemSpanScope) -> i32 + 'static) -> Self {
        GridItemSpan::Computed(Box::new(span))
    }

    /// Resolve the requested span, before capping to the line size.
    pub fn resolve(&self, scope: &GridItemSpanScope) -> Result<NonZeroUsize, GridError> {
        match self {
            GridItemSpan::Fixed(span) => Ok(*span),
            GridItemSpan::Computed(span) => {
                let requested = span(scope);
                usize::try_from(requested)
                    .ok()
                    .and_then(NonZeroUsize::new)
                    .ok_or(GridError::InvalidSpan {
                        index: None,
                        span: requested,
                    })
            }
        }
    }
}

impl Default for GridItemSpan {
    fn default() -> Self {
        GridItemSpan::Fixed(NonZeroUsize::MIN)
    }
}

impl fmt::Debug for GridItemSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridItemSpan::Fixed(span) => f.debug_tuple("Fixed").field(span).finish(),
            GridItemSpan::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Grid attributes attached to one child.
#[derive(Debug, Default)]
pub struct GridItemData {
    pub span: GridItemSpan,
    pub alignment: Alignment,
}

impl GridItemData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed span; fails when `span` is not positive.
    pub fn with_span(mut self, span: i32) -> Result<Self, GridError> {
        self.span = GridItemSpan::fixed(span)?;
        Ok(self)
    }

    /// Set a span computed from the packing state.
    pub fn with_span_fn(mut self, span: impl Fn(&GridItemSpanScope) -> i32 + 'static) -> Self {
        self.span = GridItemSpan::computed(span);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A child handed to the grid for one layout pass.
#[derive(Debug)]
pub struct GridChild<M> {
    pub measurable: M,
    pub data: GridItemData,
}

impl<M: Measurable> GridChild<M> {
    pub fn new(measurable: M) -> Self {
        Self {
            measurable,
            data: GridItemData::default(),
        }
    }

    pub fn with_data(measurable: M, data: GridItemData) -> Self {
        Self { measurable, data }
    }
}
