//! Orientation-independent axis handling.
//!
//! The engine works in terms of a main axis (along which lines repeat) and a
//! cross axis (split into cells). [`AxisMap`] converts between those and the
//! physical x/y axes so one implementation serves both grid orientations.

use cellgrid_core::{Constraints, LayoutDirection, Orientation, Size};
use glam::IVec2;

/// Maps main/cross quantities onto physical axes for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    orientation: Orientation,
}

impl AxisMap {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn main(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    pub fn cross(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    pub fn size(&self, main: i32, cross: i32) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    pub fn offset(&self, main: i32, cross: i32) -> IVec2 {
        match self.orientation {
            Orientation::Horizontal => IVec2::new(main, cross),
            Orientation::Vertical => IVec2::new(cross, main),
        }
    }

    /// Layout direction to hand to the main-axis arrangement.
    ///
    /// Only the physically horizontal axis is mirrored.
    pub fn main_direction(&self, direction: LayoutDirection) -> LayoutDirection {
        match self.orientation {
            Orientation::Horizontal => direction,
            Orientation::Vertical => LayoutDirection::Ltr,
        }
    }

    /// Layout direction to hand to the cross-axis arrangement.
    pub fn cross_direction(&self, direction: LayoutDirection) -> LayoutDirection {
        match self.orientation {
            Orientation::Horizontal => LayoutDirection::Ltr,
            Orientation::Vertical => direction,
        }
    }
}

/// [`Constraints`] expressed along the main and cross axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConstraints {
    pub main_min: i32,
    pub main_max: i32,
    pub cross_min: i32,
    pub cross_max: i32,
}

impl AxisConstraints {
    pub fn new(main_min: i32, main_max: i32, cross_min: i32, cross_max: i32) -> Self {
        Self {
            main_min,
            main_max,
            cross_min,
            cross_max,
        }
    }

    pub fn from_constraints(constraints: Constraints, axes: AxisMap) -> Self {
        match axes.orientation() {
            Orientation::Horizontal => Self::new(
                constraints.min_width,
                constraints.max_width,
                constraints.min_height,
                constraints.max_height,
            ),
            Orientation::Vertical => Self::new(
                constraints.min_height,
                constraints.max_height,
                constraints.min_width,
                constraints.max_width,
            ),
        }
    }

    pub fn to_constraints(self, axes: AxisMap) -> Constraints {
        match axes.orientation() {
            Orientation::Horizontal => {
                Constraints::new(self.main_min, self.main_max, self.cross_min, self.cross_max)
            }
            Orientation::Vertical => {
                Constraints::new(self.cross_min, self.cross_max, self.main_min, self.main_max)
            }
        }
    }

    pub fn has_bounded_main(&self) -> bool {
        self.main_max != Constraints::INFINITY
    }

    pub fn has_bounded_cross(&self) -> bool {
        self.cross_max != Constraints::INFINITY
    }

    pub fn constrain_main(&self, main: i32) -> i32 {
        main.clamp(self.main_min, self.main_max)
    }

    pub fn constrain_cross(&self, cross: i32) -> i32 {
        cross.clamp(self.cross_min, self.cross_max)
    }
}
