//! Core value types for grid layout.

use glam::IVec2;

use crate::errors::GridError;

/// Round a pixel value, ties toward positive infinity.
pub fn round_px(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Measurement constraints for a child, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    /// Sentinel for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    pub const fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints with zero minimums and the given maximums.
    pub const fn loose(max_width: i32, max_height: i32) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    /// Constraints with zero minimums and no maximums.
    pub const fn unbounded() -> Self {
        Self::new(0, Self::INFINITY, 0, Self::INFINITY)
    }

    /// Check that the constraints describe a non-empty range of sizes.
    pub fn validate(&self) -> Result<(), GridError> {
        let invalid = |reason: String| Err(GridError::InvalidConstraints { reason });

        if self.min_width < 0 || self.min_height < 0 {
            return invalid(format!(
                "minimums must be non-negative (min_width = {}, min_height = {})",
                self.min_width, self.min_height
            ));
        }
        if self.min_width == Self::INFINITY || self.min_height == Self::INFINITY {
            return invalid("minimums must be finite".to_string());
        }
        if self.min_width > self.max_width {
            return invalid(format!(
                "min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            ));
        }
        if self.min_height > self.max_height {
            return invalid(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            ));
        }
        Ok(())
    }

    pub fn constrain_width(&self, width: i32) -> i32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: i32) -> i32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Coerce a size into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(self.constrain_width(size.width), self.constrain_height(size.height))
    }

    /// Whether a size satisfies these constraints.
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        (self.min_width..=self.max_width).contains(&size.width)
            && (self.min_height..=self.max_height).contains(&size.height)
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Position relative to the grid origin
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_position_size(position: IVec2, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width), saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height), saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Bounds::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Whether the two rectangles share any area.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Which physical axis the grid's lines repeat along.
///
/// A `Vertical` grid stacks rows top to bottom and splits the width into
/// columns; a `Horizontal` grid stacks columns left to right and splits the
/// height into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Reading direction used to mirror horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Density-independent length.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f32);

/// Pixel density used to resolve [`Dp`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density {
    /// Pixels per dp
    pub density: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Reject densities that cannot resolve dp lengths to pixels.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.density > 0.0 && self.density.is_finite() {
            Ok(())
        } else {
            Err(GridError::InvalidDensity {
                density: self.density,
            })
        }
    }

    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.0 * self.density
    }

    /// Resolve a dp value to whole pixels. Infinite lengths map to [`Constraints::INFINITY`].
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        let px = self.to_px(dp);
        if px.is_infinite() {
            Constraints::INFINITY
        } else {
            round_px(px)
        }
    }
}

/// One-dimensional anchor within a span of space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisAlignment {
    #[default]
    Start,
    Center,
    End,
}

impl AxisAlignment {
    fn bias(self) -> f32 {
        match self {
            AxisAlignment::Start => -1.0,
            AxisAlignment::Center => 0.0,
            AxisAlignment::End => 1.0,
        }
    }

    /// Offset of an item of `size` placed within `space`.
    ///
    /// `direction` mirrors start and end; pass [`LayoutDirection::Ltr`] for
    /// vertical axes.
    pub fn align(self, size: i32, space: i32, direction: LayoutDirection) -> i32 {
        align_biased(self.bias(), size, space, direction)
    }
}

fn align_biased(bias: f32, size: i32, space: i32, direction: LayoutDirection) -> i32 {
    let center = (space - size) as f32 / 2.0;
    let bias = match direction {
        LayoutDirection::Ltr => bias,
        LayoutDirection::Rtl => -bias,
    };
    round_px(center * (1.0 + bias))
}

/// Two-dimensional anchor of a child within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl Alignment {
    /// Split into (horizontal, vertical) anchors.
    pub fn axes(self) -> (AxisAlignment, AxisAlignment) {
        use AxisAlignment::{Center, End, Start};
        match self {
            Alignment::TopStart => (Start, Start),
            Alignment::TopCenter => (Center, Start),
            Alignment::TopEnd => (End, Start),
            Alignment::CenterStart => (Start, Center),
            Alignment::Center => (Center, Center),
            Alignment::CenterEnd => (End, Center),
            Alignment::BottomStart => (Start, End),
            Alignment::BottomCenter => (Center, End),
            Alignment::BottomEnd => (End, End),
        }
    }

    /// Offset of an item of `size` within `space`. Only the horizontal
    /// component follows `direction`.
    pub fn align(self, size: Size, space: Size, direction: LayoutDirection) -> IVec2 {
        let (horizontal, vertical) = self.axes();
        IVec2::new(
            horizontal.align(size.width, space.width, direction),
            vertical.align(size.height, space.height, LayoutDirection::Ltr),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_px_ties_up() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(2.49), 2);
    }

    #[test]
    fn test_constraints_validate() {
        assert!(Constraints::loose(100, 100).validate().is_ok());
        assert!(Constraints::unbounded().validate().is_ok());
        assert!(Constraints::new(10, 5, 0, 0).validate().is_err());
        assert!(Constraints::new(-1, 5, 0, 0).validate().is_err());
        assert!(Constraints::new(0, 5, Constraints::INFINITY, Constraints::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_constraints_constrain() {
        let constraints = Constraints::new(10, 50, 0, 20);
        assert_eq!(constraints.constrain(Size::new(5, 30)), Size::new(10, 20));
        assert!(constraints.is_satisfied_by(Size::new(10, 20)));
        assert!(!constraints.is_satisfied_by(Size::new(51, 20)));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0, 0, 10, 10);
        let b = Bounds::new(20, 5, 10, 10);
        assert_eq!(a.union(&b), Bounds::new(0, 0, 30, 15));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Bounds::new(5, 5, 10, 10)));
    }

    #[test]
    fn test_density_validate() {
        assert!(Density::default().validate().is_ok());
        assert!(Density::new(2.75).validate().is_ok());
        assert_eq!(
            Density::new(0.0).validate(),
            Err(GridError::InvalidDensity { density: 0.0 })
        );
        assert!(Density::new(-1.0).validate().is_err());
        assert!(Density::new(f32::NAN).validate().is_err());
        assert!(Density::new(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_density_round_to_px() {
        let density = Density::new(2.0);
        assert_eq!(density.round_to_px(Dp(4.25)), 9);
        assert_eq!(density.round_to_px(Dp(f32::INFINITY)), Constraints::INFINITY);
    }

    #[test]
    fn test_center_alignment() {
        let offset = Alignment::Center.align(Size::new(20, 20), Size::new(30, 30), LayoutDirection::Ltr);
        assert_eq!(offset, IVec2::new(5, 5));
    }

    #[test]
    fn test_alignment_mirrors_horizontally_in_rtl() {
        let size = Size::new(20, 20);
        let space = Size::new(30, 30);
        assert_eq!(Alignment::TopStart.align(size, space, LayoutDirection::Rtl), IVec2::new(10, 0));
        assert_eq!(Alignment::BottomEnd.align(size, space, LayoutDirection::Rtl), IVec2::new(0, 10));
        assert_eq!(Alignment::BottomEnd.align(size, space, LayoutDirection::Ltr), IVec2::new(10, 10));
    }
}
