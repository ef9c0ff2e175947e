//! Arrangement policies: turning a list of item sizes into offsets along one axis.

use cellgrid_core::{round_px, AxisAlignment, Density, Dp, LayoutDirection};

/// Positions items along one axis.
///
/// Implementations write one offset per entry of `sizes` into `out`. Offsets
/// must not make items overlap and must follow `direction` (only ever `Rtl`
/// for a physically horizontal axis).
pub trait Arrange {
    /// Fixed space inserted between neighbouring items, in pixels.
    fn spacing(&self, _density: Density) -> i32 {
        0
    }

    fn arrange(
        &self,
        density: Density,
        total_size: i32,
        sizes: &[i32],
        direction: LayoutDirection,
        out: &mut [i32],
    );
}

impl<F> Arrange for F
where
    F: Fn(i32, &[i32], LayoutDirection, &mut [i32]),
{
    fn arrange(
        &self,
        _density: Density,
        total_size: i32,
        sizes: &[i32],
        direction: LayoutDirection,
        out: &mut [i32],
    ) {
        self(total_size, sizes, direction, out)
    }
}

/// The built-in arrangement policies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    /// Pack items at the start
    #[default]
    Start,
    /// Pack items at the end
    End,
    /// Center items
    Center,
    /// Distribute items with equal space between
    SpaceBetween,
    /// Distribute items with equal space around
    SpaceAround,
    /// Distribute items with equal space evenly
    SpaceEvenly,
    /// Fixed space between items, with the group aligned in any leftover space
    SpacedBy { space: Dp, alignment: AxisAlignment },
}

impl Arrangement {
    pub fn spaced_by(space: Dp) -> Self {
        Arrangement::SpacedBy {
            space,
            alignment: AxisAlignment::Start,
        }
    }

    pub fn spaced_aligned(space: Dp, alignment: AxisAlignment) -> Self {
        Arrangement::SpacedBy { space, alignment }
    }
}

impl Arrange for Arrangement {
    fn spacing(&self, density: Density) -> i32 {
        match *self {
            Arrangement::SpacedBy { space, .. } => density.round_to_px(space).max(0),
            _ => 0,
        }
    }

    fn arrange(
        &self,
        density: Density,
        total_size: i32,
        sizes: &[i32],
        direction: LayoutDirection,
        out: &mut [i32],
    ) {
        let rtl = direction == LayoutDirection::Rtl;
        match *self {
            Arrangement::Start if rtl => place_end(total_size, sizes, out, true),
            Arrangement::Start => place_start(sizes, out, false),
            Arrangement::End if rtl => place_start(sizes, out, true),
            Arrangement::End => place_end(total_size, sizes, out, false),
            Arrangement::Center => place_center(total_size, sizes, out, rtl),
            Arrangement::SpaceBetween => place_space_between(total_size, sizes, out, rtl),
            Arrangement::SpaceAround => place_space_around(total_size, sizes, out, rtl),
            Arrangement::SpaceEvenly => place_space_evenly(total_size, sizes, out, rtl),
            Arrangement::SpacedBy { alignment, .. } => place_spaced(
                total_size,
                sizes,
                out,
                self.spacing(density),
                alignment,
                direction,
            ),
        }
    }
}

fn for_each_index(len: usize, reverse: bool, mut f: impl FnMut(usize)) {
    if reverse {
        (0..len).rev().for_each(&mut f);
    } else {
        (0..len).for_each(f);
    }
}

/// Sum of `sizes`, saturating at `i32::MAX`.
fn consumed(sizes: &[i32]) -> i32 {
    sizes.iter().fold(0i32, |total, &size| total.saturating_add(size))
}

fn place_start(sizes: &[i32], out: &mut [i32], reverse: bool) {
    let mut current = 0i32;
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = current;
        current = current.saturating_add(sizes[index]);
    });
}

fn place_end(total_size: i32, sizes: &[i32], out: &mut [i32], reverse: bool) {
    let mut current = total_size.saturating_sub(consumed(sizes));
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = current;
        current = current.saturating_add(sizes[index]);
    });
}

fn place_center(total_size: i32, sizes: &[i32], out: &mut [i32], reverse: bool) {
    let mut current = total_size.saturating_sub(consumed(sizes)) as f32 / 2.0;
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = round_px(current);
        current += sizes[index] as f32;
    });
}

fn place_space_evenly(total_size: i32, sizes: &[i32], out: &mut [i32], reverse: bool) {
    let gap = total_size.saturating_sub(consumed(sizes)) as f32 / (sizes.len() + 1) as f32;
    let mut current = gap;
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = round_px(current);
        current += sizes[index] as f32 + gap;
    });
}

fn place_space_between(total_size: i32, sizes: &[i32], out: &mut [i32], reverse: bool) {
    if sizes.is_empty() {
        return;
    }
    let gaps = (sizes.len() - 1).max(1);
    let gap = total_size.saturating_sub(consumed(sizes)) as f32 / gaps as f32;
    // A lone item sits at the end edge when mirrored.
    let mut current = if reverse && sizes.len() == 1 { gap } else { 0.0 };
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = round_px(current);
        current += sizes[index] as f32 + gap;
    });
}

fn place_space_around(total_size: i32, sizes: &[i32], out: &mut [i32], reverse: bool) {
    let gap = if sizes.is_empty() {
        0.0
    } else {
        total_size.saturating_sub(consumed(sizes)) as f32 / sizes.len() as f32
    };
    let mut current = gap / 2.0;
    for_each_index(sizes.len(), reverse, |index| {
        out[index] = round_px(current);
        current += sizes[index] as f32 + gap;
    });
}

fn place_spaced(
    total_size: i32,
    sizes: &[i32],
    out: &mut [i32],
    space: i32,
    alignment: AxisAlignment,
    direction: LayoutDirection,
) {
    if sizes.is_empty() {
        return;
    }

    let mut occupied = 0;
    let mut last_space = 0;
    for_each_index(sizes.len(), direction == LayoutDirection::Rtl, |index| {
        let size = sizes[index];
        out[index] = occupied.min(total_size.saturating_sub(size));
        last_space = space.min(total_size.saturating_sub(out[index]).saturating_sub(size));
        occupied = out[index].saturating_add(size).saturating_add(last_space);
    });
    occupied -= last_space;

    if occupied < total_size {
        let group_position = alignment.align(occupied, total_size, direction);
        for offset in out.iter_mut().take(sizes.len()) {
            *offset = offset.saturating_add(group_position);
        }
    }
}
