//! Grid layout benchmarks.

use cellgrid_core::{Constraints, Dp, Size};
use cellgrid_layout::{Arrangement, GridChild, GridItemData, GridLayout, Measurable, SimpleGridCells};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct Leaf(Size);

impl Measurable for Leaf {
    fn measure(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(self.0)
    }
}

fn leaves(count: usize) -> Vec<GridChild<Leaf>> {
    (0..count)
        .map(|index| {
            let span = (index % 3) as i32 + 1;
            let data = GridItemData::new().with_span(span).unwrap();
            GridChild::with_data(Leaf(Size::new(40, 24 + (index % 5) as i32)), data)
        })
        .collect()
}

fn layout_fixed(c: &mut Criterion) {
    let grid = GridLayout::vertical(SimpleGridCells::fixed(4, true).unwrap());
    let mut children = leaves(200);
    c.bench_function("layout_fixed_200", |b| {
        b.iter(|| grid.measure(black_box(Constraints::loose(400, Constraints::INFINITY)), &mut children))
    });
}

fn layout_adaptive(c: &mut Criterion) {
    let grid = GridLayout::vertical(SimpleGridCells::adaptive(Dp(48.0), true).unwrap())
        .with_main_axis_arrangement(Arrangement::spaced_by(Dp(8.0)))
        .with_cross_axis_arrangement(Arrangement::spaced_by(Dp(8.0)));
    let mut children = leaves(1000);
    c.bench_function("layout_adaptive_1000", |b| {
        b.iter(|| grid.measure(black_box(Constraints::loose(1080, Constraints::INFINITY)), &mut children))
    });
}

criterion_group!(benches, layout_fixed, layout_adaptive);
criterion_main!(benches);
