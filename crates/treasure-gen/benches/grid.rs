use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use treasure_gen::{Canvas, GridParams, HeightGrid, MapContext, NoiseParams, Point, Rgba, TextStyle, Viewport, paint_map};

struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _color: Rgba) {}
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        black_box((x, y, w, h, color));
    }
    fn draw_text(&mut self, _text: &str, _anchor: Point, _style: &TextStyle) {}
    fn blend_paper(&mut self, _width: i32, _height: i32, _tint: Rgba) {}
}

fn bench_height_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("height_grid");
    let noise = NoiseParams::default();
    for (label, block) in [("block5", 5u32), ("block2", 2u32)] {
        let params = GridParams::new(block, 1.0 / 150.0).unwrap();
        group.bench_function(format!("1920x1080_{label}"), |b| {
            b.iter(|| {
                let grid = HeightGrid::from_seed(
                    Viewport::new(1920, 1080),
                    &params,
                    &noise,
                    black_box(42),
                );
                black_box(grid.len())
            })
        });
    }
    group.finish();
}

fn bench_paint(c: &mut Criterion) {
    let ctx = MapContext::default();
    let map = ctx.generate(Viewport::new(1920, 1080), 42);
    c.bench_function("paint_1920x1080_block5", |b| {
        b.iter(|| paint_map(&mut NullCanvas, &map, &ctx.bands, &ctx.palette, &ctx.layout))
    });
}

criterion_group!(benches, bench_height_grid, bench_paint);
criterion_main!(benches);
