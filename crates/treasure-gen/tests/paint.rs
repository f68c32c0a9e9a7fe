use treasure_gen::{
    BandTable, Canvas, MapContext, Palette, Point, Rgba, Terrain, TextStyle, Viewport, paint_map,
};

#[derive(Debug, PartialEq)]
enum Op {
    Clear(Rgba),
    Rect(i32, i32, i32, i32, Rgba),
    Text(String, Point, TextStyle),
    Paper(i32, i32, Rgba),
}

#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.ops.push(Op::Clear(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.ops.push(Op::Rect(x, y, w, h, color));
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.ops.push(Op::Text(text.to_string(), anchor, *style));
    }

    fn blend_paper(&mut self, width: i32, height: i32, tint: Rgba) {
        self.ops.push(Op::Paper(width, height, tint));
    }
}

fn painted(viewport: Viewport, seed: i32) -> (MapContext, Vec<Op>, treasure_gen::TreasureMap) {
    let ctx = MapContext::default();
    let map = ctx.generate(viewport, seed);
    let mut canvas = RecordingCanvas::default();
    paint_map(&mut canvas, &map, &ctx.bands, &ctx.palette, &ctx.layout);
    (ctx, canvas.ops, map)
}

#[test]
fn draw_order_is_blocks_marker_title_paper() {
    let (ctx, ops, map) = painted(Viewport::new(800, 600), 42);
    assert_eq!(ops.len(), 1 + 160 * 120 + 3);
    assert_eq!(ops[0], Op::Clear(Rgba::WHITE));
    assert!(ops[1..=160 * 120].iter().all(|op| matches!(op, Op::Rect(..))));

    let (mx, my) = map.marker();
    match &ops[ops.len() - 3] {
        Op::Text(text, anchor, style) => {
            assert_eq!(text, "x");
            assert_eq!(*anchor, Point::new(mx as f32, my as f32));
            assert_eq!(style.color, ctx.palette.marker);
            assert_eq!(style.size, 40.0);
        }
        other => panic!("expected marker, got {other:?}"),
    }
    match &ops[ops.len() - 2] {
        Op::Text(text, _, style) => {
            assert_eq!(text, "pixel TREASURE  MAP");
            assert_eq!(style.rotation_deg, -2.0);
            assert_eq!(style.color, ctx.palette.title);
        }
        other => panic!("expected title, got {other:?}"),
    }
    assert_eq!(
        ops[ops.len() - 1],
        Op::Paper(800, 600, Rgba::rgb(255, 255, 255).with_alpha(75))
    );
}

#[test]
fn block_colors_follow_band_table() {
    let (ctx, ops, map) = painted(Viewport::new(120, 90), 3);
    let rects: Vec<&Op> = ops.iter().filter(|op| matches!(op, Op::Rect(..))).collect();
    assert_eq!(rects.len(), map.grid().len());
    for (cell, op) in map.grid().cells().zip(rects) {
        let expected = ctx.palette.color(ctx.bands.classify(cell.height));
        assert_eq!(
            *op,
            Op::Rect(cell.x as i32, cell.y as i32, 5, 5, expected)
        );
    }
}

#[test]
fn custom_palette_is_used_per_terrain() {
    let mut palette = Palette::default();
    for t in Terrain::ALL {
        palette.set_color(t, Rgba::rgb(1, 2, 3));
    }
    let ctx = MapContext::default();
    let map = ctx.generate(Viewport::new(50, 50), 9);
    let mut canvas = RecordingCanvas::default();
    paint_map(&mut canvas, &map, &BandTable::default(), &palette, &ctx.layout);
    for op in &canvas.ops {
        if let Op::Rect(.., c) = op {
            assert_eq!(*c, Rgba::rgb(1, 2, 3));
        }
    }
}
