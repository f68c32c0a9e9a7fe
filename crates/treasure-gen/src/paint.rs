//! Paints a [`TreasureMap`] through a backend-agnostic [`Canvas`].

use std::time::Instant;

use crate::color::Rgba;
use crate::map::TreasureMap;
use crate::overlay::{OverlayLayout, Point};
use crate::terrain::{BandTable, Palette};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub rotation_deg: f32,
    pub color: Rgba,
}

/// Drawing surface the painter targets.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba);

    /// Draws `text` centered horizontally on `anchor.x`, baseline at `anchor.y`,
    /// rotated about the anchor.
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);

    /// Stretches the paper texture over `[0, width) x [0, height)` using normal alpha blending.
    fn blend_paper(&mut self, width: i32, height: i32, tint: Rgba);
}

/// Terrain blocks, then marker, then title, then the paper tint.
pub fn paint_map<C: Canvas + ?Sized>(
    canvas: &mut C,
    map: &TreasureMap,
    bands: &BandTable,
    palette: &Palette,
    layout: &OverlayLayout,
) {
    let started = Instant::now();
    let grid = map.grid();
    let bs = grid.block_size() as i32;
    canvas.clear(Rgba::WHITE);
    for cell in grid.cells() {
        let color = palette.color(bands.classify(cell.height));
        canvas.fill_rect(cell.x as i32, cell.y as i32, bs, bs, color);
    }

    let (mx, my) = map.marker();
    canvas.draw_text(
        &layout.marker_glyph,
        Point::new(mx as f32, my as f32),
        &TextStyle {
            size: layout.marker_size,
            rotation_deg: 0.0,
            color: palette.marker,
        },
    );

    let viewport = map.viewport();
    canvas.draw_text(
        &layout.title_text,
        layout.title_anchor(viewport),
        &TextStyle {
            size: layout.title_size,
            rotation_deg: layout.title_rotation_deg,
            color: palette.title,
        },
    );

    canvas.blend_paper(
        viewport.width as i32,
        viewport.height as i32,
        Rgba::WHITE.with_alpha(layout.paper_alpha),
    );
    log::debug!(
        "painted {} blocks in {:.2}ms",
        grid.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
}
