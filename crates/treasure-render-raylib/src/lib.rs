//! Raylib-based drawing for the treasure map: canvas, off-screen target, frame export.

use std::path::Path;

use raylib::prelude::*;
use treasure_gen::{Canvas, MapContext, Point, Rgba, TextStyle, TreasureMap, paint_map};

pub mod conv {
    use treasure_gen::{Point, Rgba};

    pub fn rgba_to_rl(c: Rgba) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c.r, c.g, c.b, c.a)
    }

    pub fn rgba_from_rl(c: raylib::prelude::Color) -> Rgba {
        Rgba {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }

    pub fn point_to_rl(p: Point) -> raylib::prelude::Vector2 {
        raylib::prelude::Vector2::new(p.x, p.y)
    }
}

use conv::{point_to_rl, rgba_to_rl};

// Fraction of the measured line height above the baseline. Raylib does not expose ascent.
const BASELINE_RATIO: f32 = 0.8;

// The paper pass leaves the target's alpha below 1 while its RGB is already the
// final composite, so the target is copied with ONE / ONE_MINUS_SRC_ALPHA.
const BLIT_BLEND: BlendMode = BlendMode::BLEND_ALPHA_PREMULTIPLY;

/// [`Canvas`] over any raylib draw handle, with the loaded font and paper texture.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    font: &'a Font,
    paper: &'a Texture2D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D, font: &'a Font, paper: &'a Texture2D) -> Self {
        Self { d, font, paper }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn clear(&mut self, color: Rgba) {
        self.d.clear_background(rgba_to_rl(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.d.draw_rectangle(x, y, w, h, rgba_to_rl(color));
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let size = style.size.max(1.0);
        let spacing = size / self.font.base_size().max(1) as f32;
        let extent = self.font.measure_text(text, size, spacing);
        let origin = Vector2::new(extent.x * 0.5, extent.y * BASELINE_RATIO);
        self.d.draw_text_pro(
            self.font,
            text,
            point_to_rl(anchor),
            origin,
            style.rotation_deg,
            size,
            spacing,
            rgba_to_rl(style.color),
        );
    }

    fn blend_paper(&mut self, width: i32, height: i32, tint: Rgba) {
        let src = Rectangle::new(
            0.0,
            0.0,
            self.paper.width() as f32,
            self.paper.height() as f32,
        );
        let dest = Rectangle::new(0.0, 0.0, width as f32, height as f32);
        self.d.draw_texture_pro(
            self.paper,
            src,
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            rgba_to_rl(tint),
        );
    }
}

/// Off-screen texture holding the painted map; repainted only when the map changes.
#[derive(Default)]
pub struct MapTarget {
    rt: Option<RenderTexture2D>,
}

impl MapTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<(i32, i32)> {
        self.rt.as_ref().map(|rt| (rt.width(), rt.height()))
    }

    /// (Re)allocates the texture when the requested size differs.
    pub fn ensure_size(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        width: u32,
        height: u32,
    ) -> bool {
        if self.size() == Some((width as i32, height as i32)) {
            return true;
        }
        match rl.load_render_texture(thread, width, height) {
            Ok(rt) => {
                log::debug!("allocated {}x{} map target", width, height);
                self.rt = Some(rt);
                true
            }
            Err(e) => {
                log::warn!("Failed to allocate {}x{} map target: {}", width, height, e);
                self.rt = None;
                false
            }
        }
    }

    pub fn paint(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        map: &TreasureMap,
        ctx: &MapContext,
        font: &Font,
        paper: &Texture2D,
    ) {
        let vp = map.viewport();
        if !self.ensure_size(rl, thread, vp.width, vp.height) {
            return;
        }
        let Some(rt) = self.rt.as_mut() else {
            return;
        };
        let mut td = rl.begin_texture_mode(thread, rt);
        let mut canvas = RaylibCanvas::new(&mut td, font, paper);
        paint_map(&mut canvas, map, &ctx.bands, &ctx.palette, &ctx.layout);
    }

    /// Draws the painted map at the window origin.
    pub fn blit<D: RaylibDraw>(&self, d: &mut D) {
        let Some(ref rt) = self.rt else {
            return;
        };
        let tex = rt.texture();
        // Render textures are stored bottom-up.
        let src = Rectangle::new(0.0, 0.0, tex.width() as f32, -(tex.height() as f32));
        let dest = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
        let mut b = d.begin_blend_mode(BLIT_BLEND);
        b.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }
}

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Encode(image::ImageError),
    EmptyFrame,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "export io error: {}", e),
            ExportError::Encode(e) => write!(f, "export encode error: {}", e),
            ExportError::EmptyFrame => write!(f, "frame buffer is empty"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Encode(e) => Some(e),
            ExportError::EmptyFrame => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Encode(e)
    }
}

/// Packs RGBA pixels into an opaque RGB buffer, dropping alpha.
pub fn frame_to_rgb(width: u32, height: u32, pixels: &[Rgba]) -> Result<image::RgbImage, ExportError> {
    let mut raw = Vec::with_capacity(pixels.len() * 3);
    for p in pixels {
        raw.extend_from_slice(&[p.r, p.g, p.b]);
    }
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyFrame);
    }
    image::RgbImage::from_raw(width, height, raw).ok_or(ExportError::EmptyFrame)
}

/// Reads back the last presented frame and writes it to `path`; the extension picks the encoder.
pub fn save_screen(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<(), ExportError> {
    let shot = rl.load_image_from_screen(thread);
    let (w, h) = (shot.width().max(0) as u32, shot.height().max(0) as u32);
    let pixels: Vec<Rgba> = shot
        .get_image_data()
        .iter()
        .map(|c| conv::rgba_from_rl(*c))
        .collect();
    let frame = frame_to_rgb(w, h, &pixels)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    frame.save(path)?;
    log::info!("Saved {}x{} frame to {:?}", w, h, path);
    Ok(())
}
