use rand::Rng;

use crate::grid::Viewport;
use crate::snap::snap_random;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotates about the canvas origin; positive degrees turn clockwise on a y-down canvas.
    pub fn rotated(self, degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }
}

/// Text and placement of the title, marker and paper blend.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    pub title_text: String,
    pub title_size: f32,
    pub title_rotation_deg: f32,
    pub marker_glyph: String,
    pub marker_size: f32,
    /// Margin around the marker area, in blocks.
    pub marker_margin_blocks: u32,
    pub paper_alpha: u8,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            title_text: "pixel TREASURE  MAP".to_string(),
            title_size: 50.0,
            title_rotation_deg: -2.0,
            marker_glyph: "x".to_string(),
            marker_size: 40.0,
            marker_margin_blocks: 10,
            paper_alpha: 75,
        }
    }
}

impl OverlayLayout {
    /// Unrotated title anchor: horizontally centered, a sixth of the way down.
    pub fn title_band(viewport: Viewport) -> f32 {
        viewport.height as f32 / 6.0
    }

    /// Title anchor after the canvas rotation is applied.
    pub fn title_anchor(&self, viewport: Viewport) -> Point {
        Point::new(viewport.width as f32 * 0.5, Self::title_band(viewport))
            .rotated(self.title_rotation_deg)
    }

    /// Random block-aligned marker position below the title band.
    pub fn place_marker<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        viewport: Viewport,
        block_size: u32,
    ) -> (i32, i32) {
        let margin = block_size as f32 * self.marker_margin_blocks as f32;
        let w = viewport.width as f32;
        let h = viewport.height as f32;
        let x = snap_random(rng, margin, w - margin, block_size);
        let y = snap_random(rng, Self::title_band(viewport) + margin, h - margin, block_size);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn title_anchor_rotates_about_origin() {
        let layout = OverlayLayout::default();
        let p = layout.title_anchor(Viewport::new(800, 600));
        // (400,100) turned 2 degrees counter-clockwise
        assert!((p.x - 403.2454).abs() < 1e-2, "{p:?}");
        assert!((p.y - 85.98).abs() < 1e-2, "{p:?}");
    }

    #[test]
    fn marker_stays_inside_margins() {
        let layout = OverlayLayout::default();
        let vp = Viewport::new(800, 600);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            let (x, y) = layout.place_marker(&mut rng, vp, 5);
            assert!((50..=750).contains(&x));
            assert!((150..=550).contains(&y));
            assert_eq!(x % 5, 0);
            assert_eq!(y % 5, 0);
        }
    }

    #[test]
    fn oversized_margin_falls_back_to_midpoint() {
        let layout = OverlayLayout {
            marker_margin_blocks: u32::MAX / 2,
            ..OverlayLayout::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (x, y) = layout.place_marker(&mut rng, Viewport::new(800, 600), 5);
        assert_eq!(x % 5, 0);
        assert_eq!(y % 5, 0);
        assert!((0..=800).contains(&x), "x = {x}");
        assert!((0..=600).contains(&y), "y = {y}");
    }
}
