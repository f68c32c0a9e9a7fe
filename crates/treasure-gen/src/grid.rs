use std::time::Instant;

use crate::config::ConfigError;
use crate::noise::{HeightSource, NoiseParams, NoiseSampler};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Block resolution and noise zoom, validated once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    block_size: u32,
    noise_scale: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            block_size: 5,
            noise_scale: 1.0 / 150.0,
        }
    }
}

impl GridParams {
    pub fn new(block_size: u32, noise_scale: f32) -> Result<Self, ConfigError> {
        if block_size == 0 {
            return Err(ConfigError::InvalidBlockSize(block_size));
        }
        if !noise_scale.is_finite() || noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(noise_scale));
        }
        if block_size < 5 {
            log::warn!(
                "block_size {} is below 5; rendering will be slow on large viewports",
                block_size
            );
        }
        Ok(Self {
            block_size,
            noise_scale,
        })
    }

    #[inline]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    #[inline]
    pub fn noise_scale(&self) -> f32 {
        self.noise_scale
    }

    /// Number of columns and rows needed to cover `viewport`.
    pub fn dims(&self, viewport: Viewport) -> (usize, usize) {
        (
            viewport.width.div_ceil(self.block_size) as usize,
            viewport.height.div_ceil(self.block_size) as usize,
        )
    }
}

/// One cell of a [`HeightGrid`], with its pixel origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
    pub x: u32,
    pub y: u32,
    pub height: f32,
}

/// Immutable block-resolution height field covering a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    cols: usize,
    rows: usize,
    block_size: u32,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Samples `source` at every block origin, scaled by the noise scale.
    pub fn build(viewport: Viewport, params: &GridParams, source: &impl HeightSource) -> Self {
        let (cols, rows) = params.dims(viewport);
        let bs = params.block_size;
        let scale = params.noise_scale;
        let mut heights = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y = (row as u32 * bs) as f32;
            for col in 0..cols {
                let x = (col as u32 * bs) as f32;
                heights.push(source.height(x * scale, y * scale));
            }
        }
        Self {
            cols,
            rows,
            block_size: bs,
            heights,
        }
    }

    /// Builds a grid from a freshly seeded noise field.
    pub fn from_seed(
        viewport: Viewport,
        params: &GridParams,
        noise: &NoiseParams,
        seed: i32,
    ) -> Self {
        let started = Instant::now();
        let sampler = NoiseSampler::new(seed, noise);
        let grid = Self::build(viewport, params, &sampler);
        log::debug!(
            "height grid {}x{} (seed {}) built in {:.2}ms",
            grid.cols,
            grid.rows,
            seed,
            started.elapsed().as_secs_f64() * 1000.0
        );
        grid
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.heights.get(row * self.cols + col).copied()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let bs = self.block_size;
        self.heights.iter().enumerate().map(move |(i, &height)| {
            let col = i % self.cols;
            let row = i / self.cols;
            GridCell {
                col,
                row,
                x: col as u32 * bs,
                y: row as u32 * bs,
                height,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_round_up_partial_blocks() {
        let p = GridParams::new(5, 0.01).unwrap();
        assert_eq!(p.dims(Viewport::new(800, 600)), (160, 120));
        assert_eq!(p.dims(Viewport::new(801, 599)), (161, 120));
        assert_eq!(p.dims(Viewport::new(0, 7)), (0, 2));
    }

    #[test]
    fn rejects_zero_block_and_bad_scale() {
        assert!(matches!(
            GridParams::new(0, 0.01),
            Err(ConfigError::InvalidBlockSize(0))
        ));
        assert!(GridParams::new(5, 0.0).is_err());
        assert!(GridParams::new(5, f32::NAN).is_err());
        assert!(GridParams::new(5, -1.0).is_err());
    }

    #[test]
    fn samples_at_scaled_block_origins() {
        let p = GridParams::new(10, 0.5).unwrap();
        let grid = HeightGrid::build(Viewport::new(25, 15), &p, &|x: f32, y: f32| {
            (x + 100.0 * y) / 1000.0
        });
        assert_eq!((grid.cols(), grid.rows()), (3, 2));
        // cell (2,1) sits at pixel (20,10) -> noise coords (10,5)
        let h = grid.get(2, 1).unwrap();
        assert!((h - 0.51).abs() < 1e-6);
        assert_eq!(grid.get(3, 0), None);
        let last = grid.cells().last().unwrap();
        assert_eq!((last.col, last.row, last.x, last.y), (2, 1, 20, 10));
    }
}
