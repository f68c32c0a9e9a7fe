use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{GridParams, HeightGrid, Viewport};
use crate::noise::NoiseParams;
use crate::overlay::OverlayLayout;

/// One generated map: its height grid and marker, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct TreasureMap {
    seed: i32,
    viewport: Viewport,
    grid: HeightGrid,
    marker: (i32, i32),
}

impl TreasureMap {
    pub fn generate(
        viewport: Viewport,
        grid: &GridParams,
        noise: &NoiseParams,
        layout: &OverlayLayout,
        seed: i32,
    ) -> Self {
        let heights = HeightGrid::from_seed(viewport, grid, noise, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed as u32));
        let marker = layout.place_marker(&mut rng, viewport, grid.block_size());
        log::info!(
            "generated {}x{} map (seed {}), marker at ({}, {})",
            viewport.width,
            viewport.height,
            seed,
            marker.0,
            marker.1
        );
        Self {
            seed,
            viewport,
            grid: heights,
            marker,
        }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    #[inline]
    pub fn marker(&self) -> (i32, i32) {
        self.marker
    }
}
