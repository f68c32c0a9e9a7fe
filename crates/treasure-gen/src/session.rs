//! Event dispatch: each input event maps the current state to a new state plus effects.

use std::path::PathBuf;
use std::sync::Arc;

use crate::grid::{GridParams, Viewport};
use crate::map::TreasureMap;
use crate::noise::NoiseParams;
use crate::overlay::OverlayLayout;
use crate::seed::SeedSource;
use crate::terrain::{BandTable, Palette};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapEvent {
    Regenerate,
    ToggleFullscreen,
    Export,
    Resize { width: u32, height: u32 },
}

/// Side effects the host must carry out after a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Paint the current map onto the canvas.
    Repaint,
    ToggleFullscreen,
    ResizeSurface { width: u32, height: u32 },
    /// Write the next presented frame to this path.
    SaveFrame(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSettings {
    pub dir: PathBuf,
    pub prefix: String,
    pub extension: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: "PixelTreasureMap_".to_string(),
            extension: "jpg".to_string(),
        }
    }
}

impl ExportSettings {
    pub fn file_path(&self, elapsed_ms: u64) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.prefix, elapsed_ms, self.extension))
    }
}

/// Read-only generation and drawing parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapContext {
    pub grid: GridParams,
    pub noise: NoiseParams,
    pub bands: BandTable,
    pub palette: Palette,
    pub layout: OverlayLayout,
    pub export: ExportSettings,
}

impl MapContext {
    pub fn generate(&self, viewport: Viewport, seed: i32) -> TreasureMap {
        TreasureMap::generate(viewport, &self.grid, &self.noise, &self.layout, seed)
    }
}

/// Current viewport and map. Replaced on every change, never edited.
#[derive(Clone, Debug)]
pub struct MapState {
    pub viewport: Viewport,
    pub map: Arc<TreasureMap>,
}

impl MapState {
    pub fn new(ctx: &MapContext, viewport: Viewport, seeds: &mut dyn SeedSource) -> Self {
        let map = ctx.generate(viewport, seeds.next_seed());
        Self {
            viewport,
            map: Arc::new(map),
        }
    }

    /// Same viewport, fresh map.
    pub fn regenerate(&self, ctx: &MapContext, seeds: &mut dyn SeedSource) -> Self {
        Self::new(ctx, self.viewport, seeds)
    }
}

pub fn dispatch(
    ctx: &MapContext,
    state: &MapState,
    event: MapEvent,
    seeds: &mut dyn SeedSource,
    elapsed_ms: u64,
) -> (MapState, Vec<Effect>) {
    match event {
        MapEvent::Regenerate => (state.regenerate(ctx, seeds), vec![Effect::Repaint]),
        MapEvent::ToggleFullscreen => (state.clone(), vec![Effect::ToggleFullscreen]),
        MapEvent::Export => (
            state.clone(),
            vec![Effect::SaveFrame(ctx.export.file_path(elapsed_ms))],
        ),
        MapEvent::Resize { width, height } => {
            let viewport = Viewport::new(width, height);
            if viewport == state.viewport {
                return (state.clone(), Vec::new());
            }
            if width == 0 || height == 0 {
                log::debug!("ignoring resize to {}x{}", width, height);
                return (state.clone(), Vec::new());
            }
            (
                MapState::new(ctx, viewport, seeds),
                vec![Effect::ResizeSurface { width, height }, Effect::Repaint],
            )
        }
    }
}
