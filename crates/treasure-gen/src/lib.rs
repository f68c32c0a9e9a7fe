//! Window-free core of the treasure map: noise grid, terrain bands, overlays and painting.
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod grid;
pub mod map;
pub mod noise;
pub mod overlay;
pub mod paint;
pub mod seed;
pub mod session;
pub mod snap;
pub mod terrain;

pub use color::Rgba;
pub use config::{
    ConfigError, Settings, load_settings_from_path, load_settings_or_default,
};
pub use grid::{GridCell, GridParams, HeightGrid, Viewport};
pub use map::TreasureMap;
pub use noise::{HeightSource, NoiseKind, NoiseParams, NoiseSampler};
pub use overlay::{OverlayLayout, Point};
pub use paint::{Canvas, TextStyle, paint_map};
pub use seed::{FirstThenTime, FixedSeeds, SeedSource, TimeSeeds};
pub use session::{Effect, ExportSettings, MapContext, MapEvent, MapState, dispatch};
pub use terrain::{BandTable, Palette, Terrain, TerrainBand};
