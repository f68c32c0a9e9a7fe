use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Rgba;
use crate::grid::GridParams;
use crate::noise::{DEFAULT_CONTRAST, NoiseKind, NoiseParams};
use crate::overlay::OverlayLayout;
use crate::session::{ExportSettings, MapContext};
use crate::terrain::{BandTable, Palette, Terrain, TerrainBand};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidBlockSize(u32),
    InvalidNoiseScale(f32),
    InvalidNoise(String),
    InvalidBands(String),
    InvalidColor(String),
    InvalidOverlay(String),
    InvalidWindow(String),
    InvalidExport(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBlockSize(v) => {
                write!(f, "invalid block size {}: must be at least 1", v)
            }
            ConfigError::InvalidNoiseScale(v) => {
                write!(f, "invalid noise scale {}: must be finite and positive", v)
            }
            ConfigError::InvalidNoise(msg) => write!(f, "invalid noise settings: {}", msg),
            ConfigError::InvalidBands(msg) => write!(f, "invalid terrain bands: {}", msg),
            ConfigError::InvalidColor(s) => write!(f, "invalid color {:?}", s),
            ConfigError::InvalidOverlay(msg) => write!(f, "invalid overlay settings: {}", msg),
            ConfigError::InvalidWindow(msg) => write!(f, "invalid window settings: {}", msg),
            ConfigError::InvalidExport(msg) => write!(f, "invalid export settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// --- File format ---

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub noise: Noise,
    #[serde(default)]
    pub bands: Bands,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub overlay: Overlay,
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub export: Export,
    #[serde(default)]
    pub assets: Assets,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Grid {
    #[serde(default = "default_block_size")]
    pub block_size: u32,
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f32,
}
fn default_block_size() -> u32 {
    5
}
fn default_noise_scale() -> f32 {
    1.0 / 150.0
}
impl Default for Grid {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            noise_scale: default_noise_scale(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Noise {
    #[serde(default)]
    pub kind: NoiseKind,
    #[serde(default = "default_octaves")]
    pub octaves: u8,
    #[serde(default = "default_falloff")]
    pub falloff: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    #[serde(default = "default_contrast")]
    pub contrast: f32,
}
fn default_octaves() -> u8 {
    5
}
fn default_falloff() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}
fn default_contrast() -> f32 {
    DEFAULT_CONTRAST
}
impl Default for Noise {
    fn default() -> Self {
        Self {
            kind: NoiseKind::default(),
            octaves: default_octaves(),
            falloff: default_falloff(),
            lacunarity: default_lacunarity(),
            contrast: default_contrast(),
        }
    }
}

/// Upper bound per terrain band, in ascending order.
#[derive(Clone, Debug, Deserialize)]
pub struct Bands {
    #[serde(default = "d_deep_water")]
    pub deep_water: f32,
    #[serde(default = "d_shallow_water")]
    pub shallow_water: f32,
    #[serde(default = "d_sand")]
    pub sand: f32,
    #[serde(default = "d_light_grass")]
    pub light_grass: f32,
    #[serde(default = "d_dark_grass")]
    pub dark_grass: f32,
    #[serde(default = "d_trees")]
    pub trees: f32,
    #[serde(default = "d_stone")]
    pub stone: f32,
}
fn d_deep_water() -> f32 {
    0.30
}
fn d_shallow_water() -> f32 {
    0.40
}
fn d_sand() -> f32 {
    0.45
}
fn d_light_grass() -> f32 {
    0.50
}
fn d_dark_grass() -> f32 {
    0.65
}
fn d_trees() -> f32 {
    0.75
}
fn d_stone() -> f32 {
    1.0
}
impl Default for Bands {
    fn default() -> Self {
        Self {
            deep_water: d_deep_water(),
            shallow_water: d_shallow_water(),
            sand: d_sand(),
            light_grass: d_light_grass(),
            dark_grass: d_dark_grass(),
            trees: d_trees(),
            stone: d_stone(),
        }
    }
}

/// Optional hex overrides; unset entries keep the built-in palette.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub deep_water: Option<String>,
    #[serde(default)]
    pub shallow_water: Option<String>,
    #[serde(default)]
    pub sand: Option<String>,
    #[serde(default)]
    pub light_grass: Option<String>,
    #[serde(default)]
    pub dark_grass: Option<String>,
    #[serde(default)]
    pub trees: Option<String>,
    #[serde(default)]
    pub stone: Option<String>,
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Overlay {
    #[serde(default = "default_title_text")]
    pub title_text: String,
    #[serde(default = "default_title_size")]
    pub title_size: f32,
    #[serde(default = "default_title_rotation")]
    pub title_rotation_deg: f32,
    #[serde(default = "default_marker_glyph")]
    pub marker_glyph: String,
    #[serde(default = "default_marker_size")]
    pub marker_size: f32,
    #[serde(default = "default_marker_margin")]
    pub marker_margin_blocks: u32,
    #[serde(default = "default_paper_alpha")]
    pub paper_alpha: u8,
}
fn default_title_text() -> String {
    OverlayLayout::default().title_text
}
fn default_title_size() -> f32 {
    50.0
}
fn default_title_rotation() -> f32 {
    -2.0
}
fn default_marker_glyph() -> String {
    "x".to_string()
}
fn default_marker_size() -> f32 {
    40.0
}
fn default_marker_margin() -> u32 {
    10
}
fn default_paper_alpha() -> u8 {
    75
}
impl Default for Overlay {
    fn default() -> Self {
        Self {
            title_text: default_title_text(),
            title_size: default_title_size(),
            title_rotation_deg: default_title_rotation(),
            marker_glyph: default_marker_glyph(),
            marker_size: default_marker_size(),
            marker_margin_blocks: default_marker_margin(),
            paper_alpha: default_paper_alpha(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
}
fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_title() -> String {
    "Pixel Treasure Map".to_string()
}
fn default_target_fps() -> u32 {
    60
}
impl Default for Window {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            target_fps: default_target_fps(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Export {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_export_prefix")]
    pub prefix: String,
    #[serde(default = "default_export_extension")]
    pub extension: String,
}
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_export_prefix() -> String {
    "PixelTreasureMap_".to_string()
}
fn default_export_extension() -> String {
    "jpg".to_string()
}
impl Default for Export {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            prefix: default_export_prefix(),
            extension: default_export_extension(),
        }
    }
}

/// Asset file names, relative to the assets root unless absolute.
#[derive(Clone, Debug, Deserialize)]
pub struct Assets {
    #[serde(default = "default_font")]
    pub font: PathBuf,
    #[serde(default = "default_paper")]
    pub paper: PathBuf,
}
fn default_font() -> PathBuf {
    PathBuf::from("assets/Daydream.ttf")
}
fn default_paper() -> PathBuf {
    PathBuf::from("assets/papyrus-texture-vignette.png")
}
impl Default for Assets {
    fn default() -> Self {
        Self {
            font: default_font(),
            paper: default_paper(),
        }
    }
}

// --- Validated settings ---

pub const EXPORT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSettings {
    pub font: PathBuf,
    pub paper: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub map: MapContext,
    pub window: WindowSettings,
    pub assets: AssetSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let w = Window::default();
        let a = Assets::default();
        Self {
            map: MapContext::default(),
            window: WindowSettings {
                width: w.width,
                height: w.height,
                title: w.title,
                target_fps: w.target_fps,
            },
            assets: AssetSettings {
                font: a.font,
                paper: a.paper,
            },
        }
    }
}

impl Settings {
    pub fn from_config(cfg: &MapConfig) -> Result<Self, ConfigError> {
        let grid = GridParams::new(cfg.grid.block_size, cfg.grid.noise_scale)?;

        if cfg.noise.octaves == 0 || cfg.noise.octaves > 16 {
            return Err(ConfigError::InvalidNoise(format!(
                "octaves must be in 1..=16, got {}",
                cfg.noise.octaves
            )));
        }
        if !(cfg.noise.falloff.is_finite() && cfg.noise.falloff > 0.0) {
            return Err(ConfigError::InvalidNoise(format!(
                "falloff must be positive, got {}",
                cfg.noise.falloff
            )));
        }
        if !(cfg.noise.lacunarity.is_finite() && cfg.noise.lacunarity > 0.0) {
            return Err(ConfigError::InvalidNoise(format!(
                "lacunarity must be positive, got {}",
                cfg.noise.lacunarity
            )));
        }
        if !(cfg.noise.contrast.is_finite() && cfg.noise.contrast > 0.0) {
            return Err(ConfigError::InvalidNoise(format!(
                "contrast must be positive, got {}",
                cfg.noise.contrast
            )));
        }
        let noise = NoiseParams {
            kind: cfg.noise.kind,
            octaves: cfg.noise.octaves,
            falloff: cfg.noise.falloff,
            lacunarity: cfg.noise.lacunarity,
            contrast: cfg.noise.contrast,
        };

        let b = &cfg.bands;
        let bands = BandTable::new(vec![
            TerrainBand::new(b.deep_water, Terrain::DeepWater),
            TerrainBand::new(b.shallow_water, Terrain::ShallowWater),
            TerrainBand::new(b.sand, Terrain::Sand),
            TerrainBand::new(b.light_grass, Terrain::LightGrass),
            TerrainBand::new(b.dark_grass, Terrain::DarkGrass),
            TerrainBand::new(b.trees, Terrain::Trees),
            TerrainBand::new(b.stone, Terrain::Stone),
        ])?;

        let palette = palette_from(&cfg.palette)?;

        let o = &cfg.overlay;
        if !(o.title_size.is_finite() && o.title_size > 0.0)
            || !(o.marker_size.is_finite() && o.marker_size > 0.0)
        {
            return Err(ConfigError::InvalidOverlay(
                "text sizes must be positive".into(),
            ));
        }
        if !o.title_rotation_deg.is_finite() {
            return Err(ConfigError::InvalidOverlay(
                "title rotation must be finite".into(),
            ));
        }
        let margin_px = grid.block_size().checked_mul(o.marker_margin_blocks);
        if margin_px.is_none_or(|m| m >= cfg.window.width.min(cfg.window.height)) {
            return Err(ConfigError::InvalidOverlay(format!(
                "marker margin of {} blocks does not fit a {}x{} window",
                o.marker_margin_blocks, cfg.window.width, cfg.window.height
            )));
        }
        let layout = OverlayLayout {
            title_text: o.title_text.clone(),
            title_size: o.title_size,
            title_rotation_deg: o.title_rotation_deg,
            marker_glyph: o.marker_glyph.clone(),
            marker_size: o.marker_size,
            marker_margin_blocks: o.marker_margin_blocks,
            paper_alpha: o.paper_alpha,
        };

        let extension = cfg.export.extension.trim_start_matches('.').to_lowercase();
        if !EXPORT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ConfigError::InvalidExport(format!(
                "unsupported extension {:?}; expected one of {:?}",
                cfg.export.extension, EXPORT_EXTENSIONS
            )));
        }
        let export = ExportSettings {
            dir: cfg.export.dir.clone(),
            prefix: cfg.export.prefix.clone(),
            extension,
        };

        let w = &cfg.window;
        if w.width == 0 || w.height == 0 {
            return Err(ConfigError::InvalidWindow(format!(
                "window must be non-empty, got {}x{}",
                w.width, w.height
            )));
        }

        Ok(Self {
            map: MapContext {
                grid,
                noise,
                bands,
                palette,
                layout,
                export,
            },
            window: WindowSettings {
                width: w.width,
                height: w.height,
                title: w.title.clone(),
                target_fps: w.target_fps,
            },
            assets: AssetSettings {
                font: cfg.assets.font.clone(),
                paper: cfg.assets.paper.clone(),
            },
        })
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MapConfig = toml::from_str(s)?;
        Ok(Self::from_config(&cfg)?)
    }
}

fn palette_from(cfg: &PaletteConfig) -> Result<Palette, ConfigError> {
    let mut palette = Palette::default();
    let terrain = [
        (Terrain::DeepWater, &cfg.deep_water),
        (Terrain::ShallowWater, &cfg.shallow_water),
        (Terrain::Sand, &cfg.sand),
        (Terrain::LightGrass, &cfg.light_grass),
        (Terrain::DarkGrass, &cfg.dark_grass),
        (Terrain::Trees, &cfg.trees),
        (Terrain::Stone, &cfg.stone),
        (Terrain::Fallback, &cfg.fallback),
    ];
    for (t, hex) in terrain {
        if let Some(hex) = hex {
            palette.set_color(t, Rgba::from_hex(hex)?);
        }
    }
    if let Some(hex) = &cfg.marker {
        palette.marker = Rgba::from_hex(hex)?;
    }
    if let Some(hex) = &cfg.title {
        palette.title = Rgba::from_hex(hex)?;
    }
    Ok(palette)
}

pub fn load_settings_from_path(path: &Path) -> Result<Settings, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    Settings::from_toml_str(&s)
}

/// Like [`load_settings_from_path`], but a missing file yields the defaults.
pub fn load_settings_or_default(path: &Path) -> Result<Settings, Box<dyn Error>> {
    if !path.exists() {
        log::info!("No config at {:?}; using built-in settings", path);
        return Ok(Settings::default());
    }
    let settings = load_settings_from_path(path)?;
    log::info!("Loaded settings from {:?}", path);
    Ok(settings)
}
