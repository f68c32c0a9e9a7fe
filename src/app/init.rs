use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use raylib::prelude::*;
use treasure_gen::seed::FirstThenTime;
use treasure_gen::{MapState, Settings, Viewport};
use treasure_render_raylib::MapTarget;

use super::{App, AppStats};
use crate::event::EventQueue;

pub struct AppOptions {
    pub assets_root: PathBuf,
    pub config_path: PathBuf,
    pub first_seed: Option<i32>,
    pub watch_config: bool,
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        settings: Settings,
        options: AppOptions,
    ) -> Result<Self, Box<dyn Error>> {
        let font_path = crate::assets::asset_path(&options.assets_root, &settings.assets.font);
        let paper_path = crate::assets::asset_path(&options.assets_root, &settings.assets.paper);
        let font = load_font(rl, thread, &font_path)?;
        let paper = load_paper(rl, thread, &paper_path)?;

        let config_event_rx = if options.watch_config {
            Some(super::watchers::spawn_config_watcher(options.config_path.clone()))
        } else {
            None
        };

        let viewport = Viewport::new(
            rl.get_screen_width().max(1) as u32,
            rl.get_screen_height().max(1) as u32,
        );
        let mut seeds = FirstThenTime::new(options.first_seed);
        let ctx = settings.map;
        let state = MapState::new(&ctx, viewport, &mut seeds);
        let mut target = MapTarget::new();
        target.ensure_size(rl, thread, viewport.width, viewport.height);

        Ok(Self {
            ctx,
            state,
            queue: EventQueue::new(),
            stats: AppStats {
                maps_generated: 1,
                ..AppStats::default()
            },
            seeds,
            font,
            paper,
            target,
            started: Instant::now(),
            needs_repaint: true,
            pending_exports: Vec::new(),
            config_path: options.config_path,
            config_event_rx,
        })
    }
}

fn load_font(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Font, Box<dyn Error>> {
    if !path.exists() {
        return Err(crate::assets::missing_asset("font", path).into());
    }
    let font = rl
        .load_font(thread, &path.to_string_lossy())
        .map_err(|e| format!("failed to load font {:?}: {}", path, e))?;
    log::info!("Loaded font {:?}", path);
    Ok(font)
}

fn load_paper(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, Box<dyn Error>> {
    if !path.exists() {
        return Err(crate::assets::missing_asset("paper texture", path).into());
    }
    let tex = rl
        .load_texture(thread, &path.to_string_lossy())
        .map_err(|e| format!("failed to load texture {:?}: {}", path, e))?;
    tex.set_texture_filter(thread, raylib::consts::TextureFilter::TEXTURE_FILTER_BILINEAR);
    log::info!(
        "Loaded paper texture {:?} ({}x{})",
        path,
        tex.width(),
        tex.height()
    );
    Ok(tex)
}
