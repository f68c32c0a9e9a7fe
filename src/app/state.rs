use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use raylib::prelude::{Font, Texture2D};
use treasure_gen::seed::FirstThenTime;
use treasure_gen::{MapContext, MapState};
use treasure_render_raylib::MapTarget;

use crate::event::EventQueue;

pub struct App {
    pub ctx: MapContext,
    pub state: MapState,
    pub queue: EventQueue,
    pub stats: AppStats,
    pub(crate) seeds: FirstThenTime,
    pub(crate) font: Font,
    pub(crate) paper: Texture2D,
    pub(crate) target: MapTarget,
    pub(crate) started: Instant,
    pub(crate) needs_repaint: bool,
    pub(crate) pending_exports: Vec<PathBuf>,
    pub(crate) config_path: PathBuf,
    pub(crate) config_event_rx: Option<Receiver<()>>,
}

#[derive(Default, Debug)]
pub struct AppStats {
    pub events_processed: usize,
    pub maps_generated: usize,
    pub frames_saved: usize,
    pub last_paint_ms: f32,
}
