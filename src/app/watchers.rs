use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

use treasure_gen::load_settings_from_path;

use super::App;

/// Sends a unit message whenever the config file changes.
pub(super) fn spawn_config_watcher(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        });
        let mut watcher = match watcher {
            Ok(w) => w,
            Err(e) => {
                log::warn!("Config watcher unavailable: {}", e);
                return;
            }
        };
        if let Err(e) = watcher.watch(path.as_path(), RecursiveMode::NonRecursive) {
            log::warn!("Cannot watch {:?}: {}", path, e);
            return;
        }
        log::info!("Watching {:?} for changes", path);
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
    rx
}

impl App {
    pub(super) fn process_config_events(&mut self) {
        let Some(rx) = self.config_event_rx.as_ref() else {
            return;
        };
        // Coalesce bursts of write events into one reload.
        if rx.try_iter().count() == 0 {
            return;
        }
        match load_settings_from_path(&self.config_path) {
            Ok(settings) => {
                self.ctx = settings.map;
                self.state = self.state.regenerate(&self.ctx, &mut self.seeds);
                self.stats.maps_generated += 1;
                self.needs_repaint = true;
                log::info!("Reloaded settings from {:?}", self.config_path);
            }
            Err(e) => log::warn!("Settings reload failed, keeping previous: {}", e),
        }
    }
}
