use raylib::prelude::*;
use treasure_gen::{Effect, MapEvent, dispatch};

use super::App;
use crate::event::EventEnvelope;

impl App {
    pub(super) fn handle_event(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        env: EventEnvelope,
    ) {
        Self::log_event(&env);
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let (next, effects) = dispatch(&self.ctx, &self.state, env.kind, &mut self.seeds, elapsed_ms);
        if !std::sync::Arc::ptr_eq(&next.map, &self.state.map) {
            self.stats.maps_generated += 1;
        }
        self.state = next;
        self.stats.events_processed += 1;
        for effect in effects {
            self.apply_effect(rl, thread, effect);
        }
    }

    fn apply_effect(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, effect: Effect) {
        match effect {
            Effect::Repaint => self.needs_repaint = true,
            Effect::ToggleFullscreen => rl.toggle_fullscreen(),
            Effect::ResizeSurface { width, height } => {
                self.target.ensure_size(rl, thread, width, height);
            }
            Effect::SaveFrame(path) => self.pending_exports.push(path),
        }
    }

    fn log_event(env: &EventEnvelope) {
        match env.kind {
            MapEvent::Regenerate => {
                log::info!(target: "events", "[tick {}] #{} Regenerate", env.tick, env.id);
            }
            MapEvent::ToggleFullscreen => {
                log::info!(target: "events", "[tick {}] #{} ToggleFullscreen", env.tick, env.id);
            }
            MapEvent::Export => {
                log::info!(target: "events", "[tick {}] #{} Export", env.tick, env.id);
            }
            MapEvent::Resize { width, height } => {
                log::info!(
                    target: "events",
                    "[tick {}] #{} Resize {}x{}",
                    env.tick,
                    env.id,
                    width,
                    height
                );
            }
        }
    }
}
