use std::time::Instant;

use raylib::prelude::*;

use super::App;

impl App {
    /// Paints the current map into the off-screen target.
    pub(super) fn repaint(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let started = Instant::now();
        self.target.paint(
            rl,
            thread,
            &self.state.map,
            &self.ctx,
            &self.font,
            &self.paper,
        );
        self.stats.last_paint_ms = started.elapsed().as_secs_f32() * 1000.0;
        self.needs_repaint = false;
        log::debug!(
            "repainted map seed {} in {:.2}ms ({} event(s) queued)",
            self.state.map.seed(),
            self.stats.last_paint_ms,
            self.queue.pending()
        );
    }

    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        {
            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            self.target.blit(&mut d);
        }
        // Frame is presented; read it back for any pending exports.
        for path in std::mem::take(&mut self.pending_exports) {
            match treasure_render_raylib::save_screen(rl, thread, &path) {
                Ok(()) => self.stats.frames_saved += 1,
                Err(e) => log::error!("Failed to save {:?}: {}", path, e),
            }
        }
    }
}
