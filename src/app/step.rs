use raylib::prelude::*;
use treasure_gen::MapEvent;

use super::App;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.process_config_events();

        // Input handling -> emit events
        if rl.is_key_pressed(KeyboardKey::KEY_N) {
            self.queue.emit_now(MapEvent::Regenerate);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            self.queue.emit_now(MapEvent::ToggleFullscreen);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            self.queue.emit_now(MapEvent::Export);
        }
        let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
        if w > 0 && h > 0 {
            let (w, h) = (w as u32, h as u32);
            let vp = self.state.viewport;
            if (w, h) != (vp.width, vp.height) {
                self.queue.emit_now(MapEvent::Resize {
                    width: w,
                    height: h,
                });
            }
        }

        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(rl, thread, env);
        }
        self.queue.advance_tick();

        if self.needs_repaint {
            self.repaint(rl, thread);
        }
    }
}
