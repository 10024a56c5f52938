use macroquad::{
    prelude::*,
    ui::{hash, root_ui},
};

use common::constants::MAX_TICK_RATE;

/// The tick-rate slider and the Reset button, drawn with macroquad's
/// immediate-mode UI in the top-left corner.
pub struct Controls {
    pub tick_rate: f32,
}

impl Controls {
    pub fn new(tick_rate: u32) -> Self {
        Controls {
            tick_rate: tick_rate as f32,
        }
    }

    /// Draws the widgets and reports whether Reset was pressed this frame.
    pub fn draw(&mut self) -> bool {
        let mut ui = root_ui();
        ui.slider(
            hash!(),
            "steps/s",
            0.0..MAX_TICK_RATE as f32,
            &mut self.tick_rate,
        );
        self.tick_rate = self.tick_rate.round();

        ui.button(None, "Reset")
    }

    pub fn is_mouse_over(&self, point: (f32, f32)) -> bool {
        root_ui().is_mouse_over(vec2(point.0, point.1))
    }
}
