// Turns frame time into carving steps. The carve advances at the slider's
// rate regardless of how fast macroquad is presenting frames.

pub const MAX_TICKS_PER_FRAME: u32 = 10;

#[derive(Debug)]
pub struct TickClock {
    accumulated: f32,
    max_ticks_per_frame: u32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(MAX_TICKS_PER_FRAME)
    }
}

impl TickClock {
    pub fn new(max_ticks_per_frame: u32) -> Self {
        TickClock {
            accumulated: 0.0,
            max_ticks_per_frame,
        }
    }

    /// Whole ticks due after `dt` seconds at `rate` ticks per second. The
    /// fractional remainder carries into the next frame. A rate of zero is a
    /// pause and drops any partial tick.
    pub fn ticks(&mut self, dt: f32, rate: f32) -> u32 {
        if rate <= 0.0 || dt <= 0.0 {
            if rate <= 0.0 {
                self.accumulated = 0.0;
            }
            return 0;
        }

        self.accumulated += dt * rate;
        let whole = self.accumulated.floor();
        self.accumulated -= whole;

        // After a stall, catch up by at most one frame's worth.
        if whole as u32 > self.max_ticks_per_frame {
            self.accumulated = 0.0;
            return self.max_ticks_per_frame;
        }

        whole as u32
    }
}
