use macroquad::prelude::*;
use tracing::{error, info};

use crate::{controls::Controls, render, ticker::TickClock};
use common::{Config, MazeSession};

pub struct MazeRunner {
    pub session: MazeSession,
    pub controls: Controls,
    clock: TickClock,
}

impl MazeRunner {
    pub fn new(config: &Config) -> Result<Self, String> {
        let session =
            MazeSession::new(config).map_err(|e| format!("failed to start the maze: {}", e))?;

        Ok(MazeRunner {
            session,
            controls: Controls::new(config.tick_rate),
            clock: TickClock::default(),
        })
    }

    fn handle_click(&mut self) {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return;
        }

        let point = mouse_position();
        if self.controls.is_mouse_over(point) {
            return;
        }

        match self.session.click(::glam::Vec2::new(point.0, point.1)) {
            Ok(Some(cell)) => info!(%cell, "restarting from clicked cell"),
            Ok(None) => {}
            Err(e) => error!(%e, "failed to restart from click"),
        }
    }

    fn step(&mut self) {
        let ticks = self.clock.ticks(get_frame_time(), self.controls.tick_rate);

        for _ in 0..ticks {
            if !self.session.is_running() {
                break;
            }

            // Only reachable if the carver hands the grid two cells that aren't
            // neighbors; stop rather than keep drawing a corrupt maze.
            if let Err(e) = self.session.advance() {
                error!(%e, "carving stopped");
                self.session.clear();
                break;
            }
        }
    }

    pub fn update(&mut self) {
        self.handle_click();
        self.step();

        render::draw_session(&self.session);

        if self.controls.draw() {
            self.session.clear();
        }
    }
}

pub async fn run_maze_loop(config: Config) {
    let mut runner = match MazeRunner::new(&config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        runner.update();

        next_frame().await;
    }

    info!("maze window closed");
}
