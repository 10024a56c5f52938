use std::process;

use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use client::run::run_maze_loop;
use common::Config;

fn window_conf() -> Conf {
    // Errors are reported properly from `main`; here we only need a size.
    let config = Config::from_env().unwrap_or_default();

    Conf {
        window_title: "Maze Carver".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}.", e);
            process::exit(1);
        }
    };

    run_maze_loop(config).await;
}
