use std::time::Duration;

use macroquad::prelude::*;
use matching_game::{
    BoardView, GameConfig, GameController, input, ui,
};
use tracing::{info, warn};

fn window_conf() -> Conf {
    Conf {
        window_title: "Matching Game".to_owned(),
        window_width: 800,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let config = GameConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, "ignoring environment configuration");
        GameConfig::default()
    });

    // Clock-derived seed unless one is configured
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut controller = GameController::new(config, seed, BoardView::new());
    info!("matching game started");

    loop {
        let mouse_pos = mouse_position();
        let layout = ui::board_layout();
        let restart = layout.restart_button();
        let play_again = layout.play_again_button();

        let summary_visible = controller.renderer().summary_visible();
        for event in input::poll_events(&layout, &restart, &play_again, summary_visible, mouse_pos) {
            controller.handle(event);
        }

        controller.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(240, 240, 240, 255));
        controller.renderer().draw(&layout, &restart, &play_again, mouse_pos);

        next_frame().await;
    }
}
