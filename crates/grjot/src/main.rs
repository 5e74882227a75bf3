//! Asteroids — the windowed game binary.

use grjot::app::App;
use grjot::asset::SpriteSheet;
use grjot::backend::MacroquadFrontend;
use grjot::game::{self, GameComponent};
use grjot::math::Vec2;
use macroquad::prelude as mq;

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: String::from("Asteroids"),
        window_width: 1200,
        window_height: 1000,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // One flag: -v / --verbose raises the default filter to trace.
    // RUST_LOG still wins.
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "trace" } else { "info" }),
    )
    .init();

    // Intercept close so teardown still runs.
    mq::prevent_quit();

    let mut frontend = MacroquadFrontend::new();
    frontend.load_texture("player", "assets/player.png").await;
    frontend.load_texture("asteroid", "assets/asteroid.png").await;

    let mut app: App<GameComponent> = App::default();
    app.assets_mut()
        .insert("player", SpriteSheet::single(Vec2::splat(30.0)));
    app.assets_mut()
        .insert("asteroid", SpriteSheet::single(Vec2::splat(64.0)));
    game::setup(app.registry_mut());

    log::info!("starting game");
    while !mq::is_quit_requested() {
        mq::clear_background(mq::BLACK);
        app.frame(&mut frontend);
        mq::next_frame().await;
    }
    app.shutdown(&mut frontend);
}
