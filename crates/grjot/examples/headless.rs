//! Headless run — the whole game without a window.
//!
//! Starts a session, holds thrust for a while so the player flies off
//! screen, and prints the session and frame stats along the way.
//!
//! ```sh
//! cargo run --example headless --no-default-features
//! ```

use grjot::game::{self, GameComponent, GameState};
use grjot::prelude::*;

fn main() {
    env_logger::init();

    let mut app: App<GameComponent> = App::default();
    app.assets_mut()
        .insert("player", SpriteSheet::single(Vec2::splat(30.0)));
    app.assets_mut()
        .insert("asteroid", SpriteSheet::single(Vec2::splat(64.0)));
    game::setup(app.registry_mut());

    let mut frontend = HeadlessFrontend::new();

    // Boot frame, then press start.
    app.frame(&mut frontend);
    frontend.end_frame();
    frontend.tap(Key::Enter);
    app.frame(&mut frontend);
    frontend.end_frame();
    println!("state after start: {:?}", app.session().state);

    // Fly forward until the run ends.
    frontend.press(Key::W);
    let mut frames = 0u32;
    while app.session().state == GameState::Game && frames < 600 {
        app.frame(&mut frontend);
        frames += 1;
    }

    println!(
        "run over after {frames} frames: state {:?}, survived {:.2}s, {} entities live",
        app.session().state,
        app.session().time_alive,
        app.registry().entity_count(),
    );
    let stats = app.stats();
    println!(
        "last frame {} ran {} updates, {} ends, {} destroys",
        stats.frame, stats.updated, stats.ended, stats.destroyed
    );

    app.shutdown(&mut frontend);
}
