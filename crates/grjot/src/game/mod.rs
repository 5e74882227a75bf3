//! # Game — The Asteroids Components
//!
//! Everything gameplay: the [`GameComponent`] enum the runtime is
//! instantiated with, the shared [`Session`], and the component types
//! themselves. [`setup`] spawns the two bootstrap entities (manager and UI
//! overlay); the manager does the rest from input and events.

pub mod asteroid;
pub mod collider;
pub mod manager;
pub mod player;
pub mod session;
pub mod sprite;
pub mod ui;

pub use asteroid::Asteroid;
pub use collider::{CircleCollider, Contact};
pub use manager::GameManager;
pub use player::{PlayerController, PlayerEvent};
pub use session::{GameState, Session};
pub use sprite::SpriteRenderer;
pub use ui::UiOverlay;

use crate::component::Component;
use crate::context::Cx;
use crate::hierarchy::Node;
use crate::impl_variants;
use crate::registry::Registry;

/// The context type every gameplay hook receives.
pub type GameCx<'a> = Cx<'a, GameComponent>;

/// Every component type in the game. Slot 0 of each entity is the `Node`.
pub enum GameComponent {
    Node(Node),
    Manager(GameManager),
    Ui(UiOverlay),
    Player(PlayerController),
    Sprite(SpriteRenderer),
    Collider(CircleCollider),
    Asteroid(Asteroid),
}

impl Component for GameComponent {
    type Session = Session;

    fn from_node(node: Node) -> Self {
        GameComponent::Node(node)
    }

    fn as_node(&self) -> Option<&Node> {
        match self {
            GameComponent::Node(node) => Some(node),
            _ => None,
        }
    }

    fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            GameComponent::Node(node) => Some(node),
            _ => None,
        }
    }

    fn start(&mut self, cx: &mut Cx<'_, Self>) {
        if let GameComponent::Manager(manager) = self {
            manager.start(cx);
        }
    }

    fn update(&mut self, cx: &mut Cx<'_, Self>) {
        match self {
            GameComponent::Node(_) => {}
            GameComponent::Manager(manager) => manager.update(cx),
            GameComponent::Ui(overlay) => overlay.update(cx),
            GameComponent::Player(controller) => controller.update(cx),
            GameComponent::Sprite(sprite) => sprite.update(cx),
            GameComponent::Collider(collider) => collider.update(cx),
            GameComponent::Asteroid(asteroid) => asteroid.update(cx),
        }
    }
}

impl_variants!(GameComponent {
    Node => Node,
    Manager => GameManager,
    Ui => UiOverlay,
    Player => PlayerController,
    Sprite => SpriteRenderer,
    Collider => CircleCollider,
    Asteroid => Asteroid,
});

/// Spawn the bootstrap entities: the manager and the UI overlay.
pub fn setup(registry: &mut Registry<GameComponent>) {
    let manager = registry.create_named("GameManager");
    registry.attach(manager, GameComponent::Manager(GameManager::new()));
    let ui = registry.create_named("UIManager");
    registry.attach(ui, GameComponent::Ui(UiOverlay::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::asset::SpriteSheet;
    use crate::frontend::Key;
    use crate::headless::HeadlessFrontend;
    use crate::math::Vec2;

    fn game() -> (App<GameComponent>, HeadlessFrontend) {
        let mut app: App<GameComponent> = App::default();
        app.assets_mut()
            .insert("player", SpriteSheet::single(Vec2::splat(30.0)));
        app.assets_mut()
            .insert("asteroid", SpriteSheet::single(Vec2::splat(64.0)));
        setup(app.registry_mut());
        (app, HeadlessFrontend::new())
    }

    fn frame(app: &mut App<GameComponent>, frontend: &mut HeadlessFrontend) {
        app.frame(frontend);
        frontend.end_frame();
    }

    /// Run up to the frame after the manager has seen a start input.
    fn start_game(app: &mut App<GameComponent>, frontend: &mut HeadlessFrontend) {
        frame(app, frontend);
        frontend.tap(Key::Enter);
        frame(app, frontend);
    }

    #[test]
    fn setup_creates_the_two_bootstrap_entities() {
        let (app, _frontend) = game();
        assert_eq!(app.registry().entity_count(), 2);
        assert!(app.registry().named("GameManager").is_some());
        assert!(app.registry().named("UIManager").is_some());
    }

    #[test]
    fn starting_from_the_menu_spawns_one_player_at_screen_center() {
        let (mut app, mut frontend) = game();
        start_game(&mut app, &mut frontend);

        assert_eq!(app.session().state, GameState::Game);
        let players = app.registry().entities_with::<PlayerController>();
        assert_eq!(players.len(), 1);
        let player = players[0];
        assert_eq!(app.registry().named("Player"), Some(player));

        let node = app.registry().node(player).unwrap();
        assert_eq!(node.position, Vec2::new(600.0, 500.0));
        assert_eq!(node.scale, Vec2::splat(manager::PLAYER_SCALE));
        assert!(app.registry().find::<SpriteRenderer>(player).is_some());
        assert!(app.registry().find::<CircleCollider>(player).is_some());
    }

    #[test]
    fn time_alive_accumulates_only_while_playing() {
        let (mut app, mut frontend) = game();
        frame(&mut app, &mut frontend);
        frame(&mut app, &mut frontend);
        assert_eq!(app.session().time_alive, 0.0);

        frontend.tap(Key::Enter);
        frame(&mut app, &mut frontend);
        frame(&mut app, &mut frontend);
        let delta = frontend.delta;
        assert!((app.session().time_alive - delta).abs() < 0.0001);
    }

    #[test]
    fn asteroids_spawn_on_the_cadence() {
        let (mut app, mut frontend) = game();
        start_game(&mut app, &mut frontend);
        assert!(app.registry().entities_with::<Asteroid>().is_empty());

        // One whole interval in a single frame: the timer fires once.
        frontend.delta = manager::SPAWN_INTERVAL;
        frame(&mut app, &mut frontend);
        assert_eq!(app.registry().entities_with::<Asteroid>().len(), 1);
        frame(&mut app, &mut frontend);
        assert_eq!(app.registry().entities_with::<Asteroid>().len(), 2);
    }

    #[test]
    fn leaving_the_screen_ends_the_run_and_clears_the_field() {
        let (mut app, mut frontend) = game();
        start_game(&mut app, &mut frontend);
        let player = app.registry().entities_with::<PlayerController>()[0];

        // Get an asteroid on the field first.
        frontend.delta = manager::SPAWN_INTERVAL;
        frame(&mut app, &mut frontend);
        frontend.delta = 1.0 / 60.0;

        // Push the player off screen: the death event and the deferred
        // destroy land within the same frame, and the manager — updating
        // after the player in traversal order — flips to GameOver.
        app.registry_mut().node_mut(player).unwrap().position = Vec2::new(-50.0, 500.0);
        frame(&mut app, &mut frontend);

        assert!(!app.registry().is_alive(player));
        assert_eq!(app.session().state, GameState::GameOver);
        assert!(app.registry().entities_with::<Asteroid>().is_empty());
    }

    #[test]
    fn replay_spawns_a_fresh_player_and_resets_the_clock() {
        let (mut app, mut frontend) = game();
        start_game(&mut app, &mut frontend);
        let first = app.registry().entities_with::<PlayerController>()[0];

        app.registry_mut().node_mut(first).unwrap().position = Vec2::new(-50.0, 500.0);
        frame(&mut app, &mut frontend);
        assert_eq!(app.session().state, GameState::GameOver);

        frontend.tap(Key::Enter);
        frame(&mut app, &mut frontend);
        assert_eq!(app.session().state, GameState::Game);
        assert_eq!(app.session().time_alive, 0.0);
        let players = app.registry().entities_with::<PlayerController>();
        assert_eq!(players.len(), 1);
        assert_ne!(players[0], first, "entity ids are never reused");
    }

    #[test]
    fn shutdown_tears_the_whole_game_down() {
        let (mut app, mut frontend) = game();
        start_game(&mut app, &mut frontend);
        app.shutdown(&mut frontend);
        assert_eq!(app.registry().entity_count(), 0);
    }
}
