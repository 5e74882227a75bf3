//! The game state machine: MainMenu → Game → GameOver → Game, forever.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::counter::Counter;
use crate::events::Subscription;
use crate::frontend::Key;
use crate::math::Vec2;

use super::asteroid::{self, Asteroid};
use super::collider::CircleCollider;
use super::player::{PlayerController, PlayerEvent};
use super::session::GameState;
use super::sprite::SpriteRenderer;
use super::{GameComponent, GameCx};

/// Seconds between asteroid spawns.
pub const SPAWN_INTERVAL: f32 = 2.0;
pub const PLAYER_SCALE: f32 = 1.2;
pub const PLAYER_RADIUS: f32 = 18.0;

/// Drives the session through its states; spawns the player and the
/// asteroids; listens for the player's death.
pub struct GameManager {
    spawn_timer: Counter,
    deaths: Option<Subscription<PlayerEvent>>,
    rng: SmallRng,
}

impl GameManager {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Seedable form for deterministic runs.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            spawn_timer: Counter::new(SPAWN_INTERVAL),
            deaths: None,
            rng,
        }
    }

    pub(crate) fn start(&mut self, cx: &mut GameCx<'_>) {
        cx.session.state = GameState::MainMenu;
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        match cx.session.state {
            GameState::MainMenu | GameState::GameOver => {
                if cx.just_pressed(Key::Enter) {
                    self.start_game(cx);
                }
            }
            GameState::Game => {
                let dt = cx.dt();
                cx.session.time_alive += dt;
                if self.spawn_timer.advance(dt) {
                    asteroid::spawn(cx, &mut self.rng);
                    self.spawn_timer.reset();
                }
                let died = self
                    .deaths
                    .as_mut()
                    .is_some_and(|deaths| deaths.try_recv().is_some());
                if died {
                    self.game_over(cx);
                }
            }
        }
    }

    /// Enter Game: reset the clocks, spawn one player at screen center.
    fn start_game(&mut self, cx: &mut GameCx<'_>) {
        log::info!("starting game");
        cx.session.state = GameState::Game;
        cx.session.time_alive = 0.0;
        self.spawn_timer.reset();

        let center = cx.screen_center();
        let player = cx.registry.create_named("Player");
        if let Some(node) = cx.registry.node_mut(player) {
            node.position = center;
            node.scale = Vec2::splat(PLAYER_SCALE);
        }

        let mut controller = PlayerController::new();
        self.deaths = Some(controller.subscribe());
        let mut collider = CircleCollider::new(PLAYER_RADIUS);
        controller.watch(collider.subscribe());

        cx.attach(player, GameComponent::Player(controller));
        cx.attach(player, GameComponent::Sprite(SpriteRenderer::new("player")));
        cx.attach(player, GameComponent::Collider(collider));
    }

    /// Enter GameOver: drop the dead player's channel, clear the field.
    fn game_over(&mut self, cx: &mut GameCx<'_>) {
        log::info!("game over after {:.1}s", cx.session.time_alive);
        cx.session.state = GameState::GameOver;
        self.deaths = None;
        for id in cx.registry.entities_with::<Asteroid>() {
            cx.destroy(id);
        }
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}
