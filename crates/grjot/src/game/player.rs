//! The player ship: rotate, thrust, die.

use crate::events::{Publisher, Subscription};
use crate::frontend::Key;
use crate::math::{Rect, Vec2};

use super::collider::Contact;
use super::GameCx;

/// Degrees per second under A/D.
pub const ROTATE_SPEED: f32 = 200.0;
/// Pixels per second under W, along the ship's facing.
pub const THRUST_SPEED: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Died,
}

/// Keyboard steering plus the two ways to die: leaving the screen, or a
/// contact arriving from the ship's own collider.
pub struct PlayerController {
    deaths: Publisher<PlayerEvent>,
    contacts: Option<Subscription<Contact>>,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            deaths: Publisher::new(),
            contacts: None,
        }
    }

    /// Listen for this player's death.
    pub fn subscribe(&mut self) -> Subscription<PlayerEvent> {
        self.deaths.subscribe()
    }

    /// Wire in the mailbox of the ship's collider.
    pub fn watch(&mut self, contacts: Subscription<Contact>) {
        self.contacts = Some(contacts);
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        let dt = cx.dt();
        let left = cx.pressed(Key::A);
        let right = cx.pressed(Key::D);
        let thrust = cx.pressed(Key::W);
        let screen = Rect::from_size(cx.screen_size());

        let Some(node) = cx.node_mut() else {
            return;
        };
        if left {
            node.rotation -= ROTATE_SPEED * dt;
        }
        if right {
            node.rotation += ROTATE_SPEED * dt;
        }
        if thrust {
            let forward = Vec2::from_angle(node.rotation.to_radians());
            node.position += forward * THRUST_SPEED * dt;
        }
        log::trace!(
            "player at ({:.1}, {:.1}) rotation {:.1}",
            node.position.x,
            node.position.y,
            node.rotation
        );
        let position = node.position;

        let hit = self
            .contacts
            .as_mut()
            .is_some_and(|contacts| contacts.try_recv().is_some());
        if hit || !screen.contains(position) {
            self.die(cx);
        }
    }

    /// Publish the death and queue this entity for removal.
    fn die(&mut self, cx: &mut GameCx<'_>) {
        log::info!("player died");
        self.deaths.publish(PlayerEvent::Died);
        cx.destroy(cx.id);
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::game::GameComponent;
    use crate::headless::HeadlessFrontend;

    fn spawn_player(app: &mut App<GameComponent>) -> (crate::entity::EntityId, Subscription<PlayerEvent>) {
        let id = app.registry_mut().create_named("Player");
        app.registry_mut().node_mut(id).unwrap().position = Vec2::new(600.0, 500.0);
        let mut controller = PlayerController::new();
        let deaths = controller.subscribe();
        app.registry_mut().attach(id, GameComponent::Player(controller));
        (id, deaths)
    }

    #[test]
    fn a_and_d_rotate_at_200_degrees_per_second() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        frontend.delta = 0.1;
        let (id, _deaths) = spawn_player(&mut app);

        frontend.press(Key::D);
        app.frame(&mut frontend);
        let rotation = app.registry().node(id).unwrap().rotation;
        assert!((rotation - 20.0).abs() < 0.001);

        frontend.release(Key::D);
        frontend.press(Key::A);
        app.frame(&mut frontend);
        app.frame(&mut frontend);
        let rotation = app.registry().node(id).unwrap().rotation;
        assert!((rotation + 20.0).abs() < 0.001);
    }

    #[test]
    fn thrust_moves_along_the_facing() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        frontend.delta = 0.5;
        let (id, _deaths) = spawn_player(&mut app);
        app.registry_mut().node_mut(id).unwrap().rotation = 90.0;

        frontend.press(Key::W);
        app.frame(&mut frontend);

        // Facing 90°: 400 px/s for half a second, straight down the y axis.
        let position = app.registry().node(id).unwrap().position;
        assert!((position.x - 600.0).abs() < 0.001);
        assert!((position.y - 700.0).abs() < 0.001);
    }

    #[test]
    fn leaving_the_screen_is_fatal() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        let (id, mut deaths) = spawn_player(&mut app);
        app.frame(&mut frontend);
        assert!(deaths.is_empty());

        app.registry_mut().node_mut(id).unwrap().position = Vec2::new(-10.0, 500.0);
        app.frame(&mut frontend);

        // Death publishes and the deferred destroy lands in the same frame.
        assert_eq!(deaths.try_recv(), Some(PlayerEvent::Died));
        assert!(!app.registry().is_alive(id));
    }

    #[test]
    fn a_contact_from_the_watched_collider_is_fatal() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        let id = app.registry_mut().create_named("Player");
        app.registry_mut().node_mut(id).unwrap().position = Vec2::new(600.0, 500.0);

        let mut collider = super::super::collider::CircleCollider::new(15.0);
        let mut controller = PlayerController::new();
        controller.watch(collider.subscribe());
        let mut deaths = controller.subscribe();
        app.registry_mut().attach(id, GameComponent::Player(controller));
        app.registry_mut().attach(id, GameComponent::Collider(collider));

        // An overlapping asteroid-sized collider right on top of the player.
        let other = app.registry_mut().create();
        app.registry_mut().node_mut(other).unwrap().position = Vec2::new(610.0, 500.0);
        app.registry_mut().attach(
            other,
            GameComponent::Collider(super::super::collider::CircleCollider::new(24.0)),
        );

        // The other collider's scan publishes the contact; the player reads
        // its mailbox during an update and dies.
        app.frame(&mut frontend);
        app.frame(&mut frontend);
        assert_eq!(deaths.try_recv(), Some(PlayerEvent::Died));
        assert!(!app.registry().is_alive(id));
    }
}
