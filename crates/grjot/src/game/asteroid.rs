//! Asteroids: spawned on a ring, drifting across the screen, aging out.

use rand::Rng;

use crate::counter::Counter;
use crate::entity::EntityId;
use crate::math::{random_point_on_circle, Vec2};

use super::collider::CircleCollider;
use super::sprite::SpriteRenderer;
use super::{GameComponent, GameCx};

/// Seconds before an asteroid removes itself.
pub const LIFETIME: f32 = 10.0;
/// Drift speed range in pixels per second.
pub const MIN_SPEED: f32 = 100.0;
pub const MAX_SPEED: f32 = 250.0;
/// Degrees per second of spin per pixel per second of speed.
pub const SPIN_PER_SPEED: f32 = 0.5;
/// Radius of the ring the trajectory aims through, around screen center.
pub const AIM_RADIUS: f32 = 100.0;
/// Collision radius.
pub const RADIUS: f32 = 24.0;

/// Straight-line drift with speed-proportional spin and a lifetime clock.
pub struct Asteroid {
    velocity: Vec2,
    spin: f32,
    lifetime: Counter,
}

impl Asteroid {
    pub fn new(velocity: Vec2) -> Self {
        Self {
            velocity,
            spin: velocity.length() * SPIN_PER_SPEED,
            lifetime: Counter::new(LIFETIME),
        }
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        let dt = cx.dt();
        if let Some(node) = cx.node_mut() {
            node.position += self.velocity * dt;
            node.rotation += self.spin * dt;
        }
        if self.lifetime.advance(dt) {
            cx.destroy(cx.id);
        }
    }
}

/// Create one asteroid entity just off screen, aimed loosely at the center.
///
/// The spawn point sits on a circle big enough to clear the screen corners;
/// the aim point sits on a small circle around the center, which converges
/// the trajectories without making them identical.
pub fn spawn(cx: &mut GameCx<'_>, rng: &mut impl Rng) -> EntityId {
    let center = cx.screen_center();
    let outer = cx.screen_size().length() / 2.0;
    let from = random_point_on_circle(center, outer, rng);
    let aim = random_point_on_circle(center, AIM_RADIUS, rng);
    let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
    let velocity = (aim - from).normalize_or_zero() * speed;

    let id = cx.registry.create_named("Asteroid");
    if let Some(node) = cx.registry.node_mut(id) {
        node.position = from;
    }
    cx.attach(id, GameComponent::Asteroid(Asteroid::new(velocity)));
    cx.attach(id, GameComponent::Sprite(SpriteRenderer::new("asteroid")));
    cx.attach(id, GameComponent::Collider(CircleCollider::new(RADIUS)));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::headless::HeadlessFrontend;

    #[test]
    fn drifts_and_spins_proportionally_to_speed() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        frontend.delta = 1.0;

        let id = app.registry_mut().create();
        app.registry_mut()
            .attach(id, GameComponent::Asteroid(Asteroid::new(Vec2::new(200.0, 0.0))));

        app.frame(&mut frontend);
        let node = app.registry().node(id).unwrap();
        assert_eq!(node.position, Vec2::new(200.0, 0.0));
        assert!((node.rotation - 200.0 * SPIN_PER_SPEED).abs() < 0.001);
    }

    #[test]
    fn removes_itself_when_the_lifetime_expires() {
        let mut app: App<GameComponent> = App::default();
        let mut frontend = HeadlessFrontend::new();
        frontend.delta = LIFETIME / 2.0;

        let id = app.registry_mut().create();
        app.registry_mut()
            .attach(id, GameComponent::Asteroid(Asteroid::new(Vec2::ZERO)));

        app.frame(&mut frontend);
        assert!(app.registry().is_alive(id));
        app.frame(&mut frontend);
        assert!(!app.registry().is_alive(id));
    }

    #[test]
    fn spawn_lands_on_the_outer_ring_with_a_bounded_speed() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut registry: crate::registry::Registry<GameComponent> = crate::registry::Registry::new();
        let mut frontend = HeadlessFrontend::new();
        let mut rng = SmallRng::seed_from_u64(11);
        let assets = crate::asset::TextureStore::new();
        let mut session = crate::game::Session::default();

        // Spawn a few through a hand-built context to check the geometry.
        let host = registry.create();
        let mut cx = crate::context::Cx {
            id: host,
            registry: &mut registry,
            assets: &assets,
            frontend: &mut frontend,
            session: &mut session,
            frame: 0,
        };

        let center = Vec2::new(600.0, 500.0);
        let outer = cx.screen_size().length() / 2.0;
        for _ in 0..8 {
            let id = spawn(&mut cx, &mut rng);
            let position = cx.registry.node(id).unwrap().position;
            assert!((position.distance(center) - outer).abs() < 0.01);
            assert!(cx.registry.find::<Asteroid>(id).is_some());
            assert!(cx.registry.find::<CircleCollider>(id).is_some());
            assert!(cx.registry.find::<SpriteRenderer>(id).is_some());
        }
    }
}
