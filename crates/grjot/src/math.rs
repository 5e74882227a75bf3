//! Math types and glam re-exports.
//!
//! We re-export the [glam](https://docs.rs/glam) vector type so users don't
//! need to depend on it directly. [`Rect`] is a pixel-space rectangle shared
//! by the sprite-sheet math, the draw interface, and screen-bounds tests.

use rand::Rng;

pub use glam::Vec2;

/// An axis-aligned rectangle in pixel space: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle anchored at the origin, e.g. the screen bounds.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// A uniformly random point on the edge of the circle around `center`.
///
/// Asteroid trajectories are built from two of these: a spawn point on a
/// large circle and an aim point on a small one.
pub fn random_point_on_circle(center: Vec2, radius: f32, rng: &mut impl Rng) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    center + Vec2::from_angle(angle) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(30.0, 30.0)));
        assert!(rect.contains(Vec2::new(20.0, 15.0)));
        assert!(!rect.contains(Vec2::new(9.9, 15.0)));
        assert!(!rect.contains(Vec2::new(20.0, 30.1)));
    }

    #[test]
    fn center_is_the_midpoint() {
        let rect = Rect::from_size(Vec2::new(1200.0, 1000.0));
        assert_eq!(rect.center(), Vec2::new(600.0, 500.0));
    }

    #[test]
    fn circle_points_sit_at_the_requested_radius() {
        let mut rng = SmallRng::seed_from_u64(7);
        let center = Vec2::new(600.0, 500.0);
        for _ in 0..32 {
            let p = random_point_on_circle(center, 250.0, &mut rng);
            assert!((p.distance(center) - 250.0).abs() < 0.01);
        }
    }
}
