use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangular collider placed relative to the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// Besides overlap tests, the collider answers the two sensor queries the
/// agents rely on: ray intersection and circle overlap.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at its min corner.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Create a BoxCollider of the given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::new(-width * 0.5, -height * 0.5),
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// Center of the AABB in world space.
    pub fn center(&self, position: Vec2) -> Vec2 {
        let (min, max) = self.aabb(position);
        (min + max) * 0.5
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Penetration depth on each axis against another collider, or `None`
    /// when the boxes do not overlap.
    pub fn penetration(&self, position: Vec2, other: &Self, other_position: Vec2) -> Option<Vec2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        Some(Vec2::new(
            (max_a.x.min(max_b.x) - min_a.x.max(min_b.x)).max(0.0),
            (max_a.y.min(max_b.y) - min_a.y.max(min_b.y)).max(0.0),
        ))
    }

    /// Distance along `dir` from `origin` to the first point of this box,
    /// or `None` if the ray misses it within `max_distance`.
    ///
    /// `dir` must be normalized. A ray starting inside the box hits at
    /// distance 0. Hits exactly at `max_distance` count.
    pub fn ray_distance(
        &self,
        position: Vec2,
        origin: Vec2,
        dir: Vec2,
        max_distance: f32,
    ) -> Option<f32> {
        let (min, max) = self.aabb(position);
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..2 {
            let o = origin[axis];
            let d = dir[axis];
            if d.abs() < f32::EPSILON {
                // parallel to this slab
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (min[axis] - o) / d;
            let t2 = (max[axis] - o) / d;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        let t = t_near.max(0.0);
        (t <= max_distance).then_some(t)
    }

    /// Circle vs AABB overlap test. Touching counts as overlapping.
    pub fn overlaps_circle(&self, position: Vec2, center: Vec2, radius: f32) -> bool {
        let (min, max) = self.aabb(position);
        let closest = center.clamp(min, max);
        closest.distance_squared(center) <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn centered_collider_spans_both_sides() {
        let c = BoxCollider::centered(2.0, 1.0);
        let (min, max) = c.aabb(Vec2::new(10.0, 5.0));
        assert_eq!(min, Vec2::new(9.0, 4.5));
        assert_eq!(max, Vec2::new(11.0, 5.5));
        assert_eq!(c.center(Vec2::new(10.0, 5.0)), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn negative_size_is_normalized() {
        let c = BoxCollider::new(-2.0, -2.0);
        let (min, max) = c.aabb(Vec2::ZERO);
        assert_eq!(min, Vec2::new(-2.0, -2.0));
        assert_eq!(max, Vec2::ZERO);
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = BoxCollider::centered(1.0, 1.0);
        let b = BoxCollider::centered(1.0, 1.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(1.0, 0.0)));
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(0.9, 0.0)));
    }

    #[test]
    fn penetration_reports_overlap_depth() {
        let a = BoxCollider::centered(1.0, 1.0);
        let b = BoxCollider::centered(1.0, 1.0);
        let p = a.penetration(Vec2::ZERO, &b, Vec2::new(0.75, 0.9)).unwrap();
        assert!(approx_eq(p.x, 0.25));
        assert!(approx_eq(p.y, 0.1));
        assert!(a.penetration(Vec2::ZERO, &b, Vec2::new(3.0, 0.0)).is_none());
    }

    #[test]
    fn ray_hits_box_ahead() {
        let wall = BoxCollider::centered(1.0, 1.0);
        let d = wall.ray_distance(Vec2::new(3.0, 0.0), Vec2::ZERO, Vec2::X, 5.0);
        assert!(approx_eq(d.unwrap(), 2.5));
    }

    #[test]
    fn ray_respects_max_distance_inclusively() {
        let wall = BoxCollider::centered(1.0, 1.0);
        let pos = Vec2::new(3.0, 0.0);
        assert!(wall.ray_distance(pos, Vec2::ZERO, Vec2::X, 2.4).is_none());
        assert!(wall.ray_distance(pos, Vec2::ZERO, Vec2::X, 2.5).is_some());
    }

    #[test]
    fn ray_misses_box_behind_or_beside() {
        let wall = BoxCollider::centered(1.0, 1.0);
        assert!(wall
            .ray_distance(Vec2::new(-3.0, 0.0), Vec2::ZERO, Vec2::X, 10.0)
            .is_none());
        assert!(wall
            .ray_distance(Vec2::new(3.0, 2.0), Vec2::ZERO, Vec2::X, 10.0)
            .is_none());
    }

    #[test]
    fn ray_starting_inside_hits_at_zero() {
        let ground = BoxCollider::centered(4.0, 1.0);
        let d = ground.ray_distance(Vec2::ZERO, Vec2::new(0.5, 0.2), Vec2::NEG_Y, 0.6);
        assert!(approx_eq(d.unwrap(), 0.0));
    }

    #[test]
    fn downward_ray_finds_ground_top() {
        // ground tile whose top edge is at y = 0.5
        let ground = BoxCollider::centered(1.0, 1.0);
        let d = ground.ray_distance(Vec2::ZERO, Vec2::new(0.4, 0.9), Vec2::NEG_Y, 0.6);
        assert!(approx_eq(d.unwrap(), 0.4));
        let miss = ground.ray_distance(Vec2::ZERO, Vec2::new(0.6, 0.9), Vec2::NEG_Y, 0.6);
        assert!(miss.is_none());
    }

    #[test]
    fn circle_overlap_against_box() {
        let ground = BoxCollider::centered(1.0, 1.0);
        assert!(ground.overlaps_circle(Vec2::ZERO, Vec2::new(0.0, 0.6), 0.2));
        assert!(ground.overlaps_circle(Vec2::ZERO, Vec2::new(0.0, 0.7), 0.2));
        assert!(!ground.overlaps_circle(Vec2::ZERO, Vec2::new(0.0, 0.8), 0.2));
        assert!(!ground.overlaps_circle(Vec2::ZERO, Vec2::new(0.8, 0.8), 0.2));
    }
}
