use glam::Vec3;

use super::AABB;

/// Hits closer than this are treated as self-intersections of the ray origin
const MIN_HIT_DISTANCE: f32 = 1e-4;

/// Half-line with a unit direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray from `origin` through `point`.
    /// Returns `None` when the two points coincide (no direction to cast along).
    pub fn towards(origin: Vec3, point: Vec3) -> Option<Self> {
        let direction = (point - origin).try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Slab test. Returns the entry distance, or the exit distance when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &AABB) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Clamp near-zero components so the reciprocal stays finite
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(inv(self.direction.x), inv(self.direction.y), inv(self.direction.z));

        let t_min = (aabb.min - self.origin) * inv_dir;
        let t_max = (aabb.max - self.origin) * inv_dir;

        let t_near = t_min.min(t_max).max_element();
        let t_far = t_min.max(t_max).min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        let t = if t_near < 0.0 { t_far } else { t_near };
        (t > MIN_HIT_DISTANCE).then_some(t)
    }

    /// Nearest positive intersection with a sphere
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let half_b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;

        // direction is unit length, so a == 1
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        [-half_b - sqrt_d, -half_b + sqrt_d]
            .into_iter()
            .find(|&t| t > MIN_HIT_DISTANCE)
    }
}
