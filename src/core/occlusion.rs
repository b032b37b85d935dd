use glam::Vec3;

use super::footprint::FootprintSample;
use crate::config::SelfHitPolicy;
use crate::math::Ray;
use crate::traits::{Diagnostics, QueryFilter, RayQuery};
use crate::types::{CollisionMask, EntityId};

/// Hits within this much of the minimum distance are not clamped
pub const MIN_DISTANCE_EPSILON: f32 = 0.005;

/// Outcome of probing the footprint for blocking geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusionResult {
    pub is_colliding: bool,
    /// Only meaningful when `is_colliding`; otherwise the un-occluded maximum
    pub adjusted_distance: f32,
}

impl OcclusionResult {
    pub fn clear(max_distance: f32) -> Self {
        Self {
            is_colliding: false,
            adjusted_distance: max_distance,
        }
    }

    /// Distance the camera should sit at given the un-occluded follow distance
    pub fn distance_or(&self, follow_distance: f32) -> f32 {
        if self.is_colliding {
            self.adjusted_distance
        } else {
            follow_distance
        }
    }
}

/// Inputs for one occlusion query
#[derive(Debug, Clone, Copy)]
pub struct OcclusionQuery {
    pub target_position: Vec3,
    pub target_entity: EntityId,
    /// Ray length; the full follow distance
    pub max_distance: f32,
    pub minimum_distance: f32,
    pub mask: CollisionMask,
    pub self_hit: SelfHitPolicy,
}

/// Cast from the target toward every footprint point and fold the hits into
/// the nearest distance, floored at `minimum_distance`.
pub fn resolve(
    query: &OcclusionQuery,
    footprint: &FootprintSample,
    world: &dyn RayQuery,
    diagnostics: &mut dyn Diagnostics,
) -> OcclusionResult {
    let filter = match query.self_hit {
        SelfHitPolicy::Exclude => QueryFilter::new(query.mask).excluding(query.target_entity),
        SelfHitPolicy::Include => QueryFilter::new(query.mask),
    };

    let nearest = footprint
        .iter()
        .filter_map(|point| Ray::towards(query.target_position, point))
        .filter_map(|ray| world.cast(&ray, query.max_distance, &filter))
        .filter(|hit| {
            if hit.entity != query.target_entity {
                return true;
            }
            match query.self_hit {
                // Providers that ignore the exclusion still can't shorten the arm
                SelfHitPolicy::Exclude => false,
                SelfHitPolicy::Include => {
                    diagnostics.self_hit(hit);
                    true
                }
            }
        })
        .map(|hit| hit.distance)
        // Occlusion only ever pulls the camera in
        .filter(|distance| distance.is_finite() && *distance <= query.max_distance)
        .reduce(f32::min);

    let Some(nearest) = nearest else {
        return OcclusionResult::clear(query.max_distance);
    };

    let adjusted = if nearest < query.minimum_distance - MIN_DISTANCE_EPSILON {
        query.minimum_distance
    } else {
        nearest
    };
    diagnostics.occluded(adjusted);

    OcclusionResult {
        is_colliding: true,
        adjusted_distance: adjusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{NullDiagnostics, RayHit, RecordingDiagnostics};

    /// Answers every cast from a fixed list, one entry per call
    struct Scripted {
        hits: Vec<Option<(f32, EntityId)>>,
        calls: std::cell::Cell<usize>,
    }

    impl Scripted {
        fn new(hits: Vec<Option<(f32, EntityId)>>) -> Self {
            Self {
                hits,
                calls: std::cell::Cell::new(0),
            }
        }
    }

    impl RayQuery for Scripted {
        fn cast(&self, ray: &Ray, max_distance: f32, filter: &QueryFilter) -> Option<RayHit> {
            let index = self.calls.get();
            self.calls.set(index + 1);
            let (distance, entity) = self.hits.get(index).copied().flatten()?;
            if distance > max_distance || filter.exclude == Some(entity) {
                return None;
            }
            Some(RayHit {
                distance,
                point: ray.at(distance),
                entity,
                tag: None,
            })
        }
    }

    const TARGET: EntityId = EntityId(1);
    const WALL: EntityId = EntityId(2);

    fn footprint() -> FootprintSample {
        crate::core::footprint::sample(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, &Default::default(), 2.0)
    }

    fn query(self_hit: SelfHitPolicy) -> OcclusionQuery {
        OcclusionQuery {
            target_position: Vec3::ZERO,
            target_entity: TARGET,
            max_distance: 5.0,
            minimum_distance: 1.0,
            mask: CollisionMask::ALL,
            self_hit,
        }
    }

    #[test]
    fn test_no_hits_not_colliding() {
        let world = Scripted::new(vec![]);
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &world, &mut NullDiagnostics);
        assert!(!result.is_colliding);
        assert_eq!(result.distance_or(5.0), 5.0);
        assert_eq!(world.calls.get(), 5, "one ray per footprint point");
    }

    #[test]
    fn test_nearest_hit_wins() {
        let world = Scripted::new(vec![Some((3.0, WALL)), None, Some((1.2, WALL)), None, None]);
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &world, &mut NullDiagnostics);
        assert!(result.is_colliding);
        assert_eq!(result.adjusted_distance, 1.2);
    }

    #[test]
    fn test_hit_below_minimum_clamps() {
        let world = Scripted::new(vec![None, None, None, None, Some((0.5, WALL))]);
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &world, &mut NullDiagnostics);
        assert!(result.is_colliding);
        assert_eq!(result.adjusted_distance, 1.0);
    }

    #[test]
    fn test_hit_within_epsilon_kept() {
        let world = Scripted::new(vec![Some((0.997, WALL))]);
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &world, &mut NullDiagnostics);
        assert_eq!(result.adjusted_distance, 0.997);
    }

    /// Reports the same hit for every cast, ignoring the ray length
    struct Overreaching(f32);

    impl RayQuery for Overreaching {
        fn cast(&self, ray: &Ray, _max_distance: f32, _filter: &QueryFilter) -> Option<RayHit> {
            Some(RayHit {
                distance: self.0,
                point: ray.at(self.0),
                entity: WALL,
                tag: None,
            })
        }
    }

    #[test]
    fn test_hit_past_ray_length_ignored() {
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &Overreaching(8.0), &mut NullDiagnostics);
        assert!(!result.is_colliding);
        assert_eq!(result.adjusted_distance, 5.0);
    }

    #[test]
    fn test_hit_at_ray_length_kept() {
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &Overreaching(5.0), &mut NullDiagnostics);
        assert!(result.is_colliding);
        assert_eq!(result.adjusted_distance, 5.0);
    }

    #[test]
    fn test_self_hit_excluded() {
        let world = Scripted::new(vec![Some((0.2, TARGET)), Some((4.0, WALL))]);
        let result = resolve(&query(SelfHitPolicy::Exclude), &footprint(), &world, &mut NullDiagnostics);
        assert_eq!(result.adjusted_distance, 4.0);
    }

    #[test]
    fn test_self_hit_included_and_reported() {
        let world = Scripted::new(vec![Some((2.0, TARGET)), Some((4.0, WALL))]);
        let mut diagnostics = RecordingDiagnostics::default();
        let result = resolve(&query(SelfHitPolicy::Include), &footprint(), &world, &mut diagnostics);
        assert_eq!(result.adjusted_distance, 2.0);
        assert_eq!(diagnostics.self_hits.len(), 1);
        assert_eq!(diagnostics.occlusions, vec![2.0]);
    }
}
