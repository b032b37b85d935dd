use glam::Vec3;

use crate::math::Ray;
use crate::types::{CollisionMask, EntityId, Layer};

/// Which geometry a query may hit
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryFilter {
    pub mask: CollisionMask,
    /// Entity that is never reported as a hit
    pub exclude: Option<EntityId>,
}

impl QueryFilter {
    pub fn new(mask: CollisionMask) -> Self {
        Self { mask, exclude: None }
    }

    pub fn excluding(mut self, entity: EntityId) -> Self {
        self.exclude = Some(entity);
        self
    }

    /// True when geometry on `layer` owned by `entity` passes the filter
    pub fn accepts(&self, entity: EntityId, layer: Layer) -> bool {
        self.mask.contains(layer) && self.exclude != Some(entity)
    }
}

/// Nearest intersection reported by a [`RayQuery`]
#[derive(Clone, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    pub entity: EntityId,
    pub tag: Option<String>,
}

/// Synchronous ray intersection against a physical scene
pub trait RayQuery {
    /// Nearest hit along `ray` no farther than `max_distance`
    fn cast(&self, ray: &Ray, max_distance: f32, filter: &QueryFilter) -> Option<RayHit>;
}

impl<T: RayQuery + ?Sized> RayQuery for &T {
    fn cast(&self, ray: &Ray, max_distance: f32, filter: &QueryFilter) -> Option<RayHit> {
        (**self).cast(ray, max_distance, filter)
    }
}
