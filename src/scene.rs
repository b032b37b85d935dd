use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{Ray, AABB};
use crate::traits::{QueryFilter, RayHit, RayQuery};
use crate::types::{EntityId, Layer};

pub const PLAYER_ENTITY: EntityId = EntityId(1);
pub const PLAYER_LAYER: Layer = Layer(8);
pub const GEOMETRY_LAYER: Layer = Layer::DEFAULT;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Cuboid(AABB),
    Sphere { center: Vec3, radius: f32 },
}

impl Shape {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Shape::Cuboid(ref aabb) => ray.intersect_aabb(aabb),
            Shape::Sphere { center, radius } => ray.intersect_sphere(center, radius),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub entity: EntityId,
    #[serde(default)]
    pub layer: Layer,
    #[serde(default)]
    pub tag: Option<String>,
    pub shape: Shape,
}

/// Static collision geometry answering ray queries by linear scan
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub colliders: Vec<Collider>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: EntityId, layer: Layer, shape: Shape) -> &mut Collider {
        self.colliders.push(Collider {
            entity,
            layer,
            tag: None,
            shape,
        });
        let last = self.colliders.len() - 1;
        &mut self.colliders[last]
    }

    pub fn add_box(&mut self, entity: EntityId, center: Vec3, size: Vec3) -> &mut Collider {
        self.add(entity, GEOMETRY_LAYER, Shape::Cuboid(AABB::from_center_size(center, size)))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scene")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        let scene = Self::from_json_str(&json)?;
        log::info!("Loaded {} colliders from {}", scene.colliders.len(), path.display());
        Ok(scene)
    }

    /// Courtyard with a player capsule at the origin: ground, a back wall
    /// and two pillars the camera has to dodge while orbiting.
    pub fn demo() -> Self {
        let mut scene = Scene::new();

        scene
            .add(
                PLAYER_ENTITY,
                PLAYER_LAYER,
                Shape::Sphere {
                    center: Vec3::new(0.0, 1.0, 0.0),
                    radius: 0.5,
                },
            )
            .tag = Some("Player".to_string());

        scene.add_box(EntityId(10), Vec3::new(0.0, -0.5, 0.0), Vec3::new(40.0, 1.0, 40.0)).tag =
            Some("Ground".to_string());
        scene.add_box(EntityId(11), Vec3::new(0.0, 2.0, -4.0), Vec3::new(12.0, 4.0, 0.5));
        scene.add_box(EntityId(12), Vec3::new(-3.0, 2.0, 3.0), Vec3::new(1.0, 4.0, 1.0));
        scene.add_box(EntityId(13), Vec3::new(3.0, 2.0, 3.0), Vec3::new(1.0, 4.0, 1.0));

        log::debug!("Demo scene created: {} colliders", scene.colliders.len());
        scene
    }
}

impl RayQuery for Scene {
    fn cast(&self, ray: &Ray, max_distance: f32, filter: &QueryFilter) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter(|collider| filter.accepts(collider.entity, collider.layer))
            .filter_map(|collider| {
                let distance = collider.shape.intersect(ray)?;
                (distance <= max_distance).then_some((distance, collider))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, collider)| RayHit {
                distance,
                point: ray.at(distance),
                entity: collider.entity,
                tag: collider.tag.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollisionMask;

    fn wall_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_box(EntityId(2), Vec3::new(0.0, 0.0, -3.0), Vec3::new(4.0, 4.0, 1.0));
        scene.add_box(EntityId(3), Vec3::new(0.0, 0.0, -6.0), Vec3::new(4.0, 4.0, 1.0));
        scene
    }

    #[test]
    fn test_cast_reports_nearest() {
        let ray = Ray::towards(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let hit = wall_scene().cast(&ray, 10.0, &QueryFilter::new(CollisionMask::ALL)).unwrap();
        assert_eq!(hit.entity, EntityId(2));
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_cast_respects_max_distance() {
        let ray = Ray::towards(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert!(wall_scene().cast(&ray, 2.0, &QueryFilter::new(CollisionMask::ALL)).is_none());
    }

    #[test]
    fn test_cast_respects_mask() {
        let ray = Ray::towards(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let mask = CollisionMask::from_layers(&[Layer(5)]);
        assert!(wall_scene().cast(&ray, 10.0, &QueryFilter::new(mask)).is_none());
    }

    #[test]
    fn test_cast_skips_excluded_entity() {
        let ray = Ray::towards(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let filter = QueryFilter::new(CollisionMask::ALL).excluding(EntityId(2));
        let hit = wall_scene().cast(&ray, 10.0, &filter).unwrap();
        assert_eq!(hit.entity, EntityId(3));
    }

    #[test]
    fn test_scene_json() {
        let scene = Scene::from_json_str(
            r#"{ "colliders": [
                { "entity": 4, "layer": 2, "tag": "Crate",
                  "shape": { "kind": "cuboid", "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0] } },
                { "entity": 5,
                  "shape": { "kind": "sphere", "center": [0.0, 0.0, 5.0], "radius": 1.0 } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(scene.colliders.len(), 2);
        assert_eq!(scene.colliders[0].layer, Layer(2));
        assert_eq!(scene.colliders[1].layer, Layer::DEFAULT);
        assert_eq!(
            scene.colliders[1].shape,
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, 5.0),
                radius: 1.0
            }
        );
    }

    #[test]
    fn test_demo_scene_has_player() {
        let scene = Scene::demo();
        let player = scene.colliders.iter().find(|c| c.entity == PLAYER_ENTITY).unwrap();
        assert_eq!(player.tag.as_deref(), Some("Player"));
    }
}
