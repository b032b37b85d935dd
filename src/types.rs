use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Identity of an object in the host scene
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

/// Collision layer index, `0..32`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer(pub u8);

impl Layer {
    pub const DEFAULT: Layer = Layer(0);

    fn bit(self) -> u32 {
        1u32.checked_shl(u32::from(self.0)).unwrap_or(0)
    }
}

/// Bit set of collision layers that take part in occlusion queries
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    pub const ALL: CollisionMask = CollisionMask(u32::MAX);
    pub const NONE: CollisionMask = CollisionMask(0);

    pub fn from_layers(layers: &[Layer]) -> Self {
        Self(layers.iter().fold(0, |bits, layer| bits | layer.bit()))
    }

    pub fn with(self, layer: Layer) -> Self {
        Self(self.0 | layer.bit())
    }

    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Pointer motion since the previous tick, already normalized by the host
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerDelta {
    pub x: f32,
    pub y: f32,
}

impl PointerDelta {
    pub const ZERO: PointerDelta = PointerDelta { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for PointerDelta {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// What the camera follows this tick
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetFrame {
    pub entity: EntityId,
    /// Pivot the camera orbits around and casts occlusion rays from
    pub position: Vec3,
    /// Point the camera aims at
    pub look_at: Vec3,
}

impl TargetFrame {
    pub fn new(entity: EntityId, position: Vec3, look_at: Vec3) -> Self {
        Self {
            entity,
            position,
            look_at,
        }
    }
}
