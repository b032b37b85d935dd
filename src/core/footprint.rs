// footprint.rs - Near-plane footprint of the camera, used as occlusion probe targets

use glam::Vec3;

use crate::config::Lens;

/// Points per footprint: four near-plane corners plus the center probe
pub const FOOTPRINT_POINTS: usize = 5;

const MIN_ASPECT: f32 = 1e-6;

/// World-space probe points for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintSample {
    /// top-left, top-right, bottom-left, bottom-right, center
    pub points: [Vec3; FOOTPRINT_POINTS],
}

impl FootprintSample {
    pub fn top_left(&self) -> Vec3 {
        self.points[0]
    }

    pub fn top_right(&self) -> Vec3 {
        self.points[1]
    }

    pub fn bottom_left(&self) -> Vec3 {
        self.points[2]
    }

    pub fn bottom_right(&self) -> Vec3 {
        self.points[3]
    }

    pub fn center(&self) -> Vec3 {
        self.points[4]
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }
}

/// Orthonormal camera basis `(right, up)` for a forward direction, Y-up world.
/// Falls back to world X/Z when looking straight up or down.
pub fn camera_basis(forward: Vec3) -> (Vec3, Vec3) {
    let right = forward
        .cross(Vec3::Y)
        .try_normalize()
        .unwrap_or_else(|| if forward.y >= 0.0 { Vec3::X } else { Vec3::NEG_X });
    let up = right.cross(forward).normalize_or_zero();
    let up = if up == Vec3::ZERO { Vec3::Z } else { up };
    (right, up)
}

/// Half extents `(x, y)` of the near-plane rectangle.
///
/// `x = tan(fov / fov_scale) * near`, `y = x / |aspect|`. A zero or non-finite
/// aspect is treated as square.
pub fn near_plane_extents(lens: &Lens, fov_scale: f32) -> (f32, f32) {
    let z = lens.near_clip;
    let x = (lens.fov_degrees.to_radians() / fov_scale).tan() * z;
    let x = if x.is_finite() { x } else { 0.0 };

    let aspect = if lens.aspect.is_finite() && lens.aspect.abs() > MIN_ASPECT {
        lens.aspect.abs()
    } else {
        1.0
    };
    (x, x / aspect)
}

/// Sample the footprint for a camera at `position` facing `forward`.
///
/// Corners sit at camera-local `(±x, ±y, -z)` with the camera looking down
/// local -Z, i.e. on the near plane in front of the lens. The fifth point is one
/// unit behind the camera.
pub fn sample(position: Vec3, forward: Vec3, lens: &Lens, fov_scale: f32) -> FootprintSample {
    let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
    let (right, up) = camera_basis(forward);
    let (x, y) = near_plane_extents(lens, fov_scale);
    let z = lens.near_clip;

    let corner = |sx: f32, sy: f32| position + right * (sx * x) + up * (sy * y) + forward * z;

    FootprintSample {
        points: [
            corner(-1.0, 1.0),
            corner(1.0, 1.0),
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            position - forward,
        ],
    }
}
