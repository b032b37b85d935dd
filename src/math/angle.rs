use glam::{EulerRot, Quat};

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Rotation from pitch (about X) then yaw (about Y), both in degrees.
/// Roll is always zero for an orbiting camera.
pub fn orbit_rotation(pitch_degrees: f32, yaw_degrees: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw_degrees.to_radians(),
        pitch_degrees.to_radians(),
        0.0,
    )
}
