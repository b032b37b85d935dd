mod aabb;
mod angle;
mod ray;

pub use aabb::AABB;
pub use angle::{orbit_rotation, wrap_degrees};
pub use ray::Ray;
