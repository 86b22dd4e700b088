//! Bounding volumes.

pub use self::aabb::Aabb;
pub use self::obb::{obb_vertices, Obb};

mod aabb;
mod obb;
