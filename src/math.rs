//! Aliases for the mathematical types used throughout this crate.

pub use na::{Matrix3, Point3, Vector3};

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The square matrix type.
pub use Matrix3 as Matrix;
