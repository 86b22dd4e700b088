//! Free numerical helpers used by the bounding-volume pipeline.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::eigen::{orthonormalize, symmetric_eigenvectors};

mod center;
mod cov;
mod eigen;
