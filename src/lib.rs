/*!
obb3d
=====

**obb3d** computes tight-fitting oriented bounding boxes for 3-dimensional
point clouds, written with the rust programming language.

The orientation of the box is obtained from a principal-component analysis
of the cloud: the points are reduced to their centroid and covariance
matrix, the covariance is diagonalized with Jacobi rotations, and its
eigenvectors (re-orthonormalized with Gram–Schmidt) become the box axes.
The resulting box is a good fit for most clouds but is not guaranteed to
be the smallest enclosing box.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod utils;
