extern crate nalgebra as na;

mod obb;
