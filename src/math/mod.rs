//! GLSL-flavored linear algebra
//!
//! Fixed-size vectors and square matrices of dimension 2, 3 and 4, plus the
//! component-wise built-in functions shader code expects, so shader `main`
//! bodies read like their GLSL counterparts.
//!
//! Names follow Rust conventions where GLSL ones don't fit: `less_than` for
//! `lessThan`, `inverse_sqrt` for `inversesqrt`, `modulo` for `mod` (a Rust
//! keyword) and `atan2` for two-argument `atan`.

pub mod vector;
pub mod matrix;
pub mod funcs;

pub use self::vector::{Vec2, Vec3, Vec4};
pub use self::matrix::{Mat2, Mat3, Mat4};
pub use self::funcs::*;
