//! Interpolation utilities

use math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Describes a type that can be interpolated with barycentric coordinates.
///
/// This is required for any rasterization to occur, since every varying is
/// reconstructed per-fragment as a weighted sum of its three vertex values.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;
}

impl Interpolate for f32 {
    #[inline(always)]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        x1 * u + x2 * v + x3 * w
    }
}

macro_rules! impl_interpolate {
    ($($name:ident),+) => {$(
        impl Interpolate for $name<f32> {
            #[inline]
            fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
                *x1 * u + *x2 * v + *x3 * w
            }
        }
    )+};
}

impl_interpolate!(Vec2, Vec3, Vec4, Mat2, Mat3, Mat4);
