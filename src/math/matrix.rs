//! Fixed-size square matrix types
//!
//! Matrices are tuples of column vectors, indexed `m[col][row]`, and all
//! products follow the column-major convention `(M * v)[i] = Σ_j M[j][i] * v[j]`.

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use num_traits::{One, Zero};

use super::vector::{Vec2, Vec3, Vec4};

/// A 2×2 matrix of column vectors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat2<T> {
    pub cols: [Vec2<T>; 2],
}

/// A 3×3 matrix of column vectors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat3<T> {
    pub cols: [Vec3<T>; 3],
}

/// A 4×4 matrix of column vectors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat4<T> {
    pub cols: [Vec4<T>; 4],
}

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $dim:expr) => {
        impl<T> $name<T> where T: Copy {
            /// Broadcasts a single value into every component.
            #[inline]
            pub fn splat(value: T) -> $name<T> {
                $name { cols: [$vec::splat(value); $dim] }
            }
        }

        impl<T> $name<T> where T: Zero + One + Copy {
            /// The identity matrix.
            pub fn identity() -> $name<T> {
                let mut m = $name::splat(T::zero());

                for i in 0..$dim {
                    m.cols[i][i] = T::one();
                }

                m
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = $vec<T>;

            #[inline]
            fn index(&self, index: usize) -> &$vec<T> {
                &self.cols[index]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                &mut self.cols[index]
            }
        }

        impl<T> Add for $name<T> where T: Add<Output = T> + Copy {
            type Output = $name<T>;

            #[inline]
            fn add(self, rhs: $name<T>) -> $name<T> {
                let mut m = self;

                for i in 0..$dim {
                    m.cols[i] = m.cols[i] + rhs.cols[i];
                }

                m
            }
        }

        impl<T> Sub for $name<T> where T: Sub<Output = T> + Copy {
            type Output = $name<T>;

            #[inline]
            fn sub(self, rhs: $name<T>) -> $name<T> {
                let mut m = self;

                for i in 0..$dim {
                    m.cols[i] = m.cols[i] - rhs.cols[i];
                }

                m
            }
        }

        impl<T> Mul<T> for $name<T> where T: Mul<Output = T> + Copy {
            type Output = $name<T>;

            #[inline]
            fn mul(self, rhs: T) -> $name<T> {
                let mut m = self;

                for i in 0..$dim {
                    m.cols[i] = m.cols[i] * rhs;
                }

                m
            }
        }

        impl<T> Div<T> for $name<T> where T: Div<Output = T> + Copy {
            type Output = $name<T>;

            #[inline]
            fn div(self, rhs: T) -> $name<T> {
                let mut m = self;

                for i in 0..$dim {
                    m.cols[i] = m.cols[i] / rhs;
                }

                m
            }
        }

        impl<T> Mul for $name<T> where T: Zero + Mul<Output = T> + Copy {
            type Output = $name<T>;

            fn mul(self, rhs: $name<T>) -> $name<T> {
                let mut m = $name::splat(T::zero());

                for i in 0..$dim {
                    for j in 0..$dim {
                        for k in 0..$dim {
                            m.cols[i][k] = m.cols[i][k] + self.cols[j][k] * rhs.cols[i][j];
                        }
                    }
                }

                m
            }
        }

        impl<T> Mul<$vec<T>> for $name<T> where T: Zero + Mul<Output = T> + Copy {
            type Output = $vec<T>;

            fn mul(self, rhs: $vec<T>) -> $vec<T> {
                let mut v = $vec::splat(T::zero());

                for i in 0..$dim {
                    for j in 0..$dim {
                        v[j] = v[j] + self.cols[i][j] * rhs[i];
                    }
                }

                v
            }
        }

        impl<T> Mul<$name<T>> for $vec<T> where T: Zero + Mul<Output = T> + Copy {
            type Output = $vec<T>;

            fn mul(self, rhs: $name<T>) -> $vec<T> {
                let mut v = $vec::splat(T::zero());

                for i in 0..$dim {
                    for j in 0..$dim {
                        v[i] = v[i] + self[j] * rhs.cols[i][j];
                    }
                }

                v
            }
        }
    };
}

impl_matrix!(Mat2, Vec2, 2);
impl_matrix!(Mat3, Vec3, 3);
impl_matrix!(Mat4, Vec4, 4);

impl<T> Mat2<T> {
    #[inline]
    pub fn new(c0: Vec2<T>, c1: Vec2<T>) -> Mat2<T> {
        Mat2 { cols: [c0, c1] }
    }
}

impl<T> Mat3<T> {
    #[inline]
    pub fn new(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Mat3<T> {
        Mat3 { cols: [c0, c1, c2] }
    }
}

impl<T> Mat3<T> where T: Zero + One + Copy {
    /// Embeds a 2×2 matrix in the upper-left corner of the identity.
    pub fn from2(m: Mat2<T>) -> Mat3<T> {
        Mat3 {
            cols: [
                m.cols[0].extend(T::zero()),
                m.cols[1].extend(T::zero()),
                Vec3::new(T::zero(), T::zero(), T::one()),
            ],
        }
    }
}

impl<T> Mat4<T> {
    #[inline]
    pub fn new(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Mat4<T> {
        Mat4 { cols: [c0, c1, c2, c3] }
    }
}

impl<T> Mat4<T> where T: Zero + One + Copy {
    /// Embeds a 3×3 matrix in the upper-left corner of the identity.
    pub fn from3(m: Mat3<T>) -> Mat4<T> {
        Mat4 {
            cols: [
                m.cols[0].extend(T::zero()),
                m.cols[1].extend(T::zero()),
                m.cols[2].extend(T::zero()),
                Vec4::new(T::zero(), T::zero(), T::zero(), T::one()),
            ],
        }
    }
}
