//! GLSL built-in functions
//!
//! Every function here applies element-wise, accepting scalars, vectors and
//! matrices alike through the [`ComponentMap`](trait.ComponentMap.html)
//! machinery, so `sin(v)` works whether `v` is an `f32` or a `Vec3<f32>`.
//! The comparison functions return boolean shapes which reduce through
//! [`all`](fn.all.html) / [`any`](fn.any.html).

use num_traits::Float;

use super::matrix::{Mat2, Mat3, Mat4};
use super::vector::{Vec2, Vec3, Vec4};

/// Component-wise mapping over a scalar, vector or matrix.
///
/// `Output` is the same shape with components replaced by `U`, which is how
/// the comparison functions produce boolean vectors from float ones.
pub trait ComponentMap<U>: Sized {
    /// The scalar component type.
    type Comp;
    /// The same shape with components of type `U`.
    type Output;

    fn map<F>(self, f: F) -> Self::Output where F: FnMut(Self::Comp) -> U;
    fn zip<F>(self, rhs: Self, f: F) -> Self::Output where F: FnMut(Self::Comp, Self::Comp) -> U;
}

macro_rules! scalar_component_map {
    ($($t:ty),+) => {$(
        impl<U> ComponentMap<U> for $t {
            type Comp = $t;
            type Output = U;

            #[inline]
            fn map<F>(self, mut f: F) -> U where F: FnMut($t) -> U {
                f(self)
            }

            #[inline]
            fn zip<F>(self, rhs: $t, mut f: F) -> U where F: FnMut($t, $t) -> U {
                f(self, rhs)
            }
        }
    )+};
}

scalar_component_map!(f32, f64);

macro_rules! vector_component_map {
    ($($name:ident { $($field:ident),+ })+) => {$(
        impl<T, U> ComponentMap<U> for $name<T> {
            type Comp = T;
            type Output = $name<U>;

            #[inline]
            fn map<F>(self, mut f: F) -> $name<U> where F: FnMut(T) -> U {
                $name { $($field: f(self.$field)),+ }
            }

            #[inline]
            fn zip<F>(self, rhs: Self, mut f: F) -> $name<U> where F: FnMut(T, T) -> U {
                $name { $($field: f(self.$field, rhs.$field)),+ }
            }
        }
    )+};
}

vector_component_map! {
    Vec2 { x, y }
    Vec3 { x, y, z }
    Vec4 { x, y, z, w }
}

macro_rules! matrix_component_map {
    ($($name:ident { $($idx:tt),+ })+) => {$(
        impl<T, U> ComponentMap<U> for $name<T> where T: Copy {
            type Comp = T;
            type Output = $name<U>;

            #[inline]
            fn map<F>(self, mut f: F) -> $name<U> where F: FnMut(T) -> U {
                $name { cols: [$(self.cols[$idx].map(|c| f(c))),+] }
            }

            #[inline]
            fn zip<F>(self, rhs: Self, mut f: F) -> $name<U> where F: FnMut(T, T) -> U {
                $name { cols: [$(self.cols[$idx].zip(rhs.cols[$idx], |a, b| f(a, b))),+] }
            }
        }
    )+};
}

matrix_component_map! {
    Mat2 { 0, 1 }
    Mat3 { 0, 1, 2 }
    Mat4 { 0, 1, 2, 3 }
}

/// Boolean reduction over vectors and matrices of `bool`.
pub trait Reduce {
    /// True when every component is true.
    fn all(&self) -> bool;
    /// True when any component is true.
    fn any(&self) -> bool;
}

macro_rules! vector_reduce {
    ($($name:ident { $($field:ident),+ })+) => {$(
        impl Reduce for $name<bool> {
            #[inline]
            fn all(&self) -> bool {
                $(self.$field)&&+
            }

            #[inline]
            fn any(&self) -> bool {
                $(self.$field)||+
            }
        }
    )+};
}

vector_reduce! {
    Vec2 { x, y }
    Vec3 { x, y, z }
    Vec4 { x, y, z, w }
}

macro_rules! matrix_reduce {
    ($($name:ident),+) => {$(
        impl Reduce for $name<bool> {
            #[inline]
            fn all(&self) -> bool {
                self.cols.iter().all(Reduce::all)
            }

            #[inline]
            fn any(&self) -> bool {
                self.cols.iter().any(Reduce::any)
            }
        }
    )+};
}

matrix_reduce!(Mat2, Mat3, Mat4);

/// True when every component of the boolean shape is true.
#[inline]
pub fn all<V>(v: V) -> bool where V: Reduce {
    Reduce::all(&v)
}

/// True when any component of the boolean shape is true.
#[inline]
pub fn any<V>(v: V) -> bool where V: Reduce {
    Reduce::any(&v)
}

macro_rules! map_fn {
    ($(#[$attr:meta])* $name:ident, $f:expr) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<T, V>(v: V) -> V::Output where T: Float, V: ComponentMap<T, Comp = T> {
            v.map($f)
        }
    };
}

macro_rules! zip_fn {
    ($(#[$attr:meta])* $name:ident, $f:expr) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<T, V>(u: V, v: V) -> V::Output where T: Float, V: ComponentMap<T, Comp = T> {
            u.zip(v, $f)
        }
    };
}

macro_rules! compare_fn {
    ($(#[$attr:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<T, V>(u: V, v: V) -> V::Output where T: $bound, V: ComponentMap<bool, Comp = T> {
            u.zip(v, |a, b| a $op b)
        }
    };
}

map_fn!(/// Degrees to radians, component-wise.
    radians, |x| x.to_radians());
map_fn!(/// Radians to degrees, component-wise.
    degrees, |x| x.to_degrees());

map_fn!(/// Component-wise sine.
    sin, |x| x.sin());
map_fn!(/// Component-wise cosine.
    cos, |x| x.cos());
map_fn!(/// Component-wise tangent.
    tan, |x| x.tan());
map_fn!(/// Component-wise arcsine.
    asin, |x| x.asin());
map_fn!(/// Component-wise arccosine.
    acos, |x| x.acos());
map_fn!(/// Component-wise arctangent.
    atan, |x| x.atan());
zip_fn!(/// Component-wise two-argument arctangent of `y / x`, GLSL's `atan(y, x)`.
    atan2, |y, x| y.atan2(x));

zip_fn!(/// Component-wise `x` raised to the power `y`.
    pow, |x, y| x.powf(y));
map_fn!(/// Component-wise natural exponential.
    exp, |x| x.exp());
map_fn!(/// Component-wise natural logarithm.
    log, |x| x.ln());
map_fn!(/// Component-wise base-2 exponential.
    exp2, |x| x.exp2());
map_fn!(/// Component-wise base-2 logarithm.
    log2, |x| x.log2());
map_fn!(/// Component-wise square root.
    sqrt, |x| x.sqrt());
map_fn!(/// Component-wise `1 / sqrt(x)`, GLSL's `inversesqrt`.
    inverse_sqrt, |x| x.sqrt().recip());

map_fn!(/// Component-wise absolute value.
    abs, |x| x.abs());
map_fn!(/// Component-wise floor.
    floor, |x| x.floor());
map_fn!(/// Component-wise ceiling.
    ceil, |x| x.ceil());
map_fn!(/// Component-wise `x - floor(x)`; unlike `f32::fract` this is
    /// non-negative for negative inputs, matching GLSL.
    fract, |x| x - x.floor());
zip_fn!(/// Component-wise `x - y * floor(x / y)`, GLSL's `mod`.
    modulo, |x, y| x - y * (x / y).floor());
zip_fn!(/// Component-wise minimum.
    min, |x, y| x.min(y));
zip_fn!(/// Component-wise maximum.
    max, |x, y| x.max(y));

/// Component-wise sign: 1 for positive, -1 for negative, 0 otherwise.
#[inline]
pub fn sign<T, V>(v: V) -> V::Output where T: Float, V: ComponentMap<T, Comp = T> {
    v.map(|x| {
        if x > T::zero() {
            T::one()
        } else if x < T::zero() {
            -T::one()
        } else {
            T::zero()
        }
    })
}

compare_fn!(/// Component-wise `<`, producing a boolean shape.
    less_than, PartialOrd, <);
compare_fn!(/// Component-wise `<=`, producing a boolean shape.
    less_than_equal, PartialOrd, <=);
compare_fn!(/// Component-wise `>`, producing a boolean shape.
    greater_than, PartialOrd, >);
compare_fn!(/// Component-wise `>=`, producing a boolean shape.
    greater_than_equal, PartialOrd, >=);
compare_fn!(/// Component-wise `==`, producing a boolean shape.
    equal, PartialEq, ==);
compare_fn!(/// Component-wise `!=`, producing a boolean shape.
    not_equal, PartialEq, !=);
