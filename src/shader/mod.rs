//! The shader slot model
//!
//! A shader declares named binding points (slots) for uniforms, attributes
//! and varyings, plus a `main` procedure that reads them as plain struct
//! fields. The [`vertex_shader!`](../macro.vertex_shader.html) and
//! [`fragment_shader!`](../macro.fragment_shader.html) macros generate the
//! struct together with its [`Shader`](trait.Shader.html) implementation, so
//! the linker can enumerate slots by kind and the pipeline can move values in
//! and out of an invocation frame by slot index. Index resolution happens
//! once at link time; per-invocation binding never compares names.

use interpolate::Interpolate;
use math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

#[macro_use]
mod macros;

/// The three kinds of binding points a shader can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// One value per draw call, shared by both shader stages
    Uniform,
    /// One value per input vertex, read by the vertex shader
    Attribute,
    /// Written per-vertex, interpolated per-fragment
    Varying,
}

/// Component layout of a slot, one variant per math type allowed in a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

/// A named binding point declared by a shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub name: &'static str,
    pub ty: SlotType,
}

/// A single slot value in transit between host data, invocation frames and
/// the varying staging buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(f32),
    Vec2(Vec2<f32>),
    Vec3(Vec3<f32>),
    Vec4(Vec4<f32>),
    Mat2(Mat2<f32>),
    Mat3(Mat3<f32>),
    Mat4(Mat4<f32>),
}

impl Value {
    /// The slot type this value satisfies.
    pub fn ty(&self) -> SlotType {
        match *self {
            Value::Float(_) => SlotType::Float,
            Value::Vec2(_) => SlotType::Vec2,
            Value::Vec3(_) => SlotType::Vec3,
            Value::Vec4(_) => SlotType::Vec4,
            Value::Mat2(_) => SlotType::Mat2,
            Value::Mat3(_) => SlotType::Mat3,
            Value::Mat4(_) => SlotType::Mat4,
        }
    }

    /// Scales every component by `w`, used to stage varyings as `value / w_clip`.
    pub(crate) fn scale(self, w: f32) -> Value {
        match self {
            Value::Float(x) => Value::Float(x * w),
            Value::Vec2(x) => Value::Vec2(x * w),
            Value::Vec3(x) => Value::Vec3(x * w),
            Value::Vec4(x) => Value::Vec4(x * w),
            Value::Mat2(x) => Value::Mat2(x * w),
            Value::Mat3(x) => Value::Mat3(x * w),
            Value::Mat4(x) => Value::Mat4(x * w),
        }
    }
}

impl Interpolate for Value {
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        match (x1, x2, x3) {
            (&Value::Float(ref a), &Value::Float(ref b), &Value::Float(ref c)) => {
                Value::Float(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Vec2(ref a), &Value::Vec2(ref b), &Value::Vec2(ref c)) => {
                Value::Vec2(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Vec3(ref a), &Value::Vec3(ref b), &Value::Vec3(ref c)) => {
                Value::Vec3(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Vec4(ref a), &Value::Vec4(ref b), &Value::Vec4(ref c)) => {
                Value::Vec4(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Mat2(ref a), &Value::Mat2(ref b), &Value::Mat2(ref c)) => {
                Value::Mat2(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Mat3(ref a), &Value::Mat3(ref b), &Value::Mat3(ref c)) => {
                Value::Mat3(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            (&Value::Mat4(ref a), &Value::Mat4(ref b), &Value::Mat4(ref c)) => {
                Value::Mat4(Interpolate::barycentric_interpolate(u, a, v, b, w, c))
            }
            _ => panic!("cannot interpolate slot values of mismatched types"),
        }
    }
}

/// Conversion between the concrete math types and type-erased slot values.
///
/// The `from_value` direction panics on a type mismatch; the linker checks
/// every slot once at program construction, so the mismatch arm is
/// unreachable from the pipeline.
pub trait SlotValue: Copy {
    /// Slot type tag for this math type
    const TYPE: SlotType;

    fn into_value(self) -> Value;
    fn from_value(value: Value) -> Self;
}

macro_rules! impl_slot_value {
    ($($t:ty => $variant:ident,)+) => {$(
        impl SlotValue for $t {
            const TYPE: SlotType = SlotType::$variant;

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> $t {
                match value {
                    Value::$variant(x) => x,
                    other => panic!("expected a {:?} slot value, found {:?}", SlotType::$variant, other.ty()),
                }
            }
        }

        impl From<$t> for Value {
            #[inline]
            fn from(value: $t) -> Value {
                Value::$variant(value)
            }
        }
    )+};
}

impl_slot_value! {
    f32 => Float,
    Vec2<f32> => Vec2,
    Vec3<f32> => Vec3,
    Vec4<f32> => Vec4,
    Mat2<f32> => Mat2,
    Mat3<f32> => Mat3,
    Mat4<f32> => Mat4,
}

/// Borrowed per-vertex data bound to an attribute or varying slot.
///
/// The engine never takes ownership; the caller keeps the backing storage
/// alive for the duration of the draw.
#[derive(Debug, Clone, Copy)]
pub enum AttributeData<'a> {
    Float(&'a [f32]),
    Vec2(&'a [Vec2<f32>]),
    Vec3(&'a [Vec3<f32>]),
    Vec4(&'a [Vec4<f32>]),
    Mat2(&'a [Mat2<f32>]),
    Mat3(&'a [Mat3<f32>]),
    Mat4(&'a [Mat4<f32>]),
}

impl<'a> AttributeData<'a> {
    /// The slot type of the bound elements.
    pub fn ty(&self) -> SlotType {
        match *self {
            AttributeData::Float(_) => SlotType::Float,
            AttributeData::Vec2(_) => SlotType::Vec2,
            AttributeData::Vec3(_) => SlotType::Vec3,
            AttributeData::Vec4(_) => SlotType::Vec4,
            AttributeData::Mat2(_) => SlotType::Mat2,
            AttributeData::Mat3(_) => SlotType::Mat3,
            AttributeData::Mat4(_) => SlotType::Mat4,
        }
    }

    /// Number of bound elements.
    pub fn len(&self) -> usize {
        match *self {
            AttributeData::Float(s) => s.len(),
            AttributeData::Vec2(s) => s.len(),
            AttributeData::Vec3(s) => s.len(),
            AttributeData::Vec4(s) => s.len(),
            AttributeData::Mat2(s) => s.len(),
            AttributeData::Mat3(s) => s.len(),
            AttributeData::Mat4(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index` as a type-erased value.
    pub(crate) fn get(&self, index: usize) -> Value {
        match *self {
            AttributeData::Float(s) => Value::Float(s[index]),
            AttributeData::Vec2(s) => Value::Vec2(s[index]),
            AttributeData::Vec3(s) => Value::Vec3(s[index]),
            AttributeData::Vec4(s) => Value::Vec4(s[index]),
            AttributeData::Mat2(s) => Value::Mat2(s[index]),
            AttributeData::Mat3(s) => Value::Mat3(s[index]),
            AttributeData::Mat4(s) => Value::Mat4(s[index]),
        }
    }
}

macro_rules! impl_attribute_data_from {
    ($($t:ty => $variant:ident,)+) => {$(
        impl<'a> From<&'a [$t]> for AttributeData<'a> {
            #[inline]
            fn from(data: &'a [$t]) -> AttributeData<'a> {
                AttributeData::$variant(data)
            }
        }
    )+};
}

impl_attribute_data_from! {
    f32 => Float,
    Vec2<f32> => Vec2,
    Vec3<f32> => Vec3,
    Vec4<f32> => Vec4,
    Mat2<f32> => Mat2,
    Mat3<f32> => Mat3,
    Mat4<f32> => Mat4,
}

/// Introspection surface every declared shader implements.
///
/// `slots` enumerates the declared binding points of one kind in declaration
/// order; `store` and `load` move type-erased values in and out of an
/// invocation frame by `(kind, index)`.
pub trait Shader: Default {
    fn slots(kind: SlotKind) -> &'static [Slot];
    fn store(&mut self, kind: SlotKind, index: usize, value: Value);
    fn load(&self, kind: SlotKind, index: usize) -> Value;
}

/// A vertex program: consumes uniforms and per-vertex attributes, produces a
/// clip-space position and outgoing varyings.
pub trait VertexShader: Shader {
    fn main(&mut self);

    /// The clip-space output position, valid once `main` has run.
    fn gl_position(&self) -> Vec4<f32>;
}

/// A fragment program: consumes uniforms and interpolated varyings, produces
/// a color.
pub trait FragmentShader: Shader {
    fn main(&mut self);

    /// The output color, valid once `main` has run.
    fn gl_frag_color(&self) -> Vec4<f32>;
}
