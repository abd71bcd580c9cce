//! A software rasterizer with a programmable, GLSL-flavored pipeline.
//!
//! Shaders are plain structs declared through the [`vertex_shader!`](../macro.vertex_shader.html)
//! and [`fragment_shader!`](../macro.fragment_shader.html) macros. A
//! [`Program`](program/struct.Program.html) links a vertex/fragment pair, checking that every
//! varying the fragment shader consumes is produced by the vertex shader, and external
//! vertex data is bound to the program's slots by name. A
//! [`Context`](context/struct.Context.html) then draws indexed triangles into a caller-owned
//! RGBA byte framebuffer, with perspective-correct interpolation of all varyings.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate num_traits;
extern crate smallvec;

#[cfg(feature = "image_compat")]
extern crate image;

pub mod error;
pub mod math;
pub mod interpolate;
#[macro_use]
pub mod shader;
pub mod program;
mod pipeline;
pub mod primitive;
mod raster;
pub mod context;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use context::Context;
pub use error::{RenderError, RenderResult};
pub use interpolate::Interpolate;
pub use primitive::Primitive;
pub use program::Program;
