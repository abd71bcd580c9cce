//! Shader declaration macros

/// Writes `value` into the field picked by a runtime slot index, resolving
/// the index against the declaration order captured at expansion time.
#[doc(hidden)]
#[macro_export]
macro_rules! __softgl_store_slot {
    ($this:ident, $index:expr, $value:expr ;) => {{
        let _ = $value;
        panic!("slot index {} out of range", $index)
    }};
    ($this:ident, $index:expr, $value:expr ; $field:ident : $ty:ty $(, $rest:ident : $rty:ty)*) => {
        if $index == 0 {
            $this.$field = <$ty as $crate::shader::SlotValue>::from_value($value);
        } else {
            $crate::__softgl_store_slot!($this, $index - 1, $value ; $($rest : $rty),*)
        }
    };
}

/// Reads the field picked by a runtime slot index back out as a type-erased value.
#[doc(hidden)]
#[macro_export]
macro_rules! __softgl_load_slot {
    ($this:ident, $index:expr ;) => {
        panic!("slot index {} out of range", $index)
    };
    ($this:ident, $index:expr ; $field:ident : $ty:ty $(, $rest:ident : $rty:ty)*) => {
        if $index == 0 {
            $crate::shader::SlotValue::into_value($this.$field)
        } else {
            $crate::__softgl_load_slot!($this, $index - 1 ; $($rest : $rty),*)
        }
    };
}

/// Slot table for one kind, in declaration order.
#[doc(hidden)]
#[macro_export]
macro_rules! __softgl_slot_table {
    ($($field:ident : $ty:ty),*) => {
        &[$(
            $crate::shader::Slot {
                name: stringify!($field),
                ty: <$ty as $crate::shader::SlotValue>::TYPE,
            },
        )*]
    };
}

/// Declares a vertex shader: the invocation-frame struct, its slot tables and
/// its `main` procedure.
///
/// ```ignore
/// vertex_shader! {
///     /// Projects each vertex and forwards its color.
///     pub struct Demo {
///         uniform perspective: Mat4<f32>,
///         attribute position: Vec3<f32>,
///         varying color: Vec3<f32>,
///     }
///
///     fn main(&mut self) {
///         self.gl_position = self.perspective * Vec4::from3(self.position, 1.0);
///     }
/// }
/// ```
///
/// Slots are declared in kind order (uniforms, then attributes, then
/// varyings) and become public fields of the struct under their declared
/// names; `gl_position` is appended as the clip-space output. Within `main`
/// all bound slots are readable, and varyings left untouched keep whatever
/// per-vertex data the host bound to them.
#[macro_export]
macro_rules! vertex_shader {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(uniform $uni:ident : $uty:ty,)*
            $(attribute $att:ident : $aty:ty,)*
            $(varying $var:ident : $vty:ty,)*
        }

        $main:item
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            $(pub $uni: $uty,)*
            $(pub $att: $aty,)*
            $(pub $var: $vty,)*
            /// Clip-space output position
            pub gl_position: $crate::math::Vec4<f32>,
        }

        impl $crate::shader::Shader for $name {
            fn slots(kind: $crate::shader::SlotKind) -> &'static [$crate::shader::Slot] {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_slot_table!($($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_slot_table!($($att : $aty),*),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_slot_table!($($var : $vty),*),
                }
            }

            fn store(&mut self, kind: $crate::shader::SlotKind, index: usize, value: $crate::shader::Value) {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_store_slot!(self, index, value ; $($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_store_slot!(self, index, value ; $($att : $aty),*),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_store_slot!(self, index, value ; $($var : $vty),*),
                }
            }

            fn load(&self, kind: $crate::shader::SlotKind, index: usize) -> $crate::shader::Value {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_load_slot!(self, index ; $($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_load_slot!(self, index ; $($att : $aty),*),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_load_slot!(self, index ; $($var : $vty),*),
                }
            }
        }

        impl $crate::shader::VertexShader for $name {
            $main

            #[inline]
            fn gl_position(&self) -> $crate::math::Vec4<f32> {
                self.gl_position
            }
        }
    };
}

/// Declares a fragment shader: the invocation-frame struct, its slot tables
/// and its `main` procedure.
///
/// ```ignore
/// fragment_shader! {
///     pub struct Demo {
///         varying color: Vec3<f32>,
///     }
///
///     fn main(&mut self) {
///         self.gl_frag_color = Vec4::from3(self.color, 1.0);
///     }
/// }
/// ```
///
/// Fragment shaders declare uniforms and varyings only (in that order); every
/// varying must be declared by the linked vertex shader with the same type.
/// `gl_frag_color` is appended as the output slot.
#[macro_export]
macro_rules! fragment_shader {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(uniform $uni:ident : $uty:ty,)*
            $(varying $var:ident : $vty:ty,)*
        }

        $main:item
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            $(pub $uni: $uty,)*
            $(pub $var: $vty,)*
            /// Output fragment color
            pub gl_frag_color: $crate::math::Vec4<f32>,
        }

        impl $crate::shader::Shader for $name {
            fn slots(kind: $crate::shader::SlotKind) -> &'static [$crate::shader::Slot] {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_slot_table!($($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_slot_table!(),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_slot_table!($($var : $vty),*),
                }
            }

            fn store(&mut self, kind: $crate::shader::SlotKind, index: usize, value: $crate::shader::Value) {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_store_slot!(self, index, value ; $($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_store_slot!(self, index, value ;),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_store_slot!(self, index, value ; $($var : $vty),*),
                }
            }

            fn load(&self, kind: $crate::shader::SlotKind, index: usize) -> $crate::shader::Value {
                match kind {
                    $crate::shader::SlotKind::Uniform => $crate::__softgl_load_slot!(self, index ; $($uni : $uty),*),
                    $crate::shader::SlotKind::Attribute => $crate::__softgl_load_slot!(self, index ;),
                    $crate::shader::SlotKind::Varying => $crate::__softgl_load_slot!(self, index ; $($var : $vty),*),
                }
            }
        }

        impl $crate::shader::FragmentShader for $name {
            $main

            #[inline]
            fn gl_frag_color(&self) -> $crate::math::Vec4<f32> {
                self.gl_frag_color
            }
        }
    };
}
