//! Shader program linking and data binding

use std::marker::PhantomData;

use smallvec::SmallVec;

use error::{RenderError, RenderResult};
use math::Vec4;
use shader::{AttributeData, FragmentShader, Slot, SlotKind, Value, VertexShader};

/// A uniform slot in the merged table with its bound value.
#[derive(Debug)]
pub(crate) struct UniformSlot {
    pub(crate) slot: Slot,
    pub(crate) value: Option<Value>,
}

/// An attribute slot with its bound per-vertex data.
#[derive(Debug)]
pub(crate) struct AttributeSlot<'a> {
    pub(crate) slot: Slot,
    pub(crate) data: Option<AttributeData<'a>>,
}

/// A varying slot: optional per-vertex input data plus the owned staging
/// buffer holding one perspective-scaled value per vertex.
#[derive(Debug)]
pub(crate) struct VaryingSlot<'a> {
    pub(crate) slot: Slot,
    pub(crate) input: Option<AttributeData<'a>>,
    pub(crate) stage: Vec<Value>,
}

/// A linked vertex/fragment shader pair with its binding tables and staging
/// storage.
///
/// Linking happens in [`new`](#method.new): the uniform sets of both shaders
/// are merged by name (a name may repeat only with an identical type), the
/// attribute and varying tables are taken from the vertex shader, and every
/// varying the fragment shader declares must be matched by name and type.
/// The program owns the post-vertex-stage position buffer and one staging
/// array per varying; bound uniform/attribute data stays with the caller.
pub struct Program<'a, V, F> where V: VertexShader, F: FragmentShader {
    pub(crate) vertices: usize,
    pub(crate) uniforms: SmallVec<[UniformSlot; 8]>,
    pub(crate) attributes: SmallVec<[AttributeSlot<'a>; 8]>,
    pub(crate) varyings: SmallVec<[VaryingSlot<'a>; 8]>,
    /// Vertex-local uniform index -> merged table index
    pub(crate) vertex_uniforms: SmallVec<[usize; 8]>,
    /// Fragment-local uniform index -> merged table index
    pub(crate) fragment_uniforms: SmallVec<[usize; 8]>,
    /// Fragment-local varying index -> vertex varying table index
    pub(crate) fragment_varyings: SmallVec<[usize; 8]>,
    /// Screen-space positions produced by the vertex stage
    pub(crate) positions: Vec<Vec4<f32>>,
    marker: PhantomData<(V, F)>,
}

/// Inserts `slot` into the merged uniform table, returning its index.
fn merge_uniform(uniforms: &mut SmallVec<[UniformSlot; 8]>, slot: &Slot) -> RenderResult<usize> {
    if let Some(index) = uniforms.iter().position(|u| u.slot.name == slot.name) {
        if uniforms[index].slot.ty != slot.ty {
            return Err(RenderError::UniformTypeConflict(
                slot.name.to_owned(),
                uniforms[index].slot.ty,
                slot.ty,
            ));
        }

        return Ok(index);
    }

    uniforms.push(UniformSlot { slot: *slot, value: None });

    Ok(uniforms.len() - 1)
}

/// Rejects duplicate names within one shader's slot list of a single kind.
fn check_unique(slots: &'static [Slot], kind: SlotKind) -> RenderResult<()> {
    for (i, slot) in slots.iter().enumerate() {
        if slots[..i].iter().any(|s| s.name == slot.name) {
            return Err(RenderError::DuplicateSlot(kind, slot.name.to_owned()));
        }
    }

    Ok(())
}

/// Validates a slice binding against its slot's declared type and the
/// program's vertex count.
fn check_binding(slot: &Slot, data: &AttributeData, vertices: usize) -> RenderResult<()> {
    if data.ty() != slot.ty {
        return Err(RenderError::SlotTypeMismatch(slot.name.to_owned(), slot.ty, data.ty()));
    }

    if data.len() < vertices {
        return Err(RenderError::BindingTooShort(slot.name.to_owned(), data.len(), vertices));
    }

    Ok(())
}

impl<'a, V, F> Program<'a, V, F> where V: VertexShader, F: FragmentShader {
    /// Links the shader pair and allocates staging storage for `vertices`
    /// vertices.
    pub fn new(vertices: usize) -> RenderResult<Program<'a, V, F>> {
        let mut uniforms = SmallVec::new();

        let mut vertex_uniforms = SmallVec::new();
        for slot in V::slots(SlotKind::Uniform) {
            vertex_uniforms.push(merge_uniform(&mut uniforms, slot)?);
        }

        let mut fragment_uniforms = SmallVec::new();
        for slot in F::slots(SlotKind::Uniform) {
            fragment_uniforms.push(merge_uniform(&mut uniforms, slot)?);
        }

        check_unique(V::slots(SlotKind::Attribute), SlotKind::Attribute)?;

        let attributes = V::slots(SlotKind::Attribute)
            .iter()
            .map(|slot| AttributeSlot { slot: *slot, data: None })
            .collect();

        check_unique(V::slots(SlotKind::Varying), SlotKind::Varying)?;

        let varyings: SmallVec<[VaryingSlot; 8]> = V::slots(SlotKind::Varying)
            .iter()
            .map(|slot| VaryingSlot {
                slot: *slot,
                input: None,
                stage: Vec::with_capacity(vertices),
            })
            .collect();

        // every fragment varying must be produced by the vertex shader
        let mut fragment_varyings = SmallVec::new();
        for slot in F::slots(SlotKind::Varying) {
            let index = match varyings.iter().position(|v| v.slot.name == slot.name) {
                Some(index) => index,
                None => return Err(RenderError::MissingVarying(slot.name.to_owned())),
            };

            if varyings[index].slot.ty != slot.ty {
                return Err(RenderError::VaryingTypeMismatch(
                    slot.name.to_owned(),
                    varyings[index].slot.ty,
                    slot.ty,
                ));
            }

            fragment_varyings.push(index);
        }

        Ok(Program {
            vertices,
            uniforms,
            attributes,
            varyings,
            vertex_uniforms,
            fragment_uniforms,
            fragment_varyings,
            positions: Vec::with_capacity(vertices),
            marker: PhantomData,
        })
    }

    /// Number of vertices this program was linked for.
    #[inline(always)]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Binds a uniform value by name.
    ///
    /// The value is copied into the merged uniform table, so rebinding
    /// between draws takes effect on the next draw call.
    pub fn set_uniform<U>(&mut self, name: &str, value: U) -> RenderResult<()> where U: Into<Value> {
        let value = value.into();

        let slot = match self.uniforms.iter_mut().find(|u| u.slot.name == name) {
            Some(slot) => slot,
            None => return Err(RenderError::UnknownSlot(SlotKind::Uniform, name.to_owned())),
        };

        if slot.slot.ty != value.ty() {
            return Err(RenderError::SlotTypeMismatch(name.to_owned(), slot.slot.ty, value.ty()));
        }

        slot.value = Some(value);

        Ok(())
    }

    /// Binds per-vertex attribute data by name.
    ///
    /// The slice must hold at least as many elements as the program draws
    /// vertices; the program borrows it rather than taking ownership.
    pub fn set_attribute<D>(&mut self, name: &str, data: D) -> RenderResult<()> where D: Into<AttributeData<'a>> {
        let data = data.into();
        let vertices = self.vertices;

        let slot = match self.attributes.iter_mut().find(|a| a.slot.name == name) {
            Some(slot) => slot,
            None => return Err(RenderError::UnknownSlot(SlotKind::Attribute, name.to_owned())),
        };

        check_binding(&slot.slot, &data, vertices)?;

        slot.data = Some(data);

        Ok(())
    }

    /// Binds per-vertex input data to a varying slot by name.
    ///
    /// Bound varying data is loaded into the vertex frame before `main`
    /// runs, so a `main` that never writes the slot passes the bound value
    /// straight through to interpolation. Varyings the vertex shader writes
    /// itself need no binding.
    pub fn set_varying<D>(&mut self, name: &str, data: D) -> RenderResult<()> where D: Into<AttributeData<'a>> {
        let data = data.into();
        let vertices = self.vertices;

        let slot = match self.varyings.iter_mut().find(|v| v.slot.name == name) {
            Some(slot) => slot,
            None => return Err(RenderError::UnknownSlot(SlotKind::Varying, name.to_owned())),
        };

        check_binding(&slot.slot, &data, vertices)?;

        slot.input = Some(data);

        Ok(())
    }
}
