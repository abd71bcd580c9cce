//! The vertex stage driver
//!
//! Runs the vertex shader over every input vertex, performs the perspective
//! division, stages varyings for perspective-correct interpolation and maps
//! the result into screen space. Rasterization picks up from the staged
//! buffers in the program.

use smallvec::SmallVec;

use error::{RenderError, RenderResult};
use math::{Vec3, Vec4};
use program::Program;
use shader::{AttributeData, FragmentShader, SlotKind, Value, VertexShader};

/// Snapshots the bound values for one shader stage's uniforms, erroring on
/// any slot that was never bound.
pub(crate) fn bound_uniforms<'a, V, F>(program: &Program<'a, V, F>, map: &[usize]) -> RenderResult<SmallVec<[Value; 8]>>
    where V: VertexShader, F: FragmentShader
{
    let mut values = SmallVec::new();

    for &merged in map {
        let slot = &program.uniforms[merged];

        match slot.value {
            Some(value) => values.push(value),
            None => return Err(RenderError::UnboundSlot(SlotKind::Uniform, slot.slot.name.to_owned())),
        }
    }

    Ok(values)
}

/// Runs the vertex shader for every vertex and fills the program's position
/// and varying staging buffers.
///
/// Per vertex: a zeroed invocation frame is materialized, uniforms, the
/// vertex's attribute elements and any bound varying inputs are stored into
/// it, and `main` runs. The clip-space result is perspective-divided so its
/// `w` becomes `1 / w_clip`, every varying is scaled by that `1 / w_clip`
/// (linear interpolation of `value / w` divided by interpolated `1 / w`
/// recovers the perspective-correct value later), and the position is mapped
/// to pixel coordinates.
pub(crate) fn process_vertices<'a, V, F>(program: &mut Program<'a, V, F>, width: usize, height: usize) -> RenderResult<()>
    where V: VertexShader, F: FragmentShader
{
    let uniforms = bound_uniforms(program, &program.vertex_uniforms)?;

    let mut attributes: SmallVec<[AttributeData; 8]> = SmallVec::new();

    for slot in program.attributes.iter() {
        match slot.data {
            Some(data) => attributes.push(data),
            None => return Err(RenderError::UnboundSlot(SlotKind::Attribute, slot.slot.name.to_owned())),
        }
    }

    let varying_inputs: SmallVec<[Option<AttributeData>; 8]> =
        program.varyings.iter().map(|slot| slot.input).collect();

    program.positions.clear();

    for slot in program.varyings.iter_mut() {
        slot.stage.clear();
    }

    trace!("vertex stage over {} vertices", program.vertices);

    let scale = Vec3::new(width as f32, height as f32, 1.0);

    for i in 0..program.vertices {
        let mut frame = V::default();

        for (local, value) in uniforms.iter().enumerate() {
            frame.store(SlotKind::Uniform, local, *value);
        }

        for (local, data) in attributes.iter().enumerate() {
            frame.store(SlotKind::Attribute, local, data.get(i));
        }

        for (local, input) in varying_inputs.iter().enumerate() {
            if let Some(ref data) = *input {
                frame.store(SlotKind::Varying, local, data.get(i));
            }
        }

        frame.main();

        // perspective division; w now carries 1 / w_clip
        let clip = frame.gl_position();
        let p = Vec4::from3(clip.xyz() / clip.w, 1.0 / clip.w);

        for (local, slot) in program.varyings.iter_mut().enumerate() {
            slot.stage.push(frame.load(SlotKind::Varying, local).scale(p.w));
        }

        // viewport transform into pixel coordinates
        program.positions.push(Vec4::from3((p.xyz() + 1.0) * 0.5 * scale, p.w));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::process_vertices;
    use math::{Vec3, Vec4};
    use program::Program;
    use shader::Value;

    vertex_shader! {
        /// Forwards a clip-space position and scales the varying it was handed.
        pub struct PassthroughVertex {
            attribute position: Vec4<f32>,
            varying tint: Vec3<f32>,
        }

        fn main(&mut self) {
            self.gl_position = self.position;
        }
    }

    fragment_shader! {
        pub struct PassthroughFragment {
            varying tint: Vec3<f32>,
        }

        fn main(&mut self) {
            self.gl_frag_color = Vec4::from3(self.tint, 1.0);
        }
    }

    #[test]
    fn perspective_divide_and_viewport() {
        let positions = [Vec4::new(0.0, 0.0, 1.0, 2.0)];
        let tints = [Vec3::new(1.0, 0.5, 0.25)];

        let mut program = Program::<PassthroughVertex, PassthroughFragment>::new(1).unwrap();
        program.set_attribute("position", &positions[..]).unwrap();
        program.set_varying("tint", &tints[..]).unwrap();

        process_vertices(&mut program, 4, 4).unwrap();

        // ndc (0, 0, 0.5) on a 4x4 viewport, with w replaced by 1 / w_clip
        assert_eq!(program.positions[0], Vec4::new(2.0, 2.0, 0.75, 0.5));

        // the staged varying is the bound input scaled by 1 / w_clip
        assert_eq!(program.varyings[0].stage[0], Value::Vec3(Vec3::new(0.5, 0.25, 0.125)));

        // round trip: undoing the viewport transform and the perspective
        // division recovers the clip-space position
        let p = program.positions[0];
        let ndc = Vec3::new(p.x / 2.0 - 1.0, p.y / 2.0 - 1.0, p.z * 2.0 - 1.0);
        let clip = positions[0];
        assert_eq!(ndc * (1.0 / p.w), clip.xyz());
    }

    #[test]
    fn unbound_attribute_fails() {
        let mut program = Program::<PassthroughVertex, PassthroughFragment>::new(1).unwrap();

        assert!(process_vertices(&mut program, 4, 4).is_err());
    }

    #[test]
    fn rebinding_replaces_staged_varyings() {
        let positions = [Vec4::new(0.0, 0.0, 0.0, 1.0)];
        let red = [Vec3::new(1.0, 0.0, 0.0)];
        let blue = [Vec3::new(0.0, 0.0, 1.0)];

        let mut program = Program::<PassthroughVertex, PassthroughFragment>::new(1).unwrap();
        program.set_attribute("position", &positions[..]).unwrap();
        program.set_varying("tint", &red[..]).unwrap();

        process_vertices(&mut program, 4, 4).unwrap();
        assert_eq!(program.varyings[0].stage[0], Value::Vec3(red[0]));

        program.set_varying("tint", &blue[..]).unwrap();

        process_vertices(&mut program, 4, 4).unwrap();
        assert_eq!(program.varyings[0].stage.len(), 1);
        assert_eq!(program.varyings[0].stage[0], Value::Vec3(blue[0]));
    }
}
