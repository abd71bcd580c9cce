//! Draw target over a caller-owned framebuffer

use error::{RenderError, RenderResult};
use math::Vec4;
use pipeline;
use primitive::{Primitive, TriangleIter};
use program::Program;
use raster;
use shader::{FragmentShader, VertexShader};

/// A non-owning view over a `height * width * 4` byte RGBA framebuffer.
///
/// Pixel `(x, y)` has its origin at the bottom-left of the image and lives
/// at byte offset `((height - 1 - y) * width + x) * 4`, stored as R, G, B, A
/// with one byte per channel. The engine only ever writes covered pixels;
/// clearing between frames is the caller's job, as is keeping the buffer
/// alive across the draw call.
pub struct Context<'a> {
    width: usize,
    height: usize,
    buffer: &'a mut [u8],
}

impl<'a> Context<'a> {
    /// Creates a draw target over `buffer`.
    pub fn new(width: usize, height: usize, buffer: &'a mut [u8]) -> Context<'a> {
        assert_eq!(buffer.len(), width * height * 4, "framebuffer must hold width * height * 4 bytes");

        Context { width, height, buffer }
    }

    /// Width of the framebuffer in pixels
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the framebuffer in pixels
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Converts a fragment color to bytes and stores it at `(x, y)`.
    ///
    /// Channels are scaled by 255 with a saturating cast, so out-of-range
    /// and NaN channels degrade to 0 or 255 instead of wrapping.
    #[inline]
    pub(crate) fn write_fragment(&mut self, x: usize, y: usize, color: Vec4<f32>) {
        let offset = ((self.height - 1 - y) * self.width + x) * 4;

        for channel in 0..4 {
            self.buffer[offset + channel] = (color[channel] * 255.0) as u8;
        }
    }

    /// Draws the program's vertices with the given primitive topology.
    pub fn draw<'b, V, F>(&mut self, program: &mut Program<'b, V, F>, primitive: Primitive) -> RenderResult<()>
        where V: VertexShader, F: FragmentShader
    {
        self.draw_inner(program, None, primitive)
    }

    /// Draws with an external index stream remapping the program's vertices.
    pub fn draw_indexed<'b, V, F>(&mut self, program: &mut Program<'b, V, F>, indices: &[usize], primitive: Primitive) -> RenderResult<()>
        where V: VertexShader, F: FragmentShader
    {
        self.draw_inner(program, Some(indices), primitive)
    }

    fn draw_inner<'b, V, F>(&mut self, program: &mut Program<'b, V, F>, indices: Option<&[usize]>, primitive: Primitive) -> RenderResult<()>
        where V: VertexShader, F: FragmentShader
    {
        if let Some(indices) = indices {
            for &index in indices {
                if index >= program.vertices {
                    return Err(RenderError::IndexOutOfRange(index, program.vertices));
                }
            }
        }

        // validate all bindings up front so nothing is staged on a failed draw
        let fragment_uniforms = pipeline::bound_uniforms(program, &program.fragment_uniforms)?;

        pipeline::process_vertices(program, self.width, self.height)?;

        debug!("drawing {} vertices as {:?}", program.vertices, primitive);

        for tri in TriangleIter::new(primitive, program.vertices, indices) {
            raster::draw_triangle(self, program, &fragment_uniforms, tri[0], tri[1], tri[2]);
        }

        Ok(())
    }
}
