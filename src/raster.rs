//! Tiled triangle rasterization
//!
//! Walks the framebuffer in 4x4 tiles, trivially rejecting tiles whose four
//! corners all sit outside one of the triangle's edges, then tests each
//! pixel center against the three edge functions. Coverage is strict
//! (`edge > 0` for all three), so triangles with non-positive signed area
//! produce no fragments and pixels exactly on a shared edge are dropped by
//! both neighbors; a top-left fill rule is not implemented.

use context::Context;
use interpolate::Interpolate;
use math::{all, greater_than, less_than, Vec2, Vec3, Vec4};
use program::Program;
use shader::{FragmentShader, SlotKind, Value, VertexShader};

const TILE_SIZE: usize = 4;

/// Twice the signed area of `(a, b, c)`: the z-component of the cross
/// product of the two edge vectors leaving `a`.
#[inline]
fn area2(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> f32 {
    (b - a).extend(0.0).cross((c - a).extend(0.0)).z
}

/// True when all four corners sit strictly outside the half-plane to the
/// left of `u -> v`.
#[inline]
fn outside(u: Vec2<f32>, v: Vec2<f32>, corners: [Vec2<f32>; 4]) -> bool {
    all(less_than(
        Vec4::new(
            area2(u, v, corners[0]),
            area2(u, v, corners[1]),
            area2(u, v, corners[2]),
            area2(u, v, corners[3]),
        ),
        Vec4::splat(0.0),
    ))
}

/// Rasterizes one triangle of the program's screen-space vertices into the
/// context's framebuffer.
///
/// The positions' `w` components hold `1 / w_clip` and the staged varyings
/// were pre-multiplied by it, so rescaling the barycentrics by the
/// interpolated `1 / w` makes every varying sum come out perspective-correct
/// without a per-varying division.
pub(crate) fn draw_triangle<'a, 'b, V, F>(
    context: &mut Context<'b>,
    program: &Program<'a, V, F>,
    uniforms: &[Value],
    i0: usize,
    i1: usize,
    i2: usize,
) where V: VertexShader, F: FragmentShader {
    let width = context.width();
    let height = context.height();

    let v0 = program.positions[i0];
    let v1 = program.positions[i1];
    let v2 = program.positions[i2];

    let area = area2(v0.xy(), v1.xy(), v2.xy());

    for by in (0..height).step_by(TILE_SIZE) {
        let by2 = (by + TILE_SIZE).min(height);

        for bx in (0..width).step_by(TILE_SIZE) {
            let bx2 = (bx + TILE_SIZE).min(width);

            let corners = [
                Vec2::new(bx as f32, by as f32),
                Vec2::new(bx2 as f32, by as f32),
                Vec2::new(bx as f32, by2 as f32),
                Vec2::new(bx2 as f32, by2 as f32),
            ];

            if outside(v1.xy(), v2.xy(), corners)
                || outside(v2.xy(), v0.xy(), corners)
                || outside(v0.xy(), v1.xy(), corners)
            {
                continue;
            }

            for y in by..by2 {
                for x in bx..bx2 {
                    // sample at the pixel center
                    let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                    let edges = Vec3::new(
                        area2(v1.xy(), v2.xy(), p),
                        area2(v2.xy(), v0.xy(), p),
                        area2(v0.xy(), v1.xy(), p),
                    );

                    if !all(greater_than(edges, Vec3::splat(0.0))) {
                        continue;
                    }

                    let mut bary = edges / area;

                    // interpolated depth and 1/w at the pixel center
                    let frag_coord = Vec4::new(
                        p.x,
                        p.y,
                        bary.dot(Vec3::new(v0.z, v1.z, v2.z)),
                        bary.dot(Vec3::new(v0.w, v1.w, v2.w)),
                    );

                    // rescale so the pre-divided varyings interpolate
                    // perspective-correct
                    bary = bary / frag_coord.w;

                    let mut frame = F::default();

                    for (local, value) in uniforms.iter().enumerate() {
                        frame.store(SlotKind::Uniform, local, *value);
                    }

                    for (local, &slot) in program.fragment_varyings.iter().enumerate() {
                        let stage = &program.varyings[slot].stage;

                        frame.store(
                            SlotKind::Varying,
                            local,
                            Interpolate::barycentric_interpolate(
                                bary.x, &stage[i0],
                                bary.y, &stage[i1],
                                bary.z, &stage[i2],
                            ),
                        );
                    }

                    frame.main();

                    context.write_fragment(x, y, frame.gl_frag_color());
                }
            }
        }
    }
}
