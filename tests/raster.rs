#[macro_use]
extern crate softgl;

use softgl::math::{Vec3, Vec4};
use softgl::{Context, Primitive, Program};

/// Reads pixel `(x, y)` (bottom-left origin) out of the raw byte buffer.
fn pixel(buffer: &[u8], width: usize, height: usize, x: usize, y: usize) -> [u8; 4] {
    let offset = ((height - 1 - y) * width + x) * 4;

    [buffer[offset], buffer[offset + 1], buffer[offset + 2], buffer[offset + 3]]
}

vertex_shader! {
    /// Forwards clip-space positions untouched; corner colors arrive as
    /// bound varying input.
    pub struct ClipSpaceVertex {
        attribute position: Vec4<f32>,
        varying color: Vec3<f32>,
    }

    fn main(&mut self) {
        self.gl_position = self.position;
    }
}

fragment_shader! {
    pub struct InterpolatingFragment {
        varying color: Vec3<f32>,
    }

    fn main(&mut self) {
        self.gl_frag_color = Vec4::from3(self.color, 1.0);
    }
}

vertex_shader! {
    pub struct SolidVertex {
        attribute position: Vec4<f32>,
    }

    fn main(&mut self) {
        self.gl_position = self.position;
    }
}

fragment_shader! {
    pub struct SolidFragment {
        uniform tint: Vec4<f32>,
    }

    fn main(&mut self) {
        self.gl_frag_color = self.tint;
    }
}

const RGB: [Vec3<f32>; 3] = [
    Vec3 { x: 1.0, y: 0.0, z: 0.0 },
    Vec3 { x: 0.0, y: 1.0, z: 0.0 },
    Vec3 { x: 0.0, y: 0.0, z: 1.0 },
];

/// Draws one triangle with the given clip-space corners and RGB corner
/// colors into a `width x height` buffer.
fn draw_rgb_triangle(width: usize, height: usize, corners: [Vec4<f32>; 3]) -> Vec<u8> {
    let mut program = Program::<ClipSpaceVertex, InterpolatingFragment>::new(3).unwrap();

    program.set_attribute("position", &corners[..]).unwrap();
    program.set_varying("color", &RGB[..]).unwrap();

    let mut buffer = vec![0u8; width * height * 4];

    Context::new(width, height, &mut buffer)
        .draw(&mut program, Primitive::Triangles)
        .unwrap();

    buffer
}

#[test]
fn corner_colors_interpolate_across_the_triangle() {
    // screen-space corners (0,0), (4,0) and (0,4) on a 4x4 framebuffer
    let buffer = draw_rgb_triangle(4, 4, [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    ]);

    // barycentrics at the (0,0) pixel center are exactly (0.75, 0.125, 0.125)
    assert_eq!(pixel(&buffer, 4, 4, 0, 0), [191, 31, 31, 255]);

    // green dominates near (4,0), blue near (0,4)
    assert_eq!(pixel(&buffer, 4, 4, 2, 0), [63, 159, 31, 255]);
    assert_eq!(pixel(&buffer, 4, 4, 0, 2), [63, 31, 159, 255]);

    // outside the hypotenuse nothing is shaded
    assert_eq!(pixel(&buffer, 4, 4, 3, 3), [0, 0, 0, 0]);

    // pixels whose centers sit exactly on the hypotenuse fail the strict
    // edge test and stay unshaded
    assert_eq!(pixel(&buffer, 4, 4, 3, 0), [0, 0, 0, 0]);
}

#[test]
fn offscreen_triangle_leaves_the_buffer_untouched() {
    // far right of a 2x2 viewport
    let corners = [
        Vec4::new(99.0, 0.0, 0.0, 1.0),
        Vec4::new(101.0, 0.0, 0.0, 1.0),
        Vec4::new(99.0, 2.0, 0.0, 1.0),
    ];

    let mut program = Program::<ClipSpaceVertex, InterpolatingFragment>::new(3).unwrap();

    program.set_attribute("position", &corners[..]).unwrap();
    program.set_varying("color", &RGB[..]).unwrap();

    let mut buffer = vec![0xab_u8; 2 * 2 * 4];

    Context::new(2, 2, &mut buffer)
        .draw(&mut program, Primitive::Triangles)
        .unwrap();

    assert!(buffer.iter().all(|&b| b == 0xab));
}

#[test]
fn degenerate_triangle_produces_no_fragments() {
    // two coincident corners, zero area
    let buffer = draw_rgb_triangle(4, 4, [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, 1.0, 0.0, 1.0),
    ]);

    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn clockwise_triangle_produces_no_fragments() {
    // same triangle as the interpolation test with two corners swapped
    let buffer = draw_rgb_triangle(4, 4, [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
    ]);

    assert!(buffer.iter().all(|&b| b == 0));
}

/// A triangle whose three corners sit well outside the viewport so that
/// every pixel center passes the coverage test.
fn fullscreen_corners() -> [Vec4<f32>; 3] {
    [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(3.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 3.0, 0.0, 1.0),
    ]
}

fn draw_solid(context: &mut Context, program: &mut Program<SolidVertex, SolidFragment>, tint: Vec4<f32>) {
    program.set_uniform("tint", tint).unwrap();
    context.draw(program, Primitive::Triangles).unwrap();
}

#[test]
fn fullscreen_constant_color_reaches_every_pixel() {
    let corners = fullscreen_corners();

    let mut program = Program::<SolidVertex, SolidFragment>::new(3).unwrap();
    program.set_attribute("position", &corners[..]).unwrap();

    let mut buffer = vec![0u8; 8 * 8 * 4];
    let mut context = Context::new(8, 8, &mut buffer);

    draw_solid(&mut context, &mut program, Vec4::new(0.2, 0.4, 0.6, 1.0));

    for chunk in buffer.chunks(4) {
        assert_eq!(chunk, [51, 102, 153, 255]);
    }
}

#[test]
fn overlapping_draws_are_last_writer_wins() {
    let fullscreen = fullscreen_corners();

    // lower-left half of the screen
    let half = [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    ];

    let mut buffer = vec![0u8; 4 * 4 * 4];
    let mut context = Context::new(4, 4, &mut buffer);

    let mut program = Program::<SolidVertex, SolidFragment>::new(3).unwrap();

    program.set_attribute("position", &fullscreen[..]).unwrap();
    draw_solid(&mut context, &mut program, Vec4::new(1.0, 0.0, 0.0, 1.0));

    program.set_attribute("position", &half[..]).unwrap();
    draw_solid(&mut context, &mut program, Vec4::new(0.0, 0.0, 1.0, 1.0));

    // overlap carries the second triangle's color, no depth test intervenes
    assert_eq!(pixel(&buffer, 4, 4, 0, 0), [0, 0, 255, 255]);
    assert_eq!(pixel(&buffer, 4, 4, 3, 3), [255, 0, 0, 255]);
}

#[test]
fn indexed_draws_remap_the_vertex_buffer() {
    let corners = [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    ];

    let mut program = Program::<ClipSpaceVertex, InterpolatingFragment>::new(3).unwrap();
    program.set_attribute("position", &corners[..]).unwrap();
    program.set_varying("color", &RGB[..]).unwrap();

    let mut buffer = vec![0u8; 4 * 4 * 4];

    // reversing the winding through the index buffer drops the triangle
    Context::new(4, 4, &mut buffer)
        .draw_indexed(&mut program, &[0, 2, 1], Primitive::Triangles)
        .unwrap();
    assert!(buffer.iter().all(|&b| b == 0));

    Context::new(4, 4, &mut buffer)
        .draw_indexed(&mut program, &[0, 1, 2], Primitive::Triangles)
        .unwrap();
    assert_eq!(pixel(&buffer, 4, 4, 0, 0), [191, 31, 31, 255]);
}

vertex_shader! {
    pub struct BrightnessVertex {
        attribute position: Vec4<f32>,
        varying brightness: f32,
    }

    fn main(&mut self) {
        self.gl_position = self.position;
    }
}

fragment_shader! {
    pub struct BrightnessFragment {
        varying brightness: f32,
    }

    fn main(&mut self) {
        self.gl_frag_color = Vec4::splat(self.brightness);
    }
}

#[test]
fn varyings_interpolate_perspective_correct() {
    let width = 16usize;
    let height = 16usize;

    // screen corners (0,0), (32,0) and (0,32) with w_clip of 1, 2 and 4
    let corners = [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(6.0, -2.0, 0.0, 2.0),
        Vec4::new(-4.0, 12.0, 0.0, 4.0),
    ];

    let brightness = [0.0f32, 1.0, 0.5];

    let mut program = Program::<BrightnessVertex, BrightnessFragment>::new(3).unwrap();
    program.set_attribute("position", &corners[..]).unwrap();
    program.set_varying("brightness", &brightness[..]).unwrap();

    let mut buffer = vec![0u8; width * height * 4];

    Context::new(width, height, &mut buffer)
        .draw(&mut program, Primitive::Triangles)
        .unwrap();

    // geometric barycentrics of the (4, 4) pixel center against the
    // screen-space corners (0,0), (32,0), (0,32)
    let p = (4.5f32, 4.5f32);
    let area = 32.0 * 32.0;
    let b = [
        ((32.0 - p.0 - p.1) * 32.0) / area,
        (p.0 * 32.0) / area,
        (p.1 * 32.0) / area,
    ];

    // perspective-correct expectation: (sum b_i * v_i / w_i) / (sum b_i / w_i)
    let inv_w = [1.0f32, 0.5, 0.25];
    let numer: f32 = (0..3).map(|i| b[i] * brightness[i] * inv_w[i]).sum();
    let denom: f32 = (0..3).map(|i| b[i] * inv_w[i]).sum();
    let expected = ((numer / denom) * 255.0) as i32;

    let got = pixel(&buffer, width, height, 4, 4)[0] as i32;
    assert!((got - expected).abs() <= 1, "got {}, expected {}", got, expected);

    // a screen-space-linear interpolation would give a visibly different value
    let linear: f32 = (0..3).map(|i| b[i] * brightness[i]).sum();
    assert!((got - (linear * 255.0) as i32).abs() > 8);
}
