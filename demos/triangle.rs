//! Renders a single perspective-projected triangle with smoothly
//! interpolated corner colors and saves it as a PNG.

#[macro_use]
extern crate softgl;

use softgl::math::{radians, Mat4, Vec3, Vec4};
use softgl::{Context, Primitive, Program};

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

/// Perspective projection looking down +z, without any near/far clipping to
/// back it up, so visible geometry has to stay inside the frustum.
fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4<f32> {
    let f = 1.0 / (fovy / 2.0).tan();
    let dz = near - far;

    Mat4::new(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / dz, 1.0),
        Vec4::new(0.0, 0.0, far * near * 2.0 / dz, 0.0),
    )
}

vertex_shader! {
    /// Projects each vertex; the corner color rides along as bound varying
    /// input and gets staged for perspective-correct interpolation.
    pub struct TriangleVertex {
        uniform perspective: Mat4<f32>,
        attribute position: Vec3<f32>,
        varying color: Vec3<f32>,
    }

    fn main(&mut self) {
        self.gl_position = self.perspective * Vec4::from3(self.position, 1.0);
    }
}

fragment_shader! {
    pub struct TriangleFragment {
        varying color: Vec3<f32>,
    }

    fn main(&mut self) {
        self.gl_frag_color = Vec4::from3(self.color, 1.0);
    }
}

fn main() {
    let positions = [
        Vec3::new(-48.0, -10.0, 82.0),
        Vec3::new(29.0, -15.0, 44.0),
        Vec3::new(13.0, 34.0, 114.0),
    ];

    let colors = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];

    let projection = perspective(radians(90.0f32), WIDTH as f32 / HEIGHT as f32, 0.1, 100.0);

    let mut program = Program::<TriangleVertex, TriangleFragment>::new(positions.len()).unwrap();

    program.set_uniform("perspective", projection).unwrap();
    program.set_attribute("position", &positions[..]).unwrap();
    program.set_varying("color", &colors[..]).unwrap();

    let mut buffer = vec![0u8; WIDTH * HEIGHT * 4];

    Context::new(WIDTH, HEIGHT, &mut buffer)
        .draw(&mut program, Primitive::Triangles)
        .unwrap();

    let image = softgl::image_compat::to_image(WIDTH as u32, HEIGHT as u32, &buffer).unwrap();

    image.save("demos/triangle.png").unwrap();
}
