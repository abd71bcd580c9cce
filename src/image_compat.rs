//! Optional interop with the `image` crate for saving rendered frames

use image::RgbaImage;

/// Copies a raw framebuffer into an [`RgbaImage`].
///
/// Rows are already stored top-down in the byte layout the engine writes, so
/// the bytes map straight through. Returns `None` when `buffer` holds fewer
/// than `width * height * 4` bytes.
pub fn to_image(width: u32, height: u32, buffer: &[u8]) -> Option<RgbaImage> {
    RgbaImage::from_raw(width, height, buffer.to_vec())
}
