//! Pixel buffer and the parallel render loop.

use crate::{Camera, Color, Scene, Whitted};
use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to an 8-bit RGB image (for saving).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(color_to_rgb(self.get(x, y)))
        })
    }
}

/// Render the scene to an image buffer.
///
/// Rows are distributed across the rayon thread pool; each worker owns
/// a disjoint chunk of the pixel buffer, so no synchronization is
/// needed beyond the implicit join when all rows are done. Pixels whose
/// primary ray escapes the scene stay black.
pub fn render(scene: &Scene, camera: &Camera, tracer: &Whitted) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.width(), camera.height());
    let width = image.width as usize;

    // A zero-width or zero-height image has no pixels to chunk
    if image.pixels.is_empty() {
        return image;
    }

    log::info!(
        "Rendering {}x{} on {} threads",
        image.width,
        image.height,
        rayon::current_num_threads()
    );

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.primary_ray(x as u32, y as u32);
                *pixel = tracer.trace(scene, &ray);
            }
        });

    image
}
