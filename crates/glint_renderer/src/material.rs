//! Surface materials for Phong-family shading.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Reflectance and transmission properties of a surface.
///
/// Materials are immutable once constructed and shared across
/// primitives via `Arc` (a checkerboard floor references two materials
/// from a hundred tiles).
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Ambient reflectance per channel
    pub ambient: Color,
    /// Diffuse reflectance per channel
    pub diffuse: Color,
    /// Specular reflectance per channel
    pub specular: Color,
    /// Specular exponent
    pub glossiness: f32,
    /// Mirror reflection strength, 0.0 = none, 1.0 = perfect mirror
    pub reflectivity: f32,
    /// Refractive index, 0.0 = opaque, 1.0 = same as air, 1.5 = glass
    pub refraction: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        glossiness: f32,
        reflectivity: f32,
        refraction: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            glossiness,
            reflectivity,
            refraction,
        }
    }
}

impl Default for Material {
    /// A black, opaque, non-reflective material.
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            glossiness: 0.0,
            reflectivity: 0.0,
            refraction: 0.0,
        }
    }
}
