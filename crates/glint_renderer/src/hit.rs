//! Hit record for ray-primitive intersection.

use crate::Material;
use glint_math::Vec3;

/// Material referenced by `HitRecord::default()`; absorbs everything.
static VOID_MATERIAL: Material = Material {
    ambient: Vec3::ZERO,
    diffuse: Vec3::ZERO,
    specular: Vec3::ZERO,
    glossiness: 0.0,
    reflectivity: 0.0,
    refraction: 0.0,
};

/// Record of the nearest ray-primitive intersection found so far.
///
/// `t` starts at infinity; an intersection test writes through only
/// when it finds a valid hit strictly closer than the current `t`, so
/// after a full scan over a primitive list the record holds the
/// globally nearest hit.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Parametric distance along the ray, +infinity while no hit
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (outward, never flipped
    /// toward the ray; refraction relies on the raw orientation)
    pub normal: Vec3,
    /// Material of the closest primitive found so far
    pub material: &'a Material,
}

impl Default for HitRecord<'_> {
    fn default() -> Self {
        Self {
            t: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &VOID_MATERIAL,
        }
    }
}
