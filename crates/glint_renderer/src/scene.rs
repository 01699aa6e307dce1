//! Scene context: primitive lists, the light, and the eye position.

use crate::{HitRecord, PointLight, Primitive};
use glint_math::{Ray, Vec3};

/// Everything a ray can interact with, constructed once before
/// rendering and read-only afterwards.
///
/// Shadow queries scan a separate, usually smaller list: geometry that
/// is visually many primitives (a tiled floor) can shadow-cast as one
/// proxy shape instead.
pub struct Scene {
    objects: Vec<Primitive>,
    shadow_casters: Vec<Primitive>,
    pub light: PointLight,
    /// Viewer position used for specular highlights
    pub eye: Vec3,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(light: PointLight, eye: Vec3) -> Self {
        Self {
            objects: Vec::new(),
            shadow_casters: Vec::new(),
            light,
            eye,
        }
    }

    /// Add a primitive to the visible geometry.
    pub fn add_object(&mut self, primitive: impl Into<Primitive>) {
        self.objects.push(primitive.into());
    }

    /// Add a primitive to the shadow-casting set.
    pub fn add_shadow_caster(&mut self, primitive: impl Into<Primitive>) {
        self.shadow_casters.push(primitive.into());
    }

    /// Number of visible primitives.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of shadow-casting primitives.
    pub fn shadow_caster_count(&self) -> usize {
        self.shadow_casters.len()
    }

    /// Nearest hit across the full object list, if any.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        scan(&self.objects, ray, f32::INFINITY)
    }

    /// Nearest occluder between the ray origin and the light, if any.
    ///
    /// Only the shadow-casting set is scanned, and occluders at or
    /// beyond the light's distance are ignored.
    pub fn shadow_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let light_distance = self.light.position.distance(ray.origin);
        scan(&self.shadow_casters, ray, light_distance)
    }
}

/// Linear scan over a primitive list; the record accumulates the
/// nearest hit regardless of list order.
fn scan<'a>(primitives: &'a [Primitive], ray: &Ray, max_distance: f32) -> Option<HitRecord<'a>> {
    let mut rec = HitRecord::default();
    let mut hit_anything = false;

    for primitive in primitives {
        if primitive.intersect(ray, max_distance, &mut rec) {
            hit_anything = true;
        }
    }

    hit_anything.then_some(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use std::sync::Arc;

    fn material_with_diffuse(diffuse: Vec3) -> Arc<Material> {
        Arc::new(Material::new(
            Vec3::ZERO,
            diffuse,
            Vec3::ZERO,
            1.0,
            0.0,
            0.0,
        ))
    }

    fn plain_light() -> PointLight {
        PointLight::new(Vec3::new(0.0, 10.0, 0.0), 0.5, 1.0, 1.0, 0.0, 0.0)
    }

    #[test]
    fn test_nearest_wins_regardless_of_scan_order() {
        let near_mat = material_with_diffuse(Vec3::new(1.0, 0.0, 0.0));
        let far_mat = material_with_diffuse(Vec3::new(0.0, 1.0, 0.0));
        let near = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, near_mat);
        let far = Sphere::new(Vec3::new(0.0, 0.0, -8.0), 1.0, far_mat);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        for (first, second) in [(near.clone(), far.clone()), (far, near)] {
            let mut scene = Scene::new(plain_light(), Vec3::ZERO);
            scene.add_object(first);
            scene.add_object(second);

            let rec = scene.nearest_hit(&ray).unwrap();
            assert!((rec.t - 2.0).abs() < 1e-4);
            assert_eq!(rec.material.diffuse, Vec3::new(1.0, 0.0, 0.0));
            assert!((rec.normal - Vec3::Z).length() < 1e-4);
        }
    }

    #[test]
    fn test_nearest_hit_miss_returns_none() {
        let mut scene = Scene::new(plain_light(), Vec3::ZERO);
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            material_with_diffuse(Vec3::ONE),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_shadow_ignores_occluder_behind_light() {
        // Light at y=10; the occluder sits at y=12, past the light
        let mut scene = Scene::new(plain_light(), Vec3::ZERO);
        scene.add_shadow_caster(Sphere::new(
            Vec3::new(0.0, 12.0, 0.0),
            1.0,
            material_with_diffuse(Vec3::ONE),
        ));

        let shadow_ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(scene.shadow_hit(&shadow_ray).is_none());
    }

    #[test]
    fn test_shadow_finds_occluder_before_light() {
        let mut scene = Scene::new(plain_light(), Vec3::ZERO);
        scene.add_shadow_caster(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            material_with_diffuse(Vec3::ONE),
        ));

        let shadow_ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(scene.shadow_hit(&shadow_ray).is_some());
    }

    #[test]
    fn test_shadow_scans_only_shadow_casters() {
        // Visible-only geometry must not occlude the light
        let mut scene = Scene::new(plain_light(), Vec3::ZERO);
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            material_with_diffuse(Vec3::ONE),
        ));

        let shadow_ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(scene.shadow_hit(&shadow_ray).is_none());
    }
}
