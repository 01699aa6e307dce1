//! Sphere primitive.

use std::sync::Arc;

use crate::{HitRecord, Material};
use glint_math::{Ray, Vec3};

/// A sphere described by center and radius.
#[derive(Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Ray-sphere intersection via the quadratic discriminant.
    ///
    /// Returns true and updates `rec` only for a hit with positive `t`,
    /// closer to the ray origin than `max_distance` and strictly closer
    /// than the hit already recorded.
    pub fn intersect<'a>(&'a self, ray: &Ray, max_distance: f32, rec: &mut HitRecord<'a>) -> bool {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return false;
        }
        let sqrtd = discriminant.sqrt();

        // A negative root lies behind the origin; send it to infinity so
        // the other root can win. A ray starting inside the sphere then
        // still reports the forward exit point.
        let mut t1 = (-half_b + sqrtd) / a;
        if t1 < 0.0 {
            t1 = f32::INFINITY;
        }
        let mut t2 = (-half_b - sqrtd) / a;
        if t2 < 0.0 {
            t2 = f32::INFINITY;
        }
        let t = t1.min(t2);

        let point = ray.at(t);
        if t > 0.0 && point.distance(ray.origin) < max_distance && t < rec.t {
            rec.t = t;
            rec.point = point;
            // Raw outward normal, even when hit from the inside
            rec.normal = (point - self.center) / self.radius;
            rec.material = &self.material;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_material() -> Arc<Material> {
        Arc::new(Material::new(
            Vec3::splat(0.1),
            Vec3::splat(0.5),
            Vec3::ONE,
            10.0,
            0.0,
            0.0,
        ))
    }

    #[test]
    fn test_hit_from_outside() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.intersect(&ray, f32::INFINITY, &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-4);
        assert!((rec.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_hit_from_inside() {
        // Origin inside the sphere: the forward exit point is reported
        let sphere = Sphere::new(Vec3::ZERO, 2.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.intersect(&ray, f32::INFINITY, &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-4);
        // Outward normal points away from the origin here
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn test_miss_leaves_record_untouched() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, test_material());
        // Closest approach is 3 units above the center
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(!sphere.intersect(&ray, f32::INFINITY, &mut rec));
        assert_eq!(rec.t, f32::INFINITY);
        assert_eq!(rec.normal, Vec3::ZERO);
    }

    #[test]
    fn test_hit_beyond_max_distance_rejected() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(!sphere.intersect(&ray, 3.0, &mut rec));
        assert_eq!(rec.t, f32::INFINITY);
    }

    #[test]
    fn test_farther_hit_does_not_replace_nearer() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, test_material());
        let far = Sphere::new(Vec3::new(0.0, 0.0, -8.0), 1.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(near.intersect(&ray, f32::INFINITY, &mut rec));
        let t_near = rec.t;
        assert!(!far.intersect(&ray, f32::INFINITY, &mut rec));
        assert_eq!(rec.t, t_near);
    }
}
