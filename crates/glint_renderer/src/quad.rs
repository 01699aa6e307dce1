//! Quadrilateral primitive.
//!
//! A planar quad is tested as the union of the two triangles formed by
//! its diagonal split.

use std::sync::Arc;

use crate::{HitRecord, Material};
use glint_math::{point_in_triangle, Ray, Vec3};

/// A planar quadrilateral with vertices in winding order.
#[derive(Clone)]
pub struct Quad {
    vertices: [Vec3; 4],
    /// Unit face normal, derived once at construction
    normal: Vec3,
    centroid: Vec3,
    /// Distance from the centroid to the farthest vertex
    bounding_radius: f32,
    material: Arc<Material>,
}

impl Quad {
    /// Create a quad from four coplanar vertices in winding order.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        let centroid = (v0 + v1 + v2 + v3) / 4.0;

        // The farthest vertex bounds every point of a convex quad, so
        // rim hits survive the rough test even on skewed shapes
        let bounding_radius = centroid
            .distance(v0)
            .max(centroid.distance(v1))
            .max(centroid.distance(v2))
            .max(centroid.distance(v3));

        Self {
            vertices: [v0, v1, v2, v3],
            normal,
            centroid,
            bounding_radius,
            material,
        }
    }

    /// Ray-quad intersection.
    pub fn intersect<'a>(&'a self, ray: &Ray, max_distance: f32, rec: &mut HitRecord<'a>) -> bool {
        let denom = ray.direction.dot(self.normal);

        // Near-parallel rays never intersect the plane
        if denom.abs() < 1e-8 {
            return false;
        }

        let t = (self.vertices[0] - ray.origin).dot(self.normal) / denom;
        let point = ray.at(t);

        if t < 0.0 || point.distance(ray.origin) >= max_distance {
            return false;
        }

        // Rough rejection for points on the plane but far from the quad
        if self.centroid.distance(point) > self.bounding_radius {
            return false;
        }

        let [v0, v1, v2, v3] = self.vertices;
        let inside =
            point_in_triangle(v0, v1, v2, point) || point_in_triangle(v0, v2, v3, point);

        if inside && t < rec.t {
            rec.t = t;
            rec.point = point;
            rec.normal = self.normal;
            rec.material = &self.material;
            return true;
        }

        false
    }
}
