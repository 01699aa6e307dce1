//! Triangle primitive.

use std::sync::Arc;

use crate::{HitRecord, Material};
use glint_math::{point_in_triangle, Ray, Vec3};

/// A triangle with vertices in winding order.
#[derive(Clone)]
pub struct Triangle {
    vertices: [Vec3; 3],
    /// Unit face normal, derived once at construction
    normal: Vec3,
    centroid: Vec3,
    /// Distance from the centroid to the farthest vertex
    bounding_radius: f32,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        let centroid = (v0 + v1 + v2) / 3.0;

        let bounding_radius = centroid
            .distance(v0)
            .max(centroid.distance(v1))
            .max(centroid.distance(v2));

        Self {
            vertices: [v0, v1, v2],
            normal,
            centroid,
            bounding_radius,
            material,
        }
    }

    /// Ray-triangle intersection.
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

        // Rough rejection for points on the plane but far from the triangle
        if self.centroid.distance(point) > self.bounding_radius {
            return false;
        }

        let [v0, v1, v2] = self.vertices;
        if point_in_triangle(v0, v1, v2, point) && t < rec.t {
            rec.t = t;
            rec.point = point;
            rec.normal = self.normal;
            rec.material = &self.material;
            return true;
        }

        false
    }
}
