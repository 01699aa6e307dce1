//! Closed set of primitive shapes.

use crate::{HitRecord, Quad, Sphere, Triangle};
use glint_math::Ray;

/// The primitive kinds the intersector understands.
///
/// Intersection dispatches on the variant tag; the set of shapes is
/// fixed, so there is no open-ended trait object here.
#[derive(Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Quad(Quad),
    Triangle(Triangle),
}

impl Primitive {
    /// Forward to the variant's intersection test.
    ///
    /// Same contract as the shape tests: `rec` is updated only for a
    /// valid hit strictly closer than the one it already holds.
    pub fn intersect<'a>(&'a self, ray: &Ray, max_distance: f32, rec: &mut HitRecord<'a>) -> bool {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray, max_distance, rec),
            Primitive::Quad(quad) => quad.intersect(ray, max_distance, rec),
            Primitive::Triangle(triangle) => triangle.intersect(ray, max_distance, rec),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Quad> for Primitive {
    fn from(quad: Quad) -> Self {
        Primitive::Quad(quad)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
