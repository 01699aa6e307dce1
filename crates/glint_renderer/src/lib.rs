//! Glint - CPU Whitted-style ray tracer
//!
//! A recursive ray tracer with Phong illumination, point-light shadows,
//! and bounce-limited reflection and refraction. Scene traversal is a
//! plain linear scan over a closed set of primitive shapes.

mod material;
mod hit;
mod sphere;
mod quad;
mod triangle;
mod primitive;
mod light;
mod scene;
mod whitted;
mod camera;
mod renderer;

pub use material::{Color, Material};
pub use hit::HitRecord;
pub use sphere::Sphere;
pub use quad::Quad;
pub use triangle::Triangle;
pub use primitive::Primitive;
pub use light::PointLight;
pub use scene::Scene;
pub use whitted::Whitted;
pub use camera::Camera;
pub use renderer::{color_to_rgb, render, ImageBuffer};

/// Re-export Ray and common math types from glint_math
pub use glint_math::{Ray, Vec3};
