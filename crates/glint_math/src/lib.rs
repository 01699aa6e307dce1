// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod geom;
mod ray;

pub use geom::{point_in_triangle, triangle_area};
pub use ray::Ray;
