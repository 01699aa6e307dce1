//! Area-based triangle membership tests.

use crate::Vec3;

/// Area of the triangle (a, b, c) by Heron's formula.
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let ab = (b - a).length();
    let bc = (c - b).length();
    let ca = (c - a).length();

    let s = (ab + bc + ca) / 2.0;
    (s * (s - ab) * (s - bc) * (s - ca)).sqrt()
}

/// Whether `point`, assumed to lie on the triangle's plane, is inside
/// the triangle (a, b, c).
///
/// Compares the triangle's area against the sum of the three
/// sub-triangle areas spanned by the point and each pair of vertices.
/// The tolerance is relative to the triangle's own area so the test
/// behaves the same at any scene scale.
pub fn point_in_triangle(a: Vec3, b: Vec3, c: Vec3, point: Vec3) -> bool {
    let area = triangle_area(a, b, c);
    let sum =
        triangle_area(a, b, point) + triangle_area(a, point, c) + triangle_area(point, b, c);

    (area - sum).abs() <= area * 0.01
}
