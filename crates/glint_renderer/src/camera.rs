//! Camera for primary ray generation.

use glint_math::{Mat4, Ray, Vec3};

/// Vertical field of view in degrees.
const FOV_Y: f32 = 45.0;
/// Near clip plane; primary rays originate here.
const Z_NEAR: f32 = 1.0;
/// Far clip plane.
const Z_FAR: f32 = 10000.0;

/// Perspective camera that unprojects pixel coordinates into world-space
/// rays.
///
/// The inverse view-projection matrix is computed once at construction;
/// each pixel center is unprojected onto the near and far clip planes
/// and the primary ray runs from the near point toward the far point.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    eye: Vec3,
    width: u32,
    height: u32,
    clip_to_world: Mat4,
}

impl Camera {
    /// Create a camera at `eye` looking toward `target` with +Y up.
    pub fn new(eye: Vec3, target: Vec3, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(FOV_Y.to_radians(), aspect, Z_NEAR, Z_FAR);

        Self {
            eye,
            width,
            height,
            clip_to_world: (projection * view).inverse(),
        }
    }

    /// Viewer position, used by the shading pipeline for specular
    /// highlights.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner; the direction is unit
    /// length as the intersection code requires.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * ((x as f32 + 0.5) / self.width as f32) - 1.0;
        let ndc_y = 1.0 - 2.0 * ((y as f32 + 0.5) / self.height as f32);

        let near = self.clip_to_world.project_point3(Vec3::new(ndc_x, ndc_y, -1.0));
        let far = self.clip_to_world.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near, (far - near).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let camera = Camera::new(eye, Vec3::ZERO, 100, 100);

        // Pixel centers sit half a pixel off the exact image center
        let ray = camera.primary_ray(50, 50);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 0.02);
    }

    #[test]
    fn test_direction_is_unit_length() {
        let camera = Camera::new(Vec3::new(-10.0, 10.0, 10.0), Vec3::ZERO, 640, 480);

        for (x, y) in [(0, 0), (639, 0), (320, 240), (0, 479)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_origin_lies_on_near_plane() {
        let eye = Vec3::new(-10.0, 10.0, 10.0);
        let camera = Camera::new(eye, Vec3::ZERO, 640, 480);
        let forward = (Vec3::ZERO - eye).normalize();

        // Every pixel's ray starts at perpendicular distance Z_NEAR
        for (x, y) in [(0, 0), (320, 240), (639, 479)] {
            let ray = camera.primary_ray(x, y);
            let depth = (ray.origin - eye).dot(forward);
            assert!((depth - Z_NEAR).abs() < 1e-3);
        }
    }

    #[test]
    fn test_image_is_upright() {
        // Looking down -Z, the top pixel row unprojects above the
        // bottom row and the right column to the right of the left
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 64, 64);

        let top = camera.primary_ray(32, 0);
        let bottom = camera.primary_ray(32, 63);
        assert!(top.direction.y > bottom.direction.y);

        let left = camera.primary_ray(0, 32);
        let right = camera.primary_ray(63, 32);
        assert!(right.direction.x > left.direction.x);
    }
}
