//! Point light with quadratic distance attenuation.

use glint_math::Vec3;

/// A point light source.
///
/// Carries separate ambient and diffuse intensity scalars plus the
/// three coefficients of the attenuation polynomial. The specular term
/// shares the diffuse intensity scalar; there is no separate specular
/// intensity.
#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Vec3,
    ambient: f32,
    diffuse: f32,
    constant_att: f32,
    linear_att: f32,
    quadratic_att: f32,
}

impl PointLight {
    /// Create a light with the given intensities and attenuation
    /// coefficients.
    ///
    /// When both the linear and quadratic coefficients are zero, the
    /// constant coefficient is forced to 1 so attenuation degenerates
    /// to plain, undimmed illumination instead of a division by zero.
    pub fn new(
        position: Vec3,
        ambient: f32,
        diffuse: f32,
        constant_att: f32,
        linear_att: f32,
        quadratic_att: f32,
    ) -> Self {
        let constant_att = if linear_att == 0.0 && quadratic_att == 0.0 {
            1.0
        } else {
            constant_att
        };

        Self {
            position,
            ambient,
            diffuse,
            constant_att,
            linear_att,
            quadratic_att,
        }
    }

    /// Intensity falloff at the given distance.
    pub fn attenuation(&self, distance: f32) -> f32 {
        let d2 = distance * distance;
        1.0 / (self.constant_att + self.linear_att * distance + self.quadratic_att * d2)
    }

    /// Ambient contribution for ambient reflectance `ka`.
    ///
    /// Applied whether or not the point is occluded, which makes it the
    /// floor for shadowed surfaces.
    pub fn ambient(&self, ka: Vec3) -> Vec3 {
        self.ambient * ka
    }

    /// Lambertian diffuse contribution.
    ///
    /// `to_light` is the unit vector from the surface toward the light.
    pub fn diffuse(&self, kd: Vec3, normal: Vec3, to_light: Vec3) -> Vec3 {
        let theta = normal.dot(to_light).max(0.0);
        self.diffuse * kd * theta
    }

    /// Phong specular contribution.
    ///
    /// `incident` is the unit vector from the light toward the surface
    /// and `to_viewer` the unit vector from the surface toward the eye.
    /// Scaled by the diffuse intensity.
    pub fn specular(
        &self,
        ks: Vec3,
        normal: Vec3,
        incident: Vec3,
        to_viewer: Vec3,
        glossiness: f32,
    ) -> Vec3 {
        let reflected = incident - normal * (2.0 * normal.dot(incident));
        let alpha = reflected.dot(to_viewer).max(0.0);
        self.diffuse * ks * alpha.powf(glossiness)
    }
}
