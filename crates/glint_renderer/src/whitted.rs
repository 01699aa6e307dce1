//! Whitted-style recursive shading.
//!
//! Each primary ray gets direct Phong illumination at its nearest hit,
//! then spawns refraction and reflection rays whose contributions are
//! accumulated on the way back up. Reflection and refraction depths are
//! budgeted independently per primary ray.

use crate::{HitRecord, Scene};
use glint_math::{Ray, Vec3};

/// Offset applied to secondary ray origins so they escape the surface
/// that spawned them.
const RAY_BIAS: f32 = 0.1;

/// Refractive index of the surrounding medium.
const AIR_REFRACTIVE_INDEX: f32 = 1.0;

/// Per-primary-ray recursion state.
///
/// The two counters only ever increase and are shared along the whole
/// path rather than per branch, so a path may reflect up to the limit
/// and independently refract up to the same limit.
#[derive(Debug, Default, Clone, Copy)]
struct Bounces {
    reflect: u32,
    refract: u32,
}

/// Recursive Whitted tracer.
#[derive(Debug, Clone, Copy)]
pub struct Whitted {
    /// Maximum depth for each of the two bounce counters
    pub max_bounces: u32,
}

impl Default for Whitted {
    fn default() -> Self {
        Self { max_bounces: 2 }
    }
}

impl Whitted {
    /// Create a tracer with the given bounce limit.
    pub fn new(max_bounces: u32) -> Self {
        Self { max_bounces }
    }

    /// Color seen along a primary ray. Black when the ray escapes the
    /// scene; otherwise direct light at the hit plus the recursive
    /// secondary contributions, clamped per channel to 1.
    pub fn trace(&self, scene: &Scene, ray: &Ray) -> Vec3 {
        let hit = match scene.nearest_hit(ray) {
            Some(hit) => hit,
            None => return Vec3::ZERO,
        };

        let mut bounces = Bounces::default();
        let color = direct_light(scene, &hit) + self.secondary(scene, ray, &hit, &mut bounces);

        // Channels are non-negative by construction, so clamping once
        // at the top equals clamping after every recursion level
        color.min(Vec3::ONE)
    }

    /// Secondary contributions at a hit: refraction first, then
    /// reflection, sharing the same counter state.
    fn secondary(&self, scene: &Scene, ray: &Ray, hit: &HitRecord, bounces: &mut Bounces) -> Vec3 {
        let refracted = self.refraction(scene, ray, hit, bounces);
        let reflected = self.reflection(scene, ray, hit, bounces);
        refracted + reflected
    }

    /// Transmission through a refractive surface.
    ///
    /// An opaque surface reached while the refraction counter is
    /// nonzero terminates a transmission path and deposits its own
    /// direct light.
    fn refraction(&self, scene: &Scene, ray: &Ray, hit: &HitRecord, bounces: &mut Bounces) -> Vec3 {
        if hit.material.refraction > 0.0 {
            if bounces.refract < self.max_bounces {
                bounces.refract += 1;
                let refracted = refracted_ray(ray, hit);
                if let Some(next) = scene.nearest_hit(&refracted) {
                    return self.secondary(scene, &refracted, &next, bounces);
                }
            }
        } else if bounces.refract > 0 {
            return direct_light(scene, hit);
        }

        Vec3::ZERO
    }

    /// Mirror bounce off a reflective surface.
    ///
    /// The next surface's direct light is scaled by this surface's
    /// reflectivity; deeper contributions are accumulated unscaled.
    fn reflection(&self, scene: &Scene, ray: &Ray, hit: &HitRecord, bounces: &mut Bounces) -> Vec3 {
        if bounces.reflect < self.max_bounces && hit.material.reflectivity > 0.0 {
            bounces.reflect += 1;
            let reflected = reflected_ray(ray, hit);
            if let Some(next) = scene.nearest_hit(&reflected) {
                return direct_light(scene, &next) * hit.material.reflectivity
                    + self.secondary(scene, &reflected, &next, bounces);
            }
        }

        Vec3::ZERO
    }
}

/// Direct illumination at a hit point.
///
/// Occluded points receive the ambient term only; lit points receive
/// ambient plus attenuated diffuse and specular.
fn direct_light(scene: &Scene, hit: &HitRecord) -> Vec3 {
    let light = &scene.light;

    // Shadow ray leaves the surface along the normal to avoid finding
    // the surface itself
    let shadow_origin = hit.point + hit.normal * RAY_BIAS;
    let shadow_ray = Ray::new(shadow_origin, (light.position - shadow_origin).normalize());
    if scene.shadow_hit(&shadow_ray).is_some() {
        return light.ambient(hit.material.ambient);
    }

    let to_light = (light.position - hit.point).normalize();
    let to_viewer = (scene.eye - hit.point).normalize();
    let attenuation = light.attenuation(light.position.distance(hit.point));

    light.ambient(hit.material.ambient)
        + attenuation
            * (light.diffuse(hit.material.diffuse, hit.normal, to_light)
                + light.specular(
                    hit.material.specular,
                    hit.normal,
                    -to_light,
                    to_viewer,
                    hit.material.glossiness,
                ))
}

/// Mirror the path back toward the ray origin about the surface normal.
fn reflected_ray(ray: &Ray, hit: &HitRecord) -> Ray {
    let to_origin = (ray.origin - hit.point).normalize();
    let direction = hit.normal * (2.0 * hit.normal.dot(to_origin)) - to_origin;

    Ray::new(hit.point + hit.normal * RAY_BIAS, direction)
}

/// Bend the ray through the surface per Snell's law.
///
/// The index ratio flips depending on whether the ray enters or exits
/// the surface. Total internal reflection is not special-cased: the
/// cosine term goes negative, the direction becomes NaN and the ray
/// intersects nothing.
fn refracted_ray(ray: &Ray, hit: &HitRecord) -> Ray {
    let entering = hit.normal.dot(ray.direction) < 0.0;
    let (eta, normal) = if entering {
        (AIR_REFRACTIVE_INDEX / hit.material.refraction, hit.normal)
    } else {
        (hit.material.refraction / AIR_REFRACTIVE_INDEX, -hit.normal)
    };

    let cos_theta = -normal.dot(ray.direction);
    let cos_phi2 = 1.0 - eta * eta * (1.0 - cos_theta * cos_theta);
    let direction = ray.direction * eta + normal * (eta * cos_theta - cos_phi2.sqrt());

    // The bias follows the transmitted direction, placing the origin
    // just inside the medium the ray is entering
    Ray::new(hit.point + direction * RAY_BIAS, direction)
}
