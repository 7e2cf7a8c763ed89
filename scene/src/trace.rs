use crate::Scene;
use geometry::ray::NormRay;
use math::hcm::{self, UnitVec3};
use radiometry::color::Color;
use shape::Intersection;

/// Distance by which secondary rays start off the surface they leave, so that they do not hit it
/// again right away.
pub const SURFACE_BIAS: f32 = 0.01;

/// Index of refraction of the medium outside every solid.
pub const AIR_IOR: f32 = 1.0;

/// What a ray carries along the recursion besides its geometry.
#[derive(Debug, Clone, Copy)]
pub struct RayState {
    /// Remaining reflection/refraction bounces.
    pub depth: u32,
    /// Index of refraction of the medium the ray travels in.
    pub ior: f32,
    /// Weight of this ray's contribution to the final pixel.
    pub strength: f32,
    /// Absorption coefficient of the medium the ray travels in.
    pub absorbance: f32,
}

impl RayState {
    /// A camera ray travelling through air.
    pub fn primary(max_depth: u32) -> Self {
        RayState {
            depth: max_depth,
            ior: AIR_IOR,
            strength: 1.0,
            absorbance: 0.0,
        }
    }

    fn bounce(self, strength: f32) -> Self {
        RayState {
            depth: self.depth - 1,
            strength: self.strength * strength,
            ..self
        }
    }
}

impl Scene {
    /// Computes the color seen along a camera ray, following at most `max_depth` bounces.
    pub fn trace(&self, ray: NormRay, max_depth: u32) -> Color {
        self.trace_from(ray, RayState::primary(max_depth))
    }

    /// Computes the color seen along `ray`, which travels in the medium described by `state`.
    /// The result is saturated to [0, 1] per channel.
    pub fn trace_from(&self, ray: NormRay, state: RayState) -> Color {
        let mut isect = Intersection::new(ray);
        if !self.compute_intersection(&mut isect) {
            return Color::black();
        }
        let (entity, object) = match (isect.entity(), isect.object()) {
            (Some(entity), Some(object)) => (entity, object),
            _ => unreachable!("a hit always records its entity and object"),
        };
        let m = object.material.as_ref();
        let p = isect.hit_point();

        let mut strength = state.strength;
        if state.absorbance != 0.0 {
            strength *= (-isect.t() * state.absorbance).exp();
        }

        // Shading normal, on the side the ray comes from.
        let normal = if isect.from_inside() {
            -isect.normal()
        } else {
            isect.normal()
        };

        let obj_color = object.texture.color_at(p, entity) * strength;
        let ambient = self.ambient + m.ambient();
        let mut color = obj_color * ambient;

        for light in self.lights.iter() {
            let to_light = light.position() - p;
            let dist = to_light.norm();
            let to_light = match UnitVec3::try_new(to_light) {
                Some(dir) => dir,
                None => continue,
            };

            if object.shadows && light.casts_shadows() {
                let probe = NormRay::new(p, to_light).advanced(SURFACE_BIAS);
                if self.find_an_intersection(probe, dist - SURFACE_BIAS) {
                    continue;
                }
            }

            // Diffuse shading only depends on the light's direction; a material less diffuse than
            // the ambient level darkens on its lit side.
            let cosine = to_light.dot(normal);
            if m.diffuse() > 0.0 && cosine > 0.0 {
                color += obj_color * ((m.diffuse() - ambient) * cosine);
            }

            // Phong highlight: the light's mirror direction against the view direction.
            if m.specular() > 0.0 {
                let mirrored = hcm::reflect(normal, to_light.vec()).try_hat();
                let cosine = mirrored.map_or(0.0, |mirrored| -ray.dir.dot(mirrored));
                if cosine > 0.0 {
                    let highlight = m.specular() * cosine.powi(m.shininess()) * strength;
                    color += light.color_at(p) * highlight;
                }
            }
        }

        let depth = state.depth.min(m.max_ref());
        if depth > 0 {
            let state = RayState { depth, strength, ..state };
            if m.reflective() > 0.0 {
                let reflected = UnitVec3::new(hcm::reflect(normal, -ray.dir.vec()));
                let bounce = NormRay::new(p, reflected).advanced(SURFACE_BIAS);
                color += self.trace_from(bounce, state.bounce(m.reflective()));
            }
            if m.refractive() > 0.0 {
                // Leaving the solid goes back into air and drops its absorption.
                let (target_ior, absorbance) = if isect.from_inside() {
                    (AIR_IOR, state.absorbance - m.absorbance())
                } else {
                    (m.ior(), state.absorbance + m.absorbance())
                };
                match hcm::refract(normal, -ray.dir, state.ior / target_ior) {
                    hcm::Transmit(dir) => {
                        let bounce = NormRay::new(p, UnitVec3::new(dir)).advanced(SURFACE_BIAS);
                        let state = RayState {
                            ior: target_ior,
                            absorbance,
                            ..state.bounce(m.refractive())
                        };
                        color += self.trace_from(bounce, state);
                    }
                    hcm::FullReflect(_) => {
                        log::trace!("total internal reflection at {}", p);
                    }
                }
            }
        }

        color.clamped()
    }
}
