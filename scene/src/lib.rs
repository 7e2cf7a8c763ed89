pub mod preset;
mod trace;

use geometry::ray::NormRay;
use light::Light;
use material::Material;
use shape::{Entity, Intersection};
use std::sync::Arc;
use texture::Texture;

pub use trace::{RayState, AIR_IOR, SURFACE_BIAS};

/// The unit the scene is made of: a solid with its surface description.
#[derive(Clone)]
pub struct Object {
    pub entity: Arc<Entity>,
    pub material: Arc<Material>,
    pub texture: Arc<dyn Texture>,
    /// Whether this object receives shadows. Objects always occlude others.
    pub shadows: bool,
}

impl Object {
    pub fn new(entity: Arc<Entity>, material: Arc<Material>, texture: Arc<dyn Texture>) -> Self {
        Object {
            entity,
            material,
            texture,
            shadows: true,
        }
    }

    pub fn without_shadows(self) -> Self {
        Self {
            shadows: false,
            ..self
        }
    }

    pub fn intersect<'a>(
        &'a self,
        i: &mut Intersection<'a, Object>,
        tlim: f32,
    ) -> bool {
        self.entity.intersect(i, self, tlim)
    }
}

/// Objects and lights, plus a global ambient term. Read-only once built: rendering only borrows it.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Arc<dyn Light>>,
    pub ambient: f32,
}

impl Scene {
    pub fn new(ambient: f32) -> Self {
        Scene {
            objects: vec![],
            lights: vec![],
            ambient,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        log::debug!(
            "object #{}: {} with {}",
            self.objects.len(),
            object.entity.summary(),
            object.material.summary()
        );
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Arc<dyn Light>) {
        log::debug!("light #{}: {}", self.lights.len(), light.summary());
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }
    pub fn lights(&self) -> &[Arc<dyn Light>] {
        &self.lights
    }

    /// Updates `i` with the nearest crossing over all objects. Every object is tested: one tested
    /// later may be nearer.
    pub fn compute_intersection<'a>(&'a self, i: &mut Intersection<'a, Object>) -> bool {
        let mut hit = false;
        for object in self.objects.iter() {
            hit |= object.intersect(i, 0.0);
        }
        hit
    }

    /// Tells whether anything crosses `ray` before distance `max_t`. Stops at the first object found.
    pub fn find_an_intersection(&self, ray: NormRay, max_t: f32) -> bool {
        let mut i = Intersection::within(ray, max_t);
        self.objects.iter().any(|object| object.intersect(&mut i, 0.0))
    }
}
