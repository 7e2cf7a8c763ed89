use crate::Entity;
use geometry::ray::NormRay;
use math::hcm::{Point3, UnitVec3};

/// The running result of one ray query: the closest crossing found so far, which entity produced
/// it and on behalf of which owner object `O`.
///
/// `t` only ever decreases. An update happens through `offer()`, which accepts a crossing only if
/// it is strictly between the exclusion bound and the current best, and leaves every field
/// untouched otherwise.
pub struct Intersection<'a, O> {
    ray: NormRay,
    t: f32,
    entity: Option<&'a Entity>,
    object: Option<&'a O>,
    from_inside: bool,
    // Set when the recorded surface bounds a removed volume, whose solid side is reversed.
    inverted: bool,
}

// Derives would require `O: Clone`, but only references to `O` are held.
impl<'a, O> Clone for Intersection<'a, O> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, O> Copy for Intersection<'a, O> {}

impl<'a, O> Intersection<'a, O> {
    pub fn new(ray: NormRay) -> Self {
        Self::within(ray, f32::INFINITY)
    }

    /// Starts a query that only accepts crossings nearer than `limit`.
    pub fn within(ray: NormRay, limit: f32) -> Self {
        Intersection {
            ray,
            t: limit,
            entity: None,
            object: None,
            from_inside: false,
            inverted: false,
        }
    }

    pub fn ray(&self) -> &NormRay {
        &self.ray
    }
    pub fn t(&self) -> f32 {
        self.t
    }
    pub fn entity(&self) -> Option<&'a Entity> {
        self.entity
    }
    pub fn object(&self) -> Option<&'a O> {
        self.object
    }
    pub fn from_inside(&self) -> bool {
        self.from_inside
    }
    pub fn is_hit(&self) -> bool {
        self.entity.is_some()
    }

    pub fn hit_point(&self) -> Point3 {
        self.ray.position_at(self.t)
    }

    /// Outward normal of the solid at the hit point. This is the recorded leaf's own normal,
    /// reversed if the leaf was hit as the boundary of a carved-out volume.
    pub fn normal(&self) -> UnitVec3 {
        let entity = match self.entity {
            Some(entity) => entity,
            None => panic!("normal requested for a ray that hit nothing: {}", self.ray),
        };
        let n = entity.normal_at(self.hit_point());
        if self.inverted {
            -n
        } else {
            n
        }
    }

    /// Records a crossing at distance `t` if `tlim < t < self.t`. Returns whether it did.
    pub(crate) fn offer(
        &mut self,
        tlim: f32,
        t: f32,
        from_inside: bool,
        entity: &'a Entity,
        object: &'a O,
    ) -> bool {
        if t > tlim && t < self.t {
            self.t = t;
            self.entity = Some(entity);
            self.object = Some(object);
            self.from_inside = from_inside;
            self.inverted = false;
            true
        } else {
            false
        }
    }

    /// Turns the recorded surface into the boundary of the region it was carved from: the solid
    /// side and the normal swap.
    pub(crate) fn carve(&mut self) {
        self.inverted = !self.inverted;
        self.from_inside = !self.from_inside;
    }
}
