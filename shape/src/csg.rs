use crate::{Entity, Intersection};
use math::hcm::Point3;
use std::sync::Arc;

/// Restricts `obj` to the inside of `bbox`. Rays missing the bounding solid skip `obj` entirely;
/// hits are always attributed to `obj`.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    obj: Arc<Entity>,
    bbox: Arc<Entity>,
}

/// `obj` with the volume of `bite` removed.
#[derive(Debug, Clone)]
pub struct Difference {
    obj: Arc<Entity>,
    bite: Arc<Entity>,
}

/// `obj` together with `rest`. When `rest` is itself a `Union` the pair forms a chain, which is
/// walked iteratively.
#[derive(Debug, Clone)]
pub struct Union {
    obj: Arc<Entity>,
    rest: Arc<Entity>,
}

impl BoundingBox {
    pub fn new(obj: Arc<Entity>, bbox: Arc<Entity>) -> Self {
        BoundingBox { obj, bbox }
    }

    pub fn inside(&self, p: Point3) -> bool {
        self.bbox.inside(p) && self.obj.inside(p)
    }

    pub fn intersect<'a, O>(
        &'a self,
        i: &mut Intersection<'a, O>,
        owner: &'a O,
        tlim: f32,
    ) -> bool {
        let ray = *i.ray();
        let mut scratch = Intersection::new(ray);
        let reaches_bbox = self.bbox.inside(ray.position_at(tlim))
            || self.bbox.intersect(&mut scratch, owner, tlim);
        reaches_bbox && self.obj.intersect(i, owner, tlim)
    }
}

impl Difference {
    pub fn new(obj: Arc<Entity>, bite: Arc<Entity>) -> Self {
        Difference { obj, bite }
    }

    pub fn inside(&self, p: Point3) -> bool {
        self.obj.inside(p) && !self.bite.inside(p)
    }

    /// Where the first crossing of `obj` lies within `bite`, the visible surface is where the ray
    /// leaves `bite`, so `bite` is probed again past that crossing. The exit point is assumed to be
    /// inside `obj`.
    pub fn intersect<'a, O>(
        &'a self,
        i: &mut Intersection<'a, O>,
        owner: &'a O,
        tlim: f32,
    ) -> bool {
        let mut probe = *i;
        if !self.obj.intersect(&mut probe, owner, tlim) {
            return false;
        }
        if !self.bite.inside(probe.hit_point()) {
            *i = probe;
            true
        } else if self.bite.intersect(i, owner, probe.t()) {
            i.carve();
            true
        } else {
            false
        }
    }
}

impl Union {
    pub fn new(obj: Arc<Entity>, rest: Arc<Entity>) -> Self {
        Union { obj, rest }
    }

    /// Calls `f` on every member of the chain, including the final non-union tail.
    fn for_each_member<'a>(&'a self, mut f: impl FnMut(&'a Entity)) {
        f(self.obj.as_ref());
        let mut tail: &'a Entity = self.rest.as_ref();
        while let Entity::Union(next) = tail {
            f(next.obj.as_ref());
            tail = next.rest.as_ref();
        }
        f(tail);
    }

    pub fn inside(&self, p: Point3) -> bool {
        let mut inside = false;
        self.for_each_member(|member| inside = inside || member.inside(p));
        inside
    }

    /// Every member is probed: a later one may be nearer than an earlier hit.
    pub fn intersect<'a, O>(
        &'a self,
        i: &mut Intersection<'a, O>,
        owner: &'a O,
        tlim: f32,
    ) -> bool {
        let mut hit = false;
        self.for_each_member(|member| hit |= member.intersect(i, owner, tlim));
        hit
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Plane, Sphere};
    use geometry::ray::Ray;
    use math::hcm::{point3, Vec3};

    fn ball(x: f32, y: f32, z: f32, r: f32) -> Arc<Entity> {
        Arc::new(Entity::Sphere(Sphere::new(point3(x, y, z), r)))
    }

    #[test]
    fn union_chain_visits_every_member() {
        let chain = Entity::union_all(vec![
            ball(0.0, 0.0, 30.0, 1.0),
            ball(0.0, 0.0, 20.0, 1.0),
            ball(0.0, 0.0, 10.0, 1.0),
            ball(0.0, 0.0, 40.0, 1.0),
        ])
        .unwrap();
        let r = Ray::new(point3(0.0, 0.0, 0.0), Vec3::Z).normalized();
        let mut i = Intersection::<()>::new(r);
        assert!(chain.intersect(&mut i, &(), 0.0));
        assert!((i.t() - 9.0).abs() < 1e-5, "t = {}", i.t());
        assert!(chain.inside(point3(0.0, 0.0, 40.5)));
        assert!(!chain.inside(point3(0.0, 0.0, 35.0)));
    }

    #[test]
    fn bounding_box_keeps_inner_attribution() {
        let inner = ball(0.0, 0.0, 10.0, 1.0);
        let bounded = Entity::BoundingBox(BoundingBox::new(inner.clone(), ball(0.0, 0.0, 10.0, 2.0)));
        let r = Ray::new(point3(0.0, 0.0, 0.0), Vec3::Z).normalized();
        let mut i = Intersection::<()>::new(r);
        assert!(bounded.intersect(&mut i, &(), 0.0));
        assert!(std::ptr::eq(i.entity().unwrap(), inner.as_ref()));

        let miss = Ray::new(point3(0.0, 5.0, 0.0), Vec3::Z).normalized();
        let mut i = Intersection::<()>::new(miss);
        assert!(!bounded.intersect(&mut i, &(), 0.0));
        assert!(!i.is_hit());
    }

    #[test]
    fn difference_hits_far_side_of_bite() {
        // A ball with its lower half (y <= 0 relative to its center) removed.
        let cup = Entity::Difference(Difference::new(
            ball(0.0, 0.0, 10.0, 2.0),
            Arc::new(Entity::Plane(Plane::new(Vec3::Y, 0.0))),
        ));
        // Straight down from above: the ball surface at y = 2 is kept.
        let down = Ray::new(point3(0.0, 5.0, 10.0), -Vec3::Y).normalized();
        let mut i = Intersection::<()>::new(down);
        assert!(cup.intersect(&mut i, &(), 0.0));
        assert!((i.t() - 3.0).abs() < 1e-5);

        // Straight up from below: the ball surface at y = -2 is carved away, and the cut at y = 0
        // is seen instead, facing down towards the ray.
        let up = Ray::new(point3(0.0, -5.0, 10.0), Vec3::Y).normalized();
        let mut i = Intersection::<()>::new(up);
        assert!(cup.intersect(&mut i, &(), 0.0));
        assert!((i.t() - 5.0).abs() < 1e-5, "t = {}", i.t());
        math::assert_close!(i.normal().vec(), -Vec3::Y);
        assert!(!i.from_inside());
    }
}
