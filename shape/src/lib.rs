mod csg;
mod intersection;
mod simple;

use math::hcm::{Point3, UnitVec3};
use std::sync::Arc;

pub use csg::{BoundingBox, Difference, Union};
pub use intersection::Intersection;
pub use simple::{Plane, Sphere};

/// A solid that a ray can enter and leave.
/// - See `simple.rs` for the leaf solids: `Plane` (a half-space) and `Sphere`.
/// - See `csg.rs` for the combinators. Children are shared through `Arc`s, so one solid can be
///   reused in several trees.
///
/// Every variant answers `inside()` and `intersect()`. Only leaves have surfaces of their own:
/// normals and texture coordinates of a composite are always read from the leaf recorded in an
/// `Intersection`.
#[derive(Debug, Clone)]
pub enum Entity {
    Plane(Plane),
    Sphere(Sphere),
    /// Everything outside a sphere; its normal points towards the center.
    ReverseSphere(Sphere),
    BoundingBox(BoundingBox),
    Difference(Difference),
    Union(Union),
}

impl Entity {
    pub fn inside(&self, p: Point3) -> bool {
        match self {
            Entity::Plane(plane) => plane.inside(p),
            Entity::Sphere(sphere) => sphere.inside(p),
            Entity::ReverseSphere(sphere) => sphere.outside(p),
            Entity::BoundingBox(bounded) => bounded.inside(p),
            Entity::Difference(diff) => diff.inside(p),
            Entity::Union(union) => union.inside(p),
        }
    }

    /// Looks for the first crossing of `i.ray()` with the surface that lies strictly beyond `tlim`
    /// and strictly before `i.t()`. On success `i` is updated with the crossing, the leaf that
    /// produced it and `owner`, and true is returned. Otherwise `i` is left untouched.
    pub fn intersect<'a, O>(
        &'a self,
        i: &mut Intersection<'a, O>,
        owner: &'a O,
        tlim: f32,
    ) -> bool {
        let crossing = match self {
            Entity::Plane(plane) => plane.crossing(i.ray()),
            Entity::Sphere(sphere) => sphere.crossing(i.ray(), tlim),
            Entity::ReverseSphere(sphere) => sphere
                .crossing(i.ray(), tlim)
                .map(|(t, from_inside)| (t, !from_inside)),
            Entity::BoundingBox(bounded) => return bounded.intersect(i, owner, tlim),
            Entity::Difference(diff) => return diff.intersect(i, owner, tlim),
            Entity::Union(union) => return union.intersect(i, owner, tlim),
        };
        match crossing {
            Some((t, from_inside)) => i.offer(tlim, t, from_inside, self, owner),
            None => false,
        }
    }

    /// Outward normal at surface point `p`.
    ///
    /// Panics on composite entities: the surface of a composite belongs to one of its leaves, and
    /// asking the composite means a hit was not attributed to the leaf that produced it.
    pub fn normal_at(&self, p: Point3) -> UnitVec3 {
        match self {
            Entity::Plane(plane) => plane.normal(),
            Entity::Sphere(sphere) => sphere.normal_at(p),
            Entity::ReverseSphere(sphere) => -sphere.normal_at(p),
            composite => panic!("no surface normal on composite {}", composite.summary()),
        }
    }

    /// Texture coordinates of surface point `p`. Panics on composite entities, like `normal_at()`.
    pub fn texture_uv(&self, p: Point3) -> (f32, f32) {
        match self {
            Entity::Plane(plane) => plane.uv(p),
            Entity::Sphere(sphere) | Entity::ReverseSphere(sphere) => sphere.uv(p),
            composite => panic!("no texture coordinates on composite {}", composite.summary()),
        }
    }
    pub fn texture_u(&self, p: Point3) -> f32 {
        self.texture_uv(p).0
    }
    pub fn texture_v(&self, p: Point3) -> f32 {
        self.texture_uv(p).1
    }

    /// Builds the union chain `e0 | (e1 | (... | en))`. Returns `None` for no entities, and the
    /// entity itself for a single one.
    pub fn union_all(entities: impl IntoIterator<Item = Arc<Entity>>) -> Option<Entity> {
        let mut members: Vec<_> = entities.into_iter().collect();
        let mut tail = members.pop()?;
        while let Some(obj) = members.pop() {
            tail = Arc::new(Entity::Union(Union::new(obj, tail)));
        }
        Some(Arc::try_unwrap(tail).unwrap_or_else(|shared| shared.as_ref().clone()))
    }

    pub fn summary(&self) -> String {
        match self {
            Entity::Plane(plane) => plane.summary(),
            Entity::Sphere(sphere) => sphere.summary(),
            Entity::ReverseSphere(sphere) => format!("Reverse{}", sphere.summary()),
            Entity::BoundingBox(_) => String::from("BoundingBox"),
            Entity::Difference(_) => String::from("Difference"),
            Entity::Union(_) => String::from("Union"),
        }
    }
}

impl From<Plane> for Entity {
    fn from(plane: Plane) -> Self {
        Entity::Plane(plane)
    }
}
impl From<Sphere> for Entity {
    fn from(sphere: Sphere) -> Self {
        Entity::Sphere(sphere)
    }
}
impl From<BoundingBox> for Entity {
    fn from(bounded: BoundingBox) -> Self {
        Entity::BoundingBox(bounded)
    }
}
impl From<Difference> for Entity {
    fn from(diff: Difference) -> Self {
        Entity::Difference(diff)
    }
}
impl From<Union> for Entity {
    fn from(union: Union) -> Self {
        Entity::Union(union)
    }
}
