use std::fmt::{Display, Formatter, Result};

use math::hcm::{self, UnitVec3};

/// Represents a ray:
///
///   origin + t * direction
///
/// The direction can have any nonzero length. Rays are values: "moving" a ray builds a new one.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
}

/// A ray whose direction is unit-length, so that `t` measures distance along it.
///
/// Intersection tests run on `NormRay`s only: the CSG protocol compares `t` values coming from
/// different surfaces, which is only meaningful if they share the same scale.
#[derive(Debug, Clone, Copy)]
pub struct NormRay {
    pub origin: hcm::Point3,
    pub dir: UnitVec3,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray { origin, dir }
    }
    /// Builds the ray from `from` that reaches `to` at `t = 1`.
    pub fn from_to(from: hcm::Point3, to: hcm::Point3) -> Self {
        Ray::new(from, to - from)
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }

    /// Panics if the direction is zero-length (see `UnitVec3::new()`).
    pub fn normalized(&self) -> NormRay {
        NormRay::new(self.origin, UnitVec3::new(self.dir))
    }
}

impl NormRay {
    pub fn new(origin: hcm::Point3, dir: UnitVec3) -> Self {
        NormRay { origin, dir }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + self.dir * t
    }

    /// Returns the same ray with its origin moved to `position_at(t0)`.
    pub fn advanced(&self, t0: f32) -> Self {
        NormRay::new(self.position_at(t0), self.dir)
    }
}

impl From<NormRay> for Ray {
    fn from(r: NormRay) -> Self {
        Ray::new(r.origin, r.dir.vec())
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}

impl Display for NormRay {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, vec3};

    #[test]
    fn normalized_ray_measures_distance() {
        let r = Ray::new(point3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 4.0)).normalized();
        let p = r.position_at(2.5);
        assert!(p.distance_to(point3(1.0, 0.0, 2.5)) < 1e-6, "{}", p);
    }

    #[test]
    fn advanced_ray_keeps_direction() {
        let r = Ray::from_to(point3(0.0, 1.0, 0.0), point3(0.0, 3.0, 0.0)).normalized();
        let moved = r.advanced(0.5);
        assert_eq!(moved.origin, point3(0.0, 1.5, 0.0));
        assert_eq!(moved.dir, r.dir);
        assert!(moved.position_at(1.0).distance_to(r.position_at(1.5)) < 1e-6);
    }
}
