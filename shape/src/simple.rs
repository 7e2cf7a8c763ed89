use geometry::ray::NormRay;
use math::float::Float;
use math::hcm::{make_coord_system, Point3, UnitVec3, Vec3};
use std::f32::consts::PI;

/// A half-space bounded by the plane `p.n + d = 0`. The normal `n` is the outward normal of the
/// solid: points with `p.n + d <= 0` are inside.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: UnitVec3,
    d: f32,
}

impl Plane {
    pub fn new(normal: Vec3, d: f32) -> Plane {
        Plane {
            normal: UnitVec3::new(normal),
            d,
        }
    }

    /// The plane through `a`, `b` and `c`, with its normal along `(b - a) x (c - a)`.
    pub fn through(a: Point3, b: Point3, c: Point3) -> Plane {
        let normal = UnitVec3::new((b - a).cross(c - a));
        Plane {
            normal,
            d: -normal.dot(a),
        }
    }

    /// Returns the same plane, oriented so that `p` lies in the solid half-space.
    pub fn containing(self, p: Point3) -> Plane {
        if self.inside(p) {
            self
        } else {
            Plane {
                normal: -self.normal,
                d: -self.d,
            }
        }
    }

    pub fn normal(&self) -> UnitVec3 {
        self.normal
    }

    pub fn inside(&self, p: Point3) -> bool {
        self.signed_distance(p) <= 0.0
    }

    fn signed_distance(&self, p: Point3) -> f32 {
        self.normal.dot(p) + self.d
    }

    /// Solves `(o + t.dir).n + d = 0`. A ray parallel to the plane never crosses it.
    /// Returns the distance and whether the ray leaves the solid there.
    pub fn crossing(&self, r: &NormRay) -> Option<(f32, bool)> {
        let denom = r.dir.dot(self.normal);
        let t = (-self.signed_distance(r.origin)).try_divide(denom)?;
        Some((t, denom > 0.0))
    }

    /// Coordinates of `p` projected onto a fixed tangent frame of the plane.
    pub fn uv(&self, p: Point3) -> (f32, f32) {
        let (tangent, bitangent) = make_coord_system(self.normal.vec());
        let p = Vec3::from(p);
        (p.dot(tangent), p.dot(bitangent))
    }

    pub fn summary(&self) -> String {
        format!("Plane{{ normal = {}, d = {} }}", self.normal, self.d)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    r2: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        assert!(!center.has_nan() && !radius.is_nan());
        // A point-sized sphere has no normal at its center.
        assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Sphere {
            center,
            radius,
            r2: radius * radius,
        }
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn inside(&self, p: Point3) -> bool {
        p.squared_distance_to(self.center) <= self.r2
    }

    /// Same test as `inside()` for the complement of the ball; the surface belongs to both.
    pub fn outside(&self, p: Point3) -> bool {
        p.squared_distance_to(self.center) >= self.r2
    }

    /// Finds where `r` crosses the sphere beyond `tlim`.
    ///
    /// The roots are `tpp -/+ tdc` with `tpp` the distance to the center projected on the ray, so
    /// no large terms cancel. If the near root is not beyond `tlim` the far one is reported, and
    /// the ray is then leaving the ball.
    pub fn crossing(&self, r: &NormRay, tlim: f32) -> Option<(f32, bool)> {
        let to_center = self.center - r.origin;
        let tpp = r.dir.dot(to_center);
        let tdc2 = self.r2 - (to_center.norm_squared() - tpp * tpp);
        if tdc2 < 0.0 {
            return None;
        }
        let tdc = tdc2.sqrt();
        let near = tpp - tdc;
        if near <= tlim {
            Some((tpp + tdc, true))
        } else {
            Some((near, false))
        }
    }

    /// Outward normal at `p`, which should lie on the surface.
    pub fn normal_at(&self, p: Point3) -> UnitVec3 {
        UnitVec3::new(p - self.center)
    }

    /// Longitude and colatitude of `p`, both scaled to [0, 1].
    pub fn uv(&self, p: Point3) -> (f32, f32) {
        let n = self.normal_at(p).vec();
        let theta = n.y.clamp(-1.0, 1.0).acos();
        let phi = n.z.atan2(n.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }

    pub fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
}

#[cfg(test)]
mod test {
    use super::{Plane, Sphere};
    use geometry::ray::Ray;
    use math::hcm::{point3, vec3, Vec3};

    #[test]
    fn plane_crossing_and_side() {
        let floor = Plane::new(Vec3::Y, 0.0);
        assert!(floor.inside(point3(3.0, -1.0, 2.0)));
        assert!(floor.inside(point3(3.0, 0.0, 2.0)));
        assert!(!floor.inside(point3(3.0, 0.5, 2.0)));

        let down = Ray::new(point3(1.0, 4.0, 1.0), vec3(0.0, -2.0, 0.0)).normalized();
        let (t, leaving) = floor.crossing(&down).unwrap();
        assert!((t - 4.0).abs() < 1e-6);
        assert!(!leaving);

        let up = Ray::new(point3(1.0, -4.0, 1.0), Vec3::Y).normalized();
        let (t, leaving) = floor.crossing(&up).unwrap();
        assert!((t - 4.0).abs() < 1e-6);
        assert!(leaving);

        let parallel = Ray::new(point3(0.0, 1.0, 0.0), Vec3::X).normalized();
        assert!(floor.crossing(&parallel).is_none());
    }

    #[test]
    fn plane_through_points() {
        let p = Plane::through(
            point3(0.0, 2.0, 0.0),
            point3(0.0, 2.0, 1.0),
            point3(1.0, 2.0, 0.0),
        );
        math::assert_close!(p.normal().vec(), Vec3::Y);
        assert!(p.inside(point3(5.0, 1.0, -3.0)));
        let flipped = p.containing(point3(0.0, 3.0, 0.0));
        math::assert_close!(flipped.normal().vec(), -Vec3::Y);
        assert!(flipped.inside(point3(0.0, 3.0, 0.0)));
        assert!(!flipped.inside(point3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn sphere_root_selection() {
        let s = Sphere::new(point3(0.0, 0.0, 10.0), 2.0);
        let r = Ray::new(point3(0.0, 0.0, 0.0), Vec3::Z).normalized();
        let (t, leaving) = s.crossing(&r, 0.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5 && !leaving);

        // Excluding the near surface reports the far one.
        let (t, leaving) = s.crossing(&r, 8.0).unwrap();
        assert!((t - 12.0).abs() < 1e-5 && leaving);

        // From the center, the only forward root is the far one.
        let inner = Ray::new(point3(0.0, 0.0, 10.0), Vec3::X).normalized();
        let (t, leaving) = s.crossing(&inner, 0.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5 && leaving);

        let miss = Ray::new(point3(0.0, 3.0, 0.0), Vec3::Z).normalized();
        assert!(s.crossing(&miss, 0.0).is_none());
    }

    #[test]
    #[should_panic]
    fn sphere_needs_a_positive_radius() {
        Sphere::new(point3(0.0, 0.0, 5.0), 0.0);
    }

    #[test]
    fn sphere_uv_ranges() {
        let s = Sphere::new(point3(1.0, 1.0, 1.0), 3.0);
        let (_, v_top) = s.uv(point3(1.0, 4.0, 1.0));
        let (_, v_bottom) = s.uv(point3(1.0, -2.0, 1.0));
        assert!(v_top.abs() < 1e-6);
        assert!((v_bottom - 1.0).abs() < 1e-6);
        let (u, v) = s.uv(point3(4.0, 1.0, 1.0));
        assert!((u - 0.5).abs() < 1e-6 && (v - 0.5).abs() < 1e-6);
    }
}
