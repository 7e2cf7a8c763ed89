use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

pub fn point3(x: f32, y: f32, z: f32) -> Point3 {
    Point3::new(x, y, z)
}

/// Represents a 3D vector. Each component is a `f32` number.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A `Vec3` known to be unit-length. The only way to build one is through normalization, so the
/// invariant holds from construction on; there are no mutators.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitVec3(Vec3);

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}
impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "[{:.p$}, {:.p$}, {:.p$}]",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}
impl fmt::Display for UnitVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const X: Vec3 = Self::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Self::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Self::new(0.0, 0.0, 1.0);
    pub const ZERO: Vec3 = Self::new(0.0, 0.0, 0.0);

    pub fn dot(self, v: Vec3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
    pub fn cross(self, v: Vec3) -> Vec3 {
        // x1 y1 z1
        // x2 y2 z2
        // i  j  k
        Vec3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn norm_squared(self) -> f32 {
        self.dot(self)
    }
    pub fn norm(self) -> f32 {
        f32::sqrt(self.norm_squared())
    }

    /// Returns a normalized (unit-length) `self` vector.
    /// Panics if the vector length is zero, NaN or infinite.
    pub fn hat(self) -> Vec3 {
        let norm2 = self.norm_squared();
        assert!(
            norm2 != 0.0 && norm2.is_finite(),
            "cannot normalize {:?}",
            self
        );
        let inv_sqrt = 1.0 / self.norm();
        self * inv_sqrt
    }
    pub fn try_hat(self) -> Option<Self> {
        let inv_length = 1.0 / self.norm();
        (inv_length.is_finite() && inv_length != 0.0).then(|| inv_length * self)
    }

    // Returns the index to the element with minimum magnitude.
    pub fn abs_min_dimension(self) -> usize {
        let abs = [self.x.abs(), self.y.abs(), self.z.abs()];
        let res = if abs[0] < abs[1] { 0 } else { 1 };
        if abs[res] < abs[2] {
            res
        } else {
            2
        }
    }
}

impl UnitVec3 {
    pub const X: UnitVec3 = UnitVec3(Vec3::X);
    pub const Y: UnitVec3 = UnitVec3(Vec3::Y);
    pub const Z: UnitVec3 = UnitVec3(Vec3::Z);

    /// Normalizes `v`. Panics on a zero-length, NaN or infinite vector: geometry construction
    /// should never produce one, so this is treated as a broken contract rather than bad input.
    pub fn new(v: Vec3) -> Self {
        UnitVec3(v.hat())
    }
    /// Normalizes `v`, or returns `None` where `new()` would panic.
    pub fn try_new(v: Vec3) -> Option<Self> {
        v.try_hat().map(UnitVec3)
    }
    pub fn vec(self) -> Vec3 {
        self.0
    }
    pub fn dot(self, v: impl Into<Vec3>) -> f32 {
        self.0.dot(v.into())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
impl Add<Point3> for Vec3 {
    type Output = Point3;
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

// A unit vector only leaves the unit sphere by becoming a plain `Vec3`.
impl Neg for UnitVec3 {
    type Output = Self;
    fn neg(self) -> UnitVec3 {
        UnitVec3(-self.0)
    }
}
impl Mul<f32> for UnitVec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.0 * s
    }
}
impl Mul<UnitVec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: UnitVec3) -> Vec3 {
        v.0 * self
    }
}
impl From<UnitVec3> for Vec3 {
    fn from(v: UnitVec3) -> Self {
        v.0
    }
}

// Implementation of Points
impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub fn distance_to(self, p: Self) -> f32 {
        (self - p).norm()
    }
    pub fn squared_distance_to(self, p: Self) -> f32 {
        (self - p).norm_squared()
    }
    pub fn has_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, v: Vec3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, from: Point3) -> Vec3 {
        Vec3::new(self.x - from.x, self.y - from.y, self.z - from.z)
    }
}
impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, t: Vec3) -> Point3 {
        Point3::new(self.x - t.x, self.y - t.y, self.z - t.z)
    }
}
// Explicit conversion between Vec3 and Point3.
// -------------------------------------------------------------------------------------------------
impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

/// ------------------------------------------------------------------------------------------------
/// Mat3: a linear map stored by columns; only `m * v` is needed.
#[derive(Debug, Clone, Copy)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };
    pub fn from_cols(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { cols: [v0, v1, v2] }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

// Mod-level functions

/// Computes a pair of unit-vectors that forms a orthonormal basis with `v`.
/// ```
/// use math::hcm::{Vec3, make_coord_system};
/// let v0 = Vec3::new(0.3, 0.4, -0.6).hat();
/// let (v1, v2) = make_coord_system(v0);
/// for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
///     assert!(a.dot(b).abs() < 1e-6);
/// }
/// assert!((v2.norm() - 1.0).abs() < 1e-6);
/// ```
pub fn make_coord_system(v: Vec3) -> (Vec3, Vec3) {
    // Zeroes the smallest component, e.g. [x, y, z] -> [-z, 0, x] when y is the smallest.
    let v1 = match v.abs_min_dimension() {
        0 => Vec3::new(0.0, v.z, -v.y),
        1 => Vec3::new(-v.z, 0.0, v.x),
        _ => Vec3::new(v.y, -v.x, 0.0),
    };
    assert!(v1.dot(v).abs() < f32::EPSILON);
    let v2 = v.cross(v1);
    (v1.hat(), v2.hat())
}

/// Mirrors `wi` around `normal`. With `wi` pointing away from the surface this gives the
/// outgoing mirror direction; equivalently `reflect(n, -d) = d - 2(d.n)n` for an incident `d`.
pub fn reflect(normal: UnitVec3, wi: Vec3) -> Vec3 {
    let perp = wi.dot(normal.vec()) * normal.vec();
    let parallel = wi - perp;
    wi - 2.0 * parallel
}

pub enum Refract {
    FullReflect(Vec3),
    Transmit(Vec3),
}

pub use Refract::FullReflect;
pub use Refract::Transmit;

/// Refracts incident light `wi` with regard to `normal`.
/// - `wi` points away from the surface, on the same side as `normal`.
/// - `ni_over_no` is the ratio of the refraction indices (incident side over transmitted side).
/// If `ni`/`no` > 1 (e.g., from water to air), there is a chance of full reflection.
pub fn refract(normal: UnitVec3, wi: UnitVec3, ni_over_no: f32) -> Refract {
    // Grazing hits can drift a hair below zero.
    let cos_theta_i = wi.dot(normal).clamp(0.0, 1.0);
    let sin2_theta_i = (1.0 - cos_theta_i.powi(2)).max(0.0);
    // sin_i * ni = sin_o * no => sin_o = sin_i * ni_over_no
    let sin2_theta_o = sin2_theta_i * ni_over_no.powi(2);
    if sin2_theta_o >= 1.0 {
        FullReflect(reflect(normal, wi.vec()))
    } else {
        let cos_theta_o = (1.0 - sin2_theta_o).sqrt();
        let refracted =
            ni_over_no * -wi.vec() + (ni_over_no * cos_theta_i - cos_theta_o) * normal.vec();
        Transmit(refracted)
    }
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        if ($left - $right).norm_squared() > 1e-4 {
            panic!(
                "Assertion failed: Close({}, {}) values: {} vs. {}, dist = {}",
                stringify!($left),
                stringify!($right),
                $left,
                $right,
                ($left - $right).norm()
            )
        }
    };
}
