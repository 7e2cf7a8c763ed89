/// Defines helpers on floating-point numbers:
/// - `Float` trait with division that refuses zero divisors,
/// - `assert_ge!` to check that a quantity is not below a bound.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points, vectors and unit vectors, 3x3 matrices.
/// - Function `make_coord_system()` to build an orthogonal base from a `Vec3`.
/// - Functions `reflect()` and `refract()` to compute surface interactions.
pub mod hcm;
