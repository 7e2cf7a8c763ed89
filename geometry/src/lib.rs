/// Pinhole camera producing one primary ray per pixel.
pub mod camera;
pub mod ray;

pub use camera::Camera;
pub use ray::{NormRay, Ray};
