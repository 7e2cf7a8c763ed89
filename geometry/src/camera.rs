use crate::ray;
use math::hcm;

/// Left-handed coordinate system camera: x rightward, y upward, z forward.
pub struct Camera {
    center: hcm::Point3,
    // Per-pixel steps along the film (`a` rightward, `b` downward) and the top-left corner `c`.
    a: hcm::Vec3,
    b: hcm::Vec3,
    c: hcm::Vec3,

    // Film image resolution.
    width: u32,
    height: u32,

    orientation: hcm::Mat3,
}

impl Camera {
    /// Builds a camera at the origin looking along +z, with the vertical field of view `fov_y`
    /// given in degrees.
    pub fn new(resolution: (u32, u32), fov_y: f32) -> Camera {
        let (width, height) = resolution;
        assert!(width > 0 && height > 0, "empty film {}x{}", width, height);
        let aspect_ratio = width as f32 / (height as f32);
        let half_vertical = (fov_y.to_radians() * 0.5).tan();
        let half_horizontal = half_vertical * aspect_ratio;

        Camera {
            center: hcm::Point3::ORIGIN,
            a: hcm::Vec3::new(half_horizontal / (width as f32 * 0.5), 0.0, 0.0),
            b: hcm::Vec3::new(0.0, -half_vertical / (height as f32 * 0.5), 0.0),
            c: hcm::Vec3::new(-half_horizontal, half_vertical, 1.0),
            width,
            height,
            orientation: hcm::Mat3::IDENTITY,
        }
    }

    pub fn looking_at(self, from: hcm::Point3, target: hcm::Point3, up: hcm::Vec3) -> Self {
        let forward = (target - from).hat(); // new z-axis
        let right = (up.cross(forward)).hat(); // new x-axis, equals to cross(y, z)
        let up = forward.cross(right); // adjusted y-axis, equals to cross(z, x)

        Self {
            orientation: hcm::Mat3::from_cols(right, up, forward),
            center: from,
            ..self
        }
    }

    /// Points the camera from `from` along `direction`, keeping +y as "up" unless the camera looks
    /// straight up or down.
    pub fn looking_along(self, from: hcm::Point3, direction: hcm::Vec3) -> Self {
        let forward = direction.hat();
        let up = if forward.cross(hcm::Vec3::Y).norm_squared() < 1e-6 {
            hcm::Vec3::Z
        } else {
            hcm::Vec3::Y
        };
        self.looking_at(from, from + forward, up)
    }

    /// Shoots the ray through the center of pixel (`row`, `col`). Returns `None` outside the film.
    pub fn shoot_ray(&self, row: u32, col: u32) -> Option<ray::NormRay> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let x = col as f32 + 0.5;
        let y = row as f32 + 0.5;
        let dir = self.orientation * (self.c + self.a * x + self.b * y);
        Some(ray::Ray::new(self.center, dir).normalized())
    }

    /// Returns resolution (width x height) of the camera film.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use math::hcm::{point3, vec3, Vec3};

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new((101, 101), 60.0).looking_along(point3(0.0, 5.0, -20.0), Vec3::Z);
        let r = camera.shoot_ray(50, 50).unwrap();
        assert_eq!(r.origin, point3(0.0, 5.0, -20.0));
        math::assert_close!(r.dir.vec(), Vec3::Z);
        assert!(camera.shoot_ray(101, 0).is_none());
    }

    #[test]
    fn rows_go_down_and_columns_go_right() {
        let camera = Camera::new((64, 48), 90.0).looking_along(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        let top_left = camera.shoot_ray(0, 0).unwrap().dir;
        let bottom_right = camera.shoot_ray(47, 63).unwrap().dir;
        // Looking along +x, "right" is -z in this left-handed frame.
        assert!(top_left.vec().y > 0.0 && bottom_right.vec().y < 0.0);
        assert!(top_left.vec().z > 0.0 && bottom_right.vec().z < 0.0);
    }

    #[test]
    fn vertical_view_does_not_degenerate() {
        let camera = Camera::new((8, 8), 45.0).looking_along(point3(0.0, 10.0, 0.0), -Vec3::Y);
        let r = camera.shoot_ray(4, 4).unwrap();
        assert!(r.dir.vec().y < -0.9);
    }
}
