mod image;

use math::hcm::Point3;
use radiometry::color::Color;
use shape::Entity;

pub use image::{ImageTexture, TextureError};

/// Maps a surface point to a color. `entity` is the leaf solid that was hit, for textures laid out
/// in its surface coordinates.
pub trait Texture: Send + Sync {
    fn color_at(&self, p: Point3, entity: &Entity) -> Color;
}

/// The same color everywhere.
pub struct Solid {
    value: Color,
}

impl Solid {
    pub fn new(value: Color) -> Solid {
        Solid { value }
    }
}

impl Texture for Solid {
    fn color_at(&self, _: Point3, _: &Entity) -> Color {
        self.value
    }
}

/// Solid 3-D checkerboard of cubes with the given edge `size`, independent of the surface.
pub struct Checker {
    odd: Color,
    even: Color,
    size: f32,
}

impl Checker {
    pub fn new(odd: Color, even: Color, size: f32) -> Checker {
        assert!(size > 0.0, "checker cell size {} is not positive", size);
        Checker { odd, even, size }
    }
}

impl Texture for Checker {
    fn color_at(&self, p: Point3, _: &Entity) -> Color {
        let cell = |x: f32| (x / self.size).floor() as i64;
        if (cell(p.x) + cell(p.y) + cell(p.z)).rem_euclid(2) == 1 {
            self.odd
        } else {
            self.even
        }
    }
}

/// Checkerboard laid out on the surface coordinates of the hit entity, `cells` squares per unit.
pub struct UvChecker {
    odd: Color,
    even: Color,
    cells: f32,
}

impl UvChecker {
    pub fn new(odd: Color, even: Color, cells: f32) -> UvChecker {
        UvChecker { odd, even, cells }
    }
}

impl Texture for UvChecker {
    fn color_at(&self, p: Point3, entity: &Entity) -> Color {
        let (u, v) = entity.texture_uv(p);
        let parity = (u * self.cells).floor() as i64 + (v * self.cells).floor() as i64;
        if parity.rem_euclid(2) == 1 {
            self.odd
        } else {
            self.even
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, Vec3};
    use shape::{Plane, Sphere};

    #[test]
    fn checker_alternates_across_cells() {
        let floor = Entity::Plane(Plane::new(Vec3::Y, 0.0));
        let checker = Checker::new(Color::BLACK, Color::BLUE, 5.0);
        assert_eq!(checker.color_at(point3(1.0, 0.0, 1.0), &floor), Color::BLUE);
        assert_eq!(checker.color_at(point3(6.0, 0.0, 1.0), &floor), Color::BLACK);
        assert_eq!(checker.color_at(point3(-1.0, 0.0, 1.0), &floor), Color::BLACK);
        assert_eq!(checker.color_at(point3(-1.0, 0.0, -1.0), &floor), Color::BLUE);
    }

    #[test]
    fn uv_checker_follows_sphere_coordinates() {
        let ball = Entity::Sphere(Sphere::new(point3(0.0, 0.0, 0.0), 1.0));
        let checker = UvChecker::new(Color::WHITE, Color::RED, 2.0);
        // u = 0.5, v ~ 0.70 lies in cell (1, 1).
        assert_eq!(checker.color_at(point3(0.8, -0.6, 0.0), &ball), Color::RED);
        // Near the north pole v is close to 0 while u stays at 0.5: cell (1, 0).
        let p = point3(0.1, 0.995f32.sqrt(), 0.0);
        assert_eq!(checker.color_at(p, &ball), Color::WHITE);
    }
}
