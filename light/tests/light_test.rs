use std::sync::Arc;

use light::{AttenuatedLight, BoundedLight, DirectedLight, Light, PointLight};
use math::hcm::{point3, vec3, Point3};
use radiometry::color::Color;
use shape::{Entity, Sphere};

fn close(a: Color, b: Color) -> bool {
    a.max_diff(&b) < 1e-6
}

#[test]
fn point_light_is_uniform() {
    let l = PointLight::colored(point3(0.0, 10.0, 0.0), Color::GREEN);
    assert_eq!(l.color_at(Point3::ORIGIN), Color::GREEN);
    assert_eq!(l.color_at(point3(100.0, -3.0, 2.0)), Color::GREEN);
    assert_eq!(l.position(), point3(0.0, 10.0, 0.0));
    assert!(l.casts_shadows());
    assert!(!l.with_shadows(false).casts_shadows());
}

#[test]
fn attenuation_falls_off_with_squared_distance() {
    let base = Arc::new(PointLight::new(Point3::ORIGIN));
    let l = AttenuatedLight::new(base, 2.0, 0.5);
    // d^2 = 4: 2 / (1 + 0.5 * 4) = 2/3.
    assert!(close(l.color_at(point3(0.0, 2.0, 0.0)), Color::gray(2.0 / 3.0)));
    assert!(close(l.color_at(Point3::ORIGIN), Color::gray(2.0)));
    assert!(l.casts_shadows());
}

#[test]
fn bounded_light_is_dark_outside_its_volume() {
    let base = Arc::new(PointLight::new(point3(0.0, 5.0, 0.0)).with_shadows(false));
    let volume = Arc::new(Entity::Sphere(Sphere::new(Point3::ORIGIN, 3.0)));
    let l = BoundedLight::new(base, volume);
    assert_eq!(l.color_at(point3(1.0, 1.0, 1.0)), Color::WHITE);
    assert!(l.color_at(point3(4.0, 0.0, 0.0)).is_black());
    assert!(!l.casts_shadows());
    assert!(l.with_shadows(true).casts_shadows());
}

#[test]
fn directed_light_is_dark_behind() {
    let base = Arc::new(PointLight::colored(point3(10.0, -1.0, 10.0), Color::new(0.0, 0.7, 0.0)));
    let l = DirectedLight::new(base, vec3(0.0, -1.0, 1.0));
    assert_eq!(l.color_at(point3(10.0, -5.0, 20.0)), Color::new(0.0, 0.7, 0.0));
    assert!(l.color_at(point3(10.0, 5.0, 0.0)).is_black());
}

#[test]
fn decorators_stack() {
    let base: Arc<dyn Light> = Arc::new(PointLight::new(Point3::ORIGIN));
    let directed: Arc<dyn Light> = Arc::new(DirectedLight::new(base, vec3(1.0, 0.0, 0.0)));
    let l = AttenuatedLight::new(directed, 1.0, 1.0);
    assert!(close(l.color_at(point3(1.0, 0.0, 0.0)), Color::gray(0.5)));
    assert!(l.color_at(point3(-1.0, 0.0, 0.0)).is_black());
    assert_eq!(l.position(), Point3::ORIGIN);
}
