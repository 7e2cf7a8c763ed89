use geometry::camera::Camera;
use light::{AttenuatedLight, BoundedLight, DirectedLight, Light, PointLight};
use material::Material;
use math::hcm::{point3, vec3, Point3, Vec3};
use radiometry::color::Color;
use shape::{BoundingBox, Difference, Entity, Plane, Sphere};
use std::sync::Arc;
use texture::{Checker, Solid, Texture, UvChecker};

use crate::{Object, Scene};

const FOV_Y_DEGREES: f32 = 60.0;

/// A scene ready to render, and the camera to render it with.
pub struct Preset {
    pub scene: Scene,
    pub camera: Camera,
}

/// Names accepted by `by_name()`.
pub const NAMES: &[&str] = &[
    "sphere",
    "tetrahedron",
    "glass",
    "ufo",
    "glass_tetrahedron",
    "checker_floor",
    "shell",
    "glass_checker",
    "two_spheres",
    "carved",
];

pub fn by_name(name: &str, resolution: (u32, u32)) -> Option<Preset> {
    let preset = match name {
        "sphere" => sphere(resolution),
        "tetrahedron" => tetrahedron(resolution),
        "glass" => glass(resolution),
        "ufo" => ufo(resolution),
        "glass_tetrahedron" => glass_tetrahedron(resolution),
        "checker_floor" => checker_floor(resolution),
        "shell" => shell(resolution),
        "glass_checker" => glass_checker(resolution),
        "two_spheres" => two_spheres(resolution),
        "carved" => carved(resolution),
        _ => return None,
    };
    log::info!(
        "preset '{}': {} objects, {} lights",
        name,
        preset.scene.objects().len(),
        preset.scene.lights().len()
    );
    Some(preset)
}

// Helpers shared by the scenes.
// ------------------------------------------------------------------------------------------------

fn solid(c: Color) -> Arc<dyn Texture> {
    Arc::new(Solid::new(c))
}

fn ball(x: f32, y: f32, z: f32, r: f32) -> Arc<Entity> {
    Arc::new(Entity::Sphere(Sphere::new(point3(x, y, z), r)))
}

/// The ground: everything below `y = height`.
fn floor_at(height: f32) -> Arc<Entity> {
    Arc::new(Entity::Plane(Plane::new(Vec3::Y, -height)))
}

fn object(entity: Arc<Entity>, material: &Arc<Material>, texture: Arc<dyn Texture>) -> Object {
    Object::new(entity, material.clone(), texture)
}

/// The default view: from 20 units in front of the origin, 5 units up, looking along +z.
fn front_camera(resolution: (u32, u32)) -> Camera {
    Camera::new(resolution, FOV_Y_DEGREES).looking_along(point3(0.0, 5.0, -20.0), Vec3::Z)
}

/// Four balls of radius `side / 2` stacked as a tetrahedron on the floor.
fn tetrahedron_balls(side: f32) -> [Arc<Entity>; 4] {
    let higher = point3(0.0, side / 2.0, 0.0);
    let offsets = [
        vec3(0.0, 0.0, (1.0f32 / 3.0).sqrt()),
        vec3(0.5, 0.0, -(1.0f32 / 27.0).sqrt()),
        vec3(-0.5, 0.0, -(1.0f32 / 27.0).sqrt()),
        vec3(0.0, (2.0f32 / 3.0).sqrt(), 0.0),
    ];
    offsets.map(|v| {
        let c = higher + v * side;
        ball(c.x, c.y, c.z, side / 2.0)
    })
}

// Scenes.
// ------------------------------------------------------------------------------------------------

/// A red ball on a blue floor.
pub fn sphere(resolution: (u32, u32)) -> Preset {
    let floor = Arc::new(Material::new(1.0, 0.0, 0.0));
    let plastic = Arc::new(Material::new(1.0, 1.0, 0.0));

    let mut scene = Scene::new(0.3);
    scene.add_light(Arc::new(PointLight::new(point3(30.0, 30.0, -30.0))));
    scene.add_object(object(floor_at(0.0), &floor, solid(Color::BLUE)));
    scene.add_object(object(ball(0.0, 3.0, 0.0, 3.0), &plastic, solid(Color::RED)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// Four shiny balls stacked on a red floor, lit from the eye.
pub fn tetrahedron(resolution: (u32, u32)) -> Preset {
    let diffuse = Arc::new(Material::new(0.0, 1.0, 0.0));
    let shiny = Arc::new(Material::new(0.0, 1.0, 1.0).with_reflection(0.5));

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(
        PointLight::new(point3(0.0, 5.0, -20.0)).with_shadows(false),
    ));
    scene.add_object(object(floor_at(0.0), &diffuse, solid(Color::RED)));
    let [s1, s2, s3, s4] = tetrahedron_balls(10.0);
    for s in [s1, s2, s3] {
        scene.add_object(object(s, &shiny, solid(Color::GREEN)));
    }
    scene.add_object(object(s4, &shiny, solid(Color::YELLOW)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// A glass ball between two shiny green ones, with a large yellow ball behind.
pub fn glass(resolution: (u32, u32)) -> Preset {
    let diffuse = Arc::new(Material::new(0.0, 1.0, 0.0));
    let shiny = Arc::new(Material::new(0.0, 1.0, 1.0).with_reflection(0.5));
    let glass = Arc::new(
        Material::new(0.0, 0.0, 1.0)
            .with_reflection(0.1)
            .with_refraction(0.8, 1.33)
            .with_absorbance(0.8),
    );

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(
        PointLight::new(point3(0.0, 5.0, -20.0)).with_shadows(false),
    ));
    scene.add_object(object(floor_at(0.0), &diffuse, solid(Color::RED)));
    scene.add_object(object(ball(0.0, 5.0, 0.0, 5.0), &glass, solid(Color::WHITE)));
    scene.add_object(object(ball(-7.0, 5.0, 5.0, 5.0), &shiny, solid(Color::GREEN)));
    scene.add_object(object(ball(7.0, 5.0, 5.0, 5.0), &shiny, solid(Color::GREEN)));
    scene.add_object(object(ball(0.0, 0.0, 50.0, 40.0), &shiny, solid(Color::YELLOW)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// A dome: a ball with everything below `y = 6` cut off.
pub fn ufo(resolution: (u32, u32)) -> Preset {
    let diffuse = Arc::new(Material::new(0.0, 1.0, 0.0));
    let shiny = Arc::new(Material::new(0.2, 0.5, 1.0));

    let dome = Entity::Difference(Difference::new(ball(0.0, 5.5, -5.0, 5.0), floor_at(6.0)));

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(PointLight::new(point3(30.0, 30.0, -30.0))));
    scene.add_object(object(floor_at(0.0), &diffuse, solid(Color::LIGHT_BLUE)));
    scene.add_object(object(Arc::new(dome), &shiny, solid(Color::WHITE)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// Three glass balls and a white one stacked before a sky-colored backdrop.
pub fn glass_tetrahedron(resolution: (u32, u32)) -> Preset {
    let ambient = Arc::new(Material::new(0.8, 0.2, 0.0));
    let diffuse = Arc::new(Material::new(0.0, 0.8, 0.0));
    let glass = Arc::new(
        Material::new(0.0, 0.3, 1.0)
            .with_reflection(0.15)
            .with_refraction(0.65, 1.33)
            .with_absorbance(0.15),
    );
    let backdrop = Arc::new(Entity::Plane(Plane::new(-Vec3::Z, 100.0)));

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(PointLight::new(point3(0.0, 30.0, -30.0))));
    scene.add_object(object(backdrop, &ambient, solid(Color::new(0.2, 0.4, 0.7))));
    scene.add_object(object(floor_at(0.0), &diffuse, solid(Color::RED)));
    let [s1, s2, s3, s4] = tetrahedron_balls(10.0);
    scene.add_object(object(s1, &diffuse, solid(Color::WHITE)));
    scene.add_object(object(s2, &glass, solid(Color::RED)));
    scene.add_object(object(s3, &glass, solid(Color::GREEN)));
    scene.add_object(object(s4, &glass, solid(Color::YELLOW)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// A red ball on a reflective checkered floor.
pub fn checker_floor(resolution: (u32, u32)) -> Preset {
    let floor = Arc::new(Material::new(0.0, 1.0, 0.6).with_reflection(0.6));
    let plastic = Arc::new(Material::new(0.0, 1.0, 1.0));
    let checker = Arc::new(Checker::new(Color::BLACK, Color::BLUE, 5.0));

    let mut scene = Scene::new(0.3);
    scene.add_light(Arc::new(PointLight::new(point3(30.0, 30.0, -30.0))));
    scene.add_object(object(floor_at(0.0), &floor, checker));
    scene.add_object(object(ball(0.0, 3.0, 0.0, 3.0), &plastic, solid(Color::RED)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// A seashell made of 250 balls along a logarithmic spiral.
pub fn shell(resolution: (u32, u32)) -> Preset {
    const K: f32 = 8.0;
    const V: f32 = 0.10;
    const BETA: f32 = -2.0;
    const GAMMA: f32 = 0.9;
    const N: usize = 250;

    let plastic = Arc::new(Material::new(0.0, 1.0, 1.0));
    let coral = solid(Color::new(0.8, 0.4, 0.0));

    let mut scene = Scene::new(0.3);
    scene.add_light(Arc::new(PointLight::new(point3(30.0, 30.0, -30.0))));
    for i in 0..N {
        let theta = std::f32::consts::PI * 12.0 * (i as f32 + 1.5 - N as f32) / (N as f32 - 1.0);
        let rho = K * (V * theta).exp();
        let s = ball(
            rho * theta.sin(),
            rho * BETA,
            rho * theta.cos(),
            rho / GAMMA,
        );
        scene.add_object(object(s, &plastic, coral.clone()));
    }
    let camera = Camera::new(resolution, FOV_Y_DEGREES)
        .looking_along(point3(0.0, -7.0, -20.0), vec3(0.0, -0.1, 1.0));
    Preset { scene, camera }
}

/// A glass ball over a red and white checkerboard.
pub fn glass_checker(resolution: (u32, u32)) -> Preset {
    let floor = Arc::new(Material::new(0.0, 0.8, 0.0));
    let glass = Arc::new(
        Material::new(0.05, 0.2, 0.7)
            .with_reflection(0.2)
            .with_refraction(0.9, 1.33)
            .with_absorbance(0.8),
    );
    let checker = Arc::new(Checker::new(Color::RED, Color::WHITE, 3.0));

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(PointLight::new(point3(10.0, 10.0, -30.0))));
    scene.add_object(object(floor_at(0.0), &floor, checker));
    scene.add_object(object(ball(0.0, 5.0, -6.0, 5.0), &glass, solid(Color::WHITE)));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// A plastic ball and a glass ball; a green directed light fakes the glow the glass casts.
pub fn two_spheres(resolution: (u32, u32)) -> Preset {
    let diffuse = Arc::new(Material::new(0.2, 1.0, 0.3));
    let plastic = Arc::new(Material::new(0.2, 0.8, 1.0));
    let glass = Arc::new(
        Material::new(0.1, 0.3, 1.0)
            .with_reflection(0.15)
            .with_refraction(0.65, 1.33)
            .with_absorbance(0.15),
    );
    let checker = Arc::new(Checker::new(Color::BLACK, Color::BLUE, 5.0));

    let mut scene = Scene::new(0.0);
    scene.add_light(Arc::new(PointLight::new(point3(0.0, 200.0, -200.0))));
    scene.add_object(object(floor_at(-4.0), &diffuse, checker));
    scene.add_object(object(ball(-10.0, 4.0, 0.0, 4.0), &plastic, solid(Color::YELLOW)));
    scene.add_object(object(ball(10.0, 4.0, 0.0, 4.0), &glass, solid(Color::GREEN)));

    let glow: Arc<dyn Light> = Arc::new(PointLight::colored(
        point3(10.0, -1.0, 10.0),
        Color::new(0.0, 0.7, 0.0),
    ));
    scene.add_light(Arc::new(DirectedLight::new(glow, vec3(0.0, -1.0, 1.0))));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

/// CSG showcase: a lens cut from two balls, and a ring of balls behind a bounding ball, under a
/// fading lamp and a spotlight.
pub fn carved(resolution: (u32, u32)) -> Preset {
    let floor = Arc::new(Material::new(0.1, 0.9, 0.0).with_reflection(0.2));
    let plastic = Arc::new(Material::new(0.1, 0.8, 1.0).with_shininess(40));

    // Everything outside the second ball is taken away from the first: their intersection.
    let outside = Arc::new(Entity::ReverseSphere(Sphere::new(point3(-4.0, 4.0, -3.0), 4.5)));
    let lens = Entity::Difference(Difference::new(ball(-4.0, 4.0, 0.0, 4.0), outside));

    let ring_center = point3(6.0, 3.0, 2.0);
    let beads = (0..8).map(|i| {
        let angle = i as f32 * std::f32::consts::FRAC_PI_4;
        let c: Point3 = ring_center + vec3(angle.cos(), 0.0, angle.sin()) * 2.5;
        ball(c.x, c.y, c.z, 0.9)
    });
    let ring = Entity::BoundingBox(BoundingBox::new(
        Arc::new(Entity::union_all(beads).expect("the ring has beads")),
        ball(ring_center.x, ring_center.y, ring_center.z, 3.5),
    ));

    let mut scene = Scene::new(0.1);
    let lamp: Arc<dyn Light> = Arc::new(PointLight::new(point3(0.0, 25.0, -15.0)));
    scene.add_light(Arc::new(AttenuatedLight::new(lamp, 3.0, 0.002)));
    let spot: Arc<dyn Light> =
        Arc::new(PointLight::colored(point3(6.0, 12.0, 2.0), Color::new(1.0, 0.9, 0.6)));
    let cone = Arc::new(Entity::Sphere(Sphere::new(ring_center, 6.0)));
    scene.add_light(Arc::new(BoundedLight::new(spot, cone)));

    let tiles = Arc::new(Checker::new(Color::gray(0.2), Color::WHITE, 4.0));
    scene.add_object(object(floor_at(0.0), &floor, tiles));
    scene.add_object(object(Arc::new(lens), &plastic, solid(Color::RED)));
    let stripes = Arc::new(UvChecker::new(Color::YELLOW, Color::BLUE, 8.0));
    scene.add_object(object(Arc::new(ring), &plastic, stripes));
    Preset {
        scene,
        camera: front_camera(resolution),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_name_builds() {
        for name in NAMES {
            let preset = by_name(name, (32, 24)).unwrap();
            assert!(!preset.scene.objects().is_empty(), "{}", name);
            assert!(!preset.scene.lights().is_empty(), "{}", name);
            assert_eq!(preset.camera.resolution(), (32, 24));
        }
        assert!(by_name("nothing", (32, 24)).is_none());
    }

    #[test]
    fn camera_sees_the_floor() {
        let preset = sphere((16, 16));
        // The bottom row of pixels looks down at the floor.
        let r = preset.camera.shoot_ray(15, 8).unwrap();
        let c = preset.scene.trace(r, 5);
        assert!(!c.is_black(), "{}", c);
    }
}
