use std::fs::File;
use std::io::BufWriter;

use math::hcm::{point3, Vec3};
use radiometry::color::Color;
use shape::{Entity, Plane};
use texture::{ImageTexture, Texture, TextureError};

/// Writes a 2x2 RGB picture: red, green on the top row; blue, white on the bottom one.
fn write_quad(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 2);
    encoder.set_color(png::ColorType::RGB);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer
        .write_image_data(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255])
        .unwrap();
    path
}

#[test]
fn image_texture_wraps_surface_coordinates() {
    let path = write_quad("whitted_texture_quad.png");
    let texture = ImageTexture::open(&path).unwrap();
    assert_eq!(texture.resolution(), (2, 2));

    // The floor's surface coordinates follow the x and z axes.
    let floor = Entity::Plane(Plane::new(Vec3::Y, 0.0));
    let mut seen = Vec::new();
    for (x, z) in [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
        let p = point3(x, 0.0, z);
        let c = texture.color_at(p, &floor);
        // The picture repeats every unit.
        assert_eq!(texture.color_at(point3(x + 1.0, 0.0, z - 2.0), &floor), c);
        seen.push(c);
    }
    for expected in [Color::RED, Color::GREEN, Color::LIGHT_BLUE, Color::WHITE] {
        assert!(seen.contains(&expected), "{} missing from {:?}", expected, seen);
    }
    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_reports_its_path() {
    match ImageTexture::open("/nonexistent/whitted/texture.png") {
        Err(TextureError::Open { path, .. }) => assert!(path.ends_with("texture.png")),
        Err(e) => panic!("unexpected error {}", e),
        Ok(_) => panic!("opened a missing file"),
    }
}
