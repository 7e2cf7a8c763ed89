use geometry::Camera;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use radiometry::color::Color;
use rayon::prelude::*;
use scene::Scene;

use crate::image::Image;

pub struct RenderOptions {
    pub max_depth: u32,
    pub use_multi_thread: bool,
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows, ETA {eta}"));
    bar
}

fn trace_row(scene: &Scene, camera: &Camera, row: u32, max_depth: u32) -> Vec<Color> {
    let (width, _) = camera.resolution();
    (0..width)
        .map(|col| {
            camera
                .shoot_ray(row, col)
                .map_or(Color::black(), |ray| scene.trace(ray, max_depth))
        })
        .collect()
}

/// Traces one ray through the center of every pixel of the camera's film.
pub fn render(scene: &Scene, camera: &Camera, options: &RenderOptions) -> Image {
    let (width, height) = camera.resolution();
    let start = std::time::Instant::now();

    let image = if options.use_multi_thread {
        log::info!(
            "rendering {}x{} on {} threads",
            width,
            height,
            rayon::current_num_threads()
        );
        let bar = progress_bar(height as u64);
        let rows: Vec<Vec<Color>> = (0..height)
            .into_par_iter()
            .map(|row| {
                let colors = trace_row(scene, camera, row, options.max_depth);
                bar.inc(1);
                colors
            })
            .collect();
        bar.finish_and_clear();
        Image::from_rows(width, height, rows.concat())
    } else {
        log::info!("rendering {}x{} on a single thread", width, height);
        let bar = progress_bar(height as u64);
        let mut image = Image::new(width, height);
        for (row, col) in iproduct!(0..height, 0..width) {
            if let Some(ray) = camera.shoot_ray(row, col) {
                image.set_pixel(col, row, scene.trace(ray, options.max_depth));
            }
            if col + 1 == width {
                bar.inc(1);
            }
        }
        bar.finish_and_clear();
        image
    };
    log::info!("rendered in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn threading_does_not_change_the_picture() {
        let preset = scene::preset::by_name("glass", (24, 18)).unwrap();
        let single = render(
            &preset.scene,
            &preset.camera,
            &RenderOptions {
                max_depth: 5,
                use_multi_thread: false,
            },
        );
        let multi = render(
            &preset.scene,
            &preset.camera,
            &RenderOptions {
                max_depth: 5,
                use_multi_thread: true,
            },
        );
        assert_eq!((multi.width(), multi.height()), (24, 18));
        for (x, y) in iproduct!(0..24, 0..18) {
            assert_eq!(single.pixel(x, y), multi.pixel(x, y), "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn empty_scene_renders_black() {
        let camera = Camera::new((4, 3), 60.0);
        let image = render(
            &Scene::new(1.0),
            &camera,
            &RenderOptions {
                max_depth: 5,
                use_multi_thread: true,
            },
        );
        for (x, y) in iproduct!(0..4, 0..3) {
            assert!(image.pixel(x, y).is_black());
        }
    }
}
