use std::fs::File;
use std::path::Path;

use math::hcm::Point3;
use radiometry::color::Color;
use shape::Entity;
use thiserror::Error;

use crate::Texture;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("cannot open texture {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode texture: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported texture format: {0}")]
    Unsupported(String),
}

/// A PNG picture wrapped around the hit entity's surface coordinates, repeating outside [0, 1).
pub struct ImageTexture {
    data: Vec<Color>,
    width: u32,
    height: u32,
}

impl ImageTexture {
    /// Decodes an 8-bit grayscale, RGB or RGBA PNG file.
    pub fn open(path: impl AsRef<Path>) -> Result<ImageTexture, TextureError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TextureError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let decoder = png::Decoder::new(file);
        let (info, mut reader) = decoder.read_info()?;
        if info.bit_depth != png::BitDepth::Eight {
            return Err(TextureError::Unsupported(format!(
                "{:?} bits per channel",
                info.bit_depth
            )));
        }
        let num_channels = match info.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::RGB => 3,
            png::ColorType::RGBA => 4,
            other => return Err(TextureError::Unsupported(format!("{:?}", other))),
        };

        // Allocate the output buffer. An APNG might contain multiple frames; the first one is used.
        let mut buf = vec![0; info.buffer_size()];
        reader.next_frame(&mut buf)?;

        let num_pixels = (info.width * info.height) as usize;
        let data: Vec<Color> = buf
            .chunks(num_channels)
            .take(num_pixels)
            .map(|px| match px {
                [gray] => Color::rgb(*gray, *gray, *gray),
                [r, g, b, ..] => Color::rgb(*r, *g, *b),
                _ => Color::black(),
            })
            .collect();
        if data.len() != num_pixels {
            return Err(TextureError::Unsupported(format!(
                "{} pixels decoded, {}x{} expected",
                data.len(),
                info.width,
                info.height
            )));
        }
        log::debug!(
            "loaded texture {} ({}x{}, {:?})",
            path.display(),
            info.width,
            info.height,
            info.color_type
        );
        Ok(ImageTexture {
            data,
            width: info.width,
            height: info.height,
        })
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Texture for ImageTexture {
    fn color_at(&self, p: Point3, entity: &Entity) -> Color {
        let (u, v) = entity.texture_uv(p);
        let wrap = |x: f32, n: u32| ((x.rem_euclid(1.0) * n as f32) as usize).min(n as usize - 1);
        let col = wrap(u, self.width);
        let row = wrap(v, self.height);
        self.data[row * self.width as usize + col]
    }
}
