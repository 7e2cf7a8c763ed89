use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use radiometry::color::Color;

use crate::error::RenderError;

/// A linear RGB frame buffer, stored row by row from the top-left corner.
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Image {
        Image {
            width,
            height,
            data: vec![Color::black(); (width * height) as usize],
        }
    }

    /// Wraps row-major pixel values.
    pub fn from_rows(width: u32, height: u32, data: Vec<Color>) -> Image {
        assert_eq!(data.len(), (width * height) as usize);
        Image {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize] = color;
    }
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.data[(y * self.width + x) as usize]
    }

    /// Writes the picture in a format chosen by the extension of `path`: ".exr" keeps the linear
    /// float values, anything else is encoded as an 8-bit PNG.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("exr") => self.write_exr(path),
            Some("png") => self.write_png(path),
            _ => Err(RenderError::OutputFormat(path.display().to_string())),
        }
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width, self.height);
        encoder.set_color(png::ColorType::RGB);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;

        let bytes: Vec<u8> = self.data.iter().flat_map(|c| c.to_u8()).collect();
        writer.write_image_data(&bytes)?;
        Ok(())
    }

    pub fn write_exr(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        exr::prelude::write_rgb_file(
            path,
            self.width as usize,
            self.height as usize,
            |x, y| {
                let c = self.pixel(x as u32, y as u32);
                (c.r, c.g, c.b)
            },
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn png_keeps_pixel_positions() {
        let mut image = Image::new(3, 2);
        image.set_pixel(2, 0, Color::RED);
        image.set_pixel(0, 1, Color::gray(2.0));
        image.set_pixel(1, 1, Color::new(-1.0, 0.5, 0.0));
        let path = std::env::temp_dir().join("whitted_image_test.png");
        image.write(&path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let (info, mut reader) = decoder.read_info().unwrap();
        assert_eq!((info.width, info.height), (3, 2));
        let mut buf = vec![0; info.buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        #[rustfmt::skip]
        let expected = [
            0, 0, 0,       0, 0, 0,     255, 0, 0,
            255, 255, 255, 0, 127, 0,   0, 0, 0,
        ];
        assert_eq!(buf, expected);
    }

    #[test]
    fn exr_is_written() {
        let mut image = Image::new(4, 4);
        image.set_pixel(1, 2, Color::new(3.5, 0.25, 0.0));
        let path = std::env::temp_dir().join("whitted_image_test.exr");
        image.write(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let image = Image::new(1, 1);
        let path = std::env::temp_dir().join("whitted_image_test.bmp");
        assert!(matches!(
            image.write(&path),
            Err(RenderError::OutputFormat(_))
        ));
    }
}
