use std::ops::{Add, AddAssign, Mul};

/// RGB triple. Arithmetic is plain `f32` arithmetic; channels leave [0, 1] freely while a shade
/// is being accumulated, and `clamped()` saturates the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Clamps an f32 value to [0, 1], mutiplies it by 255 and casts it to u8.
/// Returns 0 if `f` is NaN.
fn saturate_cast_u8(f: f32) -> u8 {
    if f > 1.0 {
        255
    } else if f >= 0.0 {
        (f * 255.0) as u8
    } else {
        0
    }
}

fn saturate(f: f32) -> f32 {
    if f > 1.0 {
        1.0
    } else if f >= 0.0 {
        f
    } else {
        0.0
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const LIGHT_BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 0.5);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);

    pub fn black() -> Color {
        Self::BLACK
    }
    pub fn white() -> Color {
        Self::WHITE
    }
    pub fn gray(level: f32) -> Color {
        Color::new(level, level, level)
    }
    pub fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
    pub fn is_black(&self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }
    pub fn to_u8(&self) -> [u8; 3] {
        [
            saturate_cast_u8(self.r),
            saturate_cast_u8(self.g),
            saturate_cast_u8(self.b),
        ]
    }
    /// Saturates every channel into [0, 1]. NaN channels become 0.
    pub fn clamped(&self) -> Self {
        Color::new(saturate(self.r), saturate(self.g), saturate(self.b))
    }
    /// Largest per-channel absolute difference; handy for tolerance checks.
    pub fn max_diff(&self, other: &Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Self) -> Self {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Self {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Self::Output {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "rgb({:.precision$}, {:.precision$}, {:.precision$})",
            self.r,
            self.g,
            self.b,
            precision = precision
        )
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn clamped_saturates_each_channel() {
        let c = Color::new(1.7, -0.2, 0.4).clamped();
        assert_eq!(c, Color::new(1.0, 0.0, 0.4));
        assert_eq!(Color::new(f32::NAN, 0.5, 2.0).clamped(), Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn to_u8_maps_unit_range() {
        assert_eq!(Color::WHITE.to_u8(), [255, 255, 255]);
        assert_eq!(Color::new(-1.0, 0.5, 3.0).to_u8(), [0, 127, 255]);
    }

    #[test]
    fn channel_products() {
        let c = Color::new(0.5, 0.25, 1.0) * Color::new(0.5, 1.0, 0.0) * 2.0;
        assert_eq!(c, Color::new(0.5, 0.5, 0.0));
        let mut total = Color::RED + Color::GREEN;
        total += Color::LIGHT_BLUE;
        assert_eq!(total, Color::WHITE);
    }
}
