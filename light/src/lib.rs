use math::assert_ge;
use math::hcm::{Point3, UnitVec3, Vec3};
use radiometry::color::Color;
use shape::Entity;
use std::sync::Arc;

/// A light located at a single point, whose color may vary with the lit point.
///
/// The decorators (`AttenuatedLight`, `BoundedLight`, `DirectedLight`) wrap any other light, so
/// they stack. Each one keeps its own shadow flag, which defaults to the wrapped light's.
pub trait Light: Send + Sync {
    /// Color that the light shines onto `p`, ignoring occlusion.
    fn color_at(&self, p: Point3) -> Color;
    fn position(&self) -> Point3;
    /// Whether objects between a lit point and the light block it.
    fn casts_shadows(&self) -> bool;
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    position: Point3,
    color: Color,
    shadows: bool,
}

impl PointLight {
    /// A white light casting shadows.
    pub fn new(position: Point3) -> Self {
        Self::colored(position, Color::WHITE)
    }
    pub fn colored(position: Point3, color: Color) -> Self {
        PointLight {
            position,
            color,
            shadows: true,
        }
    }
    pub fn with_shadows(self, shadows: bool) -> Self {
        Self { shadows, ..self }
    }
}

impl Light for PointLight {
    fn color_at(&self, _: Point3) -> Color {
        self.color
    }
    fn position(&self) -> Point3 {
        self.position
    }
    fn casts_shadows(&self) -> bool {
        self.shadows
    }
    fn summary(&self) -> String {
        format!("PointLight{{{}, color = {}}}", self.position, self.color)
    }
}

/// Scales the wrapped light by `strength / (1 + attenuation * d^2)`, where `d` is the distance
/// between the light and the lit point.
pub struct AttenuatedLight {
    base: Arc<dyn Light>,
    strength: f32,
    attenuation: f32,
    shadows: bool,
}

impl AttenuatedLight {
    pub fn new(base: Arc<dyn Light>, strength: f32, attenuation: f32) -> Self {
        assert_ge!(attenuation, 0.0);
        let shadows = base.casts_shadows();
        AttenuatedLight {
            base,
            strength,
            attenuation,
            shadows,
        }
    }
    pub fn with_shadows(self, shadows: bool) -> Self {
        Self { shadows, ..self }
    }
}

impl Light for AttenuatedLight {
    fn color_at(&self, p: Point3) -> Color {
        let d2 = p.squared_distance_to(self.base.position());
        self.base.color_at(p) * (self.strength / (1.0 + self.attenuation * d2))
    }
    fn position(&self) -> Point3 {
        self.base.position()
    }
    fn casts_shadows(&self) -> bool {
        self.shadows
    }
    fn summary(&self) -> String {
        format!(
            "Attenuated({}, strength = {}, k = {})",
            self.base.summary(),
            self.strength,
            self.attenuation
        )
    }
}

/// The wrapped light, restricted to the points inside `volume`.
pub struct BoundedLight {
    base: Arc<dyn Light>,
    volume: Arc<Entity>,
    shadows: bool,
}

impl BoundedLight {
    pub fn new(base: Arc<dyn Light>, volume: Arc<Entity>) -> Self {
        let shadows = base.casts_shadows();
        BoundedLight {
            base,
            volume,
            shadows,
        }
    }
    pub fn with_shadows(self, shadows: bool) -> Self {
        Self { shadows, ..self }
    }
}

impl Light for BoundedLight {
    fn color_at(&self, p: Point3) -> Color {
        if self.volume.inside(p) {
            self.base.color_at(p)
        } else {
            Color::black()
        }
    }
    fn position(&self) -> Point3 {
        self.base.position()
    }
    fn casts_shadows(&self) -> bool {
        self.shadows
    }
    fn summary(&self) -> String {
        format!(
            "Bounded({}, volume = {})",
            self.base.summary(),
            self.volume.summary()
        )
    }
}

/// The wrapped light, shining only into the half-space in front of it along `direction`.
pub struct DirectedLight {
    base: Arc<dyn Light>,
    direction: UnitVec3,
    shadows: bool,
}

impl DirectedLight {
    pub fn new(base: Arc<dyn Light>, direction: Vec3) -> Self {
        let shadows = base.casts_shadows();
        DirectedLight {
            base,
            direction: UnitVec3::new(direction),
            shadows,
        }
    }
    pub fn with_shadows(self, shadows: bool) -> Self {
        Self { shadows, ..self }
    }
}

impl Light for DirectedLight {
    fn color_at(&self, p: Point3) -> Color {
        if self.direction.dot(p - self.base.position()) < 0.0 {
            Color::black()
        } else {
            self.base.color_at(p)
        }
    }
    fn position(&self) -> Point3 {
        self.base.position()
    }
    fn casts_shadows(&self) -> bool {
        self.shadows
    }
    fn summary(&self) -> String {
        format!("Directed({}, towards {})", self.base.summary(), self.direction)
    }
}
