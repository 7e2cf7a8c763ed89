use math::assert_ge;

/// Shading coefficients of a surface. Coefficients are nominally in [0, 1] but are not clamped.
///
/// ```
/// let glass = material::Material::new(0.0, 0.3, 1.0)
///     .with_reflection(0.15)
///     .with_refraction(0.65, 1.33)
///     .with_absorbance(0.15);
/// assert_eq!(glass.max_ref(), 5);
/// assert_eq!(material::Material::new(0.0, 1.0, 0.0).max_ref(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    ambient: f32,
    diffuse: f32,
    specular: f32,
    /// Exponent of the specular highlight.
    shininess: i32,
    reflective: f32,
    refractive: f32,
    ior: f32,
    /// Beer-Lambert absorption coefficient, per unit of distance travelled inside.
    absorbance: f32,
    max_ref: u32,
}

impl Material {
    pub const DEFAULT_SHININESS: i32 = 20;
    pub const DEFAULT_MAX_REF: u32 = 5;

    pub fn new(ambient: f32, diffuse: f32, specular: f32) -> Material {
        Material {
            ambient,
            diffuse,
            specular,
            shininess: Self::DEFAULT_SHININESS,
            reflective: 0.0,
            refractive: 0.0,
            ior: 1.0,
            absorbance: 0.0,
            max_ref: Self::DEFAULT_MAX_REF,
        }
    }

    pub fn with_shininess(self, shininess: i32) -> Self {
        Self { shininess, ..self }
    }
    pub fn with_reflection(self, reflective: f32) -> Self {
        Self { reflective, ..self }
    }
    pub fn with_refraction(self, refractive: f32, ior: f32) -> Self {
        assert!(ior > 0.0, "index of refraction {} is not positive", ior);
        Self {
            refractive,
            ior,
            ..self
        }
    }
    pub fn with_absorbance(self, absorbance: f32) -> Self {
        assert_ge!(absorbance, 0.0);
        Self { absorbance, ..self }
    }
    /// Caps the number of reflection/refraction bounces taken from this surface.
    pub fn with_max_ref(self, max_ref: u32) -> Self {
        Self { max_ref, ..self }
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }
    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }
    pub fn specular(&self) -> f32 {
        self.specular
    }
    pub fn shininess(&self) -> i32 {
        self.shininess
    }
    pub fn reflective(&self) -> f32 {
        self.reflective
    }
    pub fn refractive(&self) -> f32 {
        self.refractive
    }
    pub fn ior(&self) -> f32 {
        self.ior
    }
    pub fn absorbance(&self) -> f32 {
        self.absorbance
    }

    /// The bounce budget granted by this surface: 0 if it neither reflects nor refracts.
    pub fn max_ref(&self) -> u32 {
        if self.reflective > 0.0 || self.refractive > 0.0 {
            self.max_ref
        } else {
            0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Material{{ambient = {}, diffuse = {}, specular = {}^{}, reflective = {}, refractive = {} (ior {}), absorbance = {}}}",
            self.ambient,
            self.diffuse,
            self.specular,
            self.shininess,
            self.reflective,
            self.refractive,
            self.ior,
            self.absorbance
        )
    }
}

impl Default for Material {
    /// Plain diffuse surface.
    fn default() -> Self {
        Material::new(0.0, 1.0, 0.0)
    }
}
