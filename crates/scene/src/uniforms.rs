use std::collections::BTreeMap;

/// Uniform names, matching the shader's declarations.
pub const U_TIME: &str = "uTime";
pub const SCALE: &str = "scale";
pub const FREQUENCY: &str = "frequency";
pub const NOISE_SCALE: &str = "noiseScale";
pub const RING_SCALE: &str = "ringScale";
pub const COLOR1: &str = "color1";
pub const COLOR2: &str = "color2";

#[derive(Debug, thiserror::Error)]
pub enum UniformError {
    #[error("unknown uniform: {0}")]
    UnknownUniform(String),
    #[error("uniform {0} is not a scalar")]
    NotAScalar(String),
    #[error("uniform {0} is not a color")]
    NotAColor(String),
}

/// Linear RGB color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// As a vec4 with alpha 1, the layout the GPU side expects.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// A single uniform slot: either a scalar or a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Scalar(f32),
    Color(Color),
}

impl UniformValue {
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Scalar(_) => None,
        }
    }
}

/// Named shader inputs.
///
/// The slot set is fixed at construction; writes address existing slots
/// only. Backed by a BTreeMap so iteration order is deterministic across
/// platforms.
#[derive(Debug, Clone)]
pub struct UniformSet {
    values: BTreeMap<&'static str, UniformValue>,
}

impl UniformSet {
    /// The uniform set the sphere material starts with.
    pub fn sphere_defaults() -> Self {
        let mut values = BTreeMap::new();
        values.insert(U_TIME, UniformValue::Scalar(0.0));
        values.insert(SCALE, UniformValue::Scalar(2.3));
        values.insert(FREQUENCY, UniformValue::Scalar(8.0));
        values.insert(NOISE_SCALE, UniformValue::Scalar(50.0));
        values.insert(RING_SCALE, UniformValue::Scalar(1.0));
        values.insert(COLOR1, UniformValue::Color(Color::WHITE));
        values.insert(COLOR2, UniformValue::Color(Color::BLACK));
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    /// Scalar value of a slot, or the given fallback if the slot is missing
    /// or holds a color.
    pub fn scalar_or(&self, name: &str, fallback: f32) -> f32 {
        self.get(name).and_then(|v| v.as_scalar()).unwrap_or(fallback)
    }

    pub fn color_or(&self, name: &str, fallback: Color) -> Color {
        self.get(name).and_then(|v| v.as_color()).unwrap_or(fallback)
    }

    pub fn set_scalar(&mut self, name: &str, value: f32) -> Result<(), UniformError> {
        match self.values.get_mut(name) {
            Some(UniformValue::Scalar(slot)) => {
                *slot = value;
                Ok(())
            }
            Some(UniformValue::Color(_)) => Err(UniformError::NotAScalar(name.to_string())),
            None => Err(UniformError::UnknownUniform(name.to_string())),
        }
    }

    pub fn set_color(&mut self, name: &str, value: Color) -> Result<(), UniformError> {
        match self.values.get_mut(name) {
            Some(UniformValue::Color(slot)) => {
                *slot = value;
                Ok(())
            }
            Some(UniformValue::Scalar(_)) => Err(UniformError::NotAColor(name.to_string())),
            None => Err(UniformError::UnknownUniform(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, UniformValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_defaults_populate_all_slots() {
        let u = UniformSet::sphere_defaults();
        assert_eq!(u.len(), 7);
        assert_eq!(u.scalar_or(SCALE, 0.0), 2.3);
        assert_eq!(u.scalar_or(FREQUENCY, 0.0), 8.0);
        assert_eq!(u.scalar_or(NOISE_SCALE, 0.0), 50.0);
        assert_eq!(u.scalar_or(RING_SCALE, 0.0), 1.0);
        assert_eq!(u.scalar_or(U_TIME, -1.0), 0.0);
        assert_eq!(u.color_or(COLOR1, Color::BLACK), Color::WHITE);
        assert_eq!(u.color_or(COLOR2, Color::WHITE), Color::BLACK);
    }

    #[test]
    fn scalar_write_reads_back_immediately() {
        let mut u = UniformSet::sphere_defaults();
        for v in [1.0_f32, 42.5, 100.0] {
            u.set_scalar(SCALE, v).unwrap();
            assert_eq!(u.scalar_or(SCALE, 0.0), v);
        }
    }

    #[test]
    fn unknown_uniform_is_rejected() {
        let mut u = UniformSet::sphere_defaults();
        assert!(matches!(
            u.set_scalar("uMissing", 1.0),
            Err(UniformError::UnknownUniform(_))
        ));
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let mut u = UniformSet::sphere_defaults();
        assert!(matches!(
            u.set_scalar(COLOR1, 1.0),
            Err(UniformError::NotAScalar(_))
        ));
        assert!(matches!(
            u.set_color(SCALE, Color::WHITE),
            Err(UniformError::NotAColor(_))
        ));
    }
}
