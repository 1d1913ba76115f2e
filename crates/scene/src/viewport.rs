/// Output surface dimensions in physical pixels.
///
/// Zero dimensions are clamped to 1 so the derived aspect ratio can never be
/// infinite or NaN, regardless of what the window system reports during a
/// minimize or an in-flight resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height. Always finite and positive.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_matches_dimensions() {
        let vp = Viewport::new(1920, 1080);
        assert!((vp.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn zero_dimensions_are_clamped() {
        let vp = Viewport::new(0, 0);
        assert_eq!(vp.width(), 1);
        assert_eq!(vp.height(), 1);
        assert!(vp.aspect().is_finite());
    }

    #[test]
    fn equal_inputs_are_equal() {
        assert_eq!(Viewport::new(800, 600), Viewport::new(800, 600));
    }
}
