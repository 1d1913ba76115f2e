/// Fixed increment applied to the clock on every tick.
pub const TICK_STEP: f32 = 0.005;

/// Monotonic animation clock.
///
/// Advances by [`TICK_STEP`] per tick and is never reset; the accumulated
/// value feeds the two animated shader inputs as `cos(delta)` and
/// `sin(delta)`. Wraparound is left to f32 range, there is no explicit
/// modulo.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationClock {
    delta: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and return the new accumulated value.
    pub fn advance(&mut self) -> f32 {
        self.delta += TICK_STEP;
        self.delta
    }

    /// Accumulated time since construction.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Animated value for the `scale` uniform.
    pub fn scale(&self) -> f32 {
        self.delta.cos()
    }

    /// Animated value for the `frequency` uniform.
    pub fn frequency(&self) -> f32 {
        self.delta.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = AnimationClock::new();
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.scale(), 1.0);
        assert_eq!(clock.frequency(), 0.0);
    }

    #[test]
    fn accumulates_fixed_steps() {
        let mut clock = AnimationClock::new();
        for _ in 0..200 {
            clock.advance();
        }
        assert!((clock.delta() - 1.0).abs() < 1e-4);
        assert!((clock.scale() - 1.0_f32.cos()).abs() < 1e-4);
        assert!((clock.frequency() - 1.0_f32.sin()).abs() < 1e-4);
    }

    #[test]
    fn never_decreases() {
        let mut clock = AnimationClock::new();
        let mut last = clock.delta();
        for _ in 0..1000 {
            let now = clock.advance();
            assert!(now > last);
            last = now;
        }
    }
}
