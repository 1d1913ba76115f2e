use crate::renderer::{RenderView, SceneRenderer};
use geosphere_scene::{AnimationClock, Scene, FREQUENCY, SCALE};

/// Per-tick animation update.
///
/// Owns the animation clock. On every tick it advances the clock, pushes
/// the derived values into the material's uniforms, and issues one draw.
/// Control damping (step 3 of the tick) is the camera's job and runs after
/// the draw, in the caller.
///
/// Created by the host through [`FrameDriver::new`]; there is no global
/// instance.
#[derive(Debug, Default)]
pub struct FrameDriver {
    clock: AnimationClock,
    ticks: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and write the two animated uniforms. Every other
    /// uniform keeps its creation value.
    ///
    /// The uniform slots are fixed at scene construction, so these writes
    /// cannot fail; a missing slot would be a construction bug and is
    /// logged rather than propagated.
    pub fn advance(&mut self, scene: &mut Scene) {
        self.clock.advance();
        self.ticks += 1;
        let uniforms = scene.material_mut().uniforms_mut();
        for (name, value) in [
            (SCALE, self.clock.scale()),
            (FREQUENCY, self.clock.frequency()),
        ] {
            if let Err(e) = uniforms.set_scalar(name, value) {
                tracing::error!("animated uniform write failed: {e}");
            }
        }
    }

    /// One full tick: advance the animation, then draw.
    pub fn tick<R: SceneRenderer>(
        &mut self,
        scene: &mut Scene,
        view: &RenderView,
        renderer: &mut R,
    ) -> R::Output {
        self.advance(scene);
        renderer.render(scene, view)
    }

    /// Accumulated clock value.
    pub fn delta(&self) -> f32 {
        self.clock.delta()
    }

    /// Ticks driven so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DebugTextRenderer;
    use geosphere_scene::U_TIME;

    #[test]
    fn uniforms_track_the_clock() {
        let mut scene = Scene::build();
        let mut driver = FrameDriver::new();

        for n in 1..=10u32 {
            driver.advance(&mut scene);
            let expected = 0.005 * n as f32;
            let uniforms = scene.material().uniforms();
            assert!((driver.delta() - expected).abs() < 1e-5);
            assert!((uniforms.scalar_or(SCALE, -2.0) - expected.cos()).abs() < 1e-5);
            assert!((uniforms.scalar_or(FREQUENCY, -2.0) - expected.sin()).abs() < 1e-5);
        }
    }

    #[test]
    fn only_scale_and_frequency_are_animated() {
        let mut scene = Scene::build();
        let mut driver = FrameDriver::new();
        let before: Vec<_> = scene
            .material()
            .uniforms()
            .iter()
            .filter(|(name, _)| *name != SCALE && *name != FREQUENCY)
            .collect();

        for _ in 0..50 {
            driver.advance(&mut scene);
        }

        let after: Vec<_> = scene
            .material()
            .uniforms()
            .iter()
            .filter(|(name, _)| *name != SCALE && *name != FREQUENCY)
            .collect();
        // uTime, noiseScale, ringScale, color1, color2 keep their
        // creation values.
        assert_eq!(before, after);
        assert_eq!(scene.material().uniforms().scalar_or(U_TIME, -1.0), 0.0);
    }

    #[test]
    fn slider_write_survives_until_next_tick() {
        let mut scene = Scene::build();
        let mut driver = FrameDriver::new();
        driver.advance(&mut scene);

        // Debug panel writes back into the live uniform...
        scene
            .material_mut()
            .uniforms_mut()
            .set_scalar(SCALE, 42.0)
            .unwrap();
        assert_eq!(scene.material().uniforms().scalar_or(SCALE, 0.0), 42.0);

        // ...and the next tick overwrites it from the clock.
        driver.advance(&mut scene);
        let scale = scene.material().uniforms().scalar_or(SCALE, 0.0);
        assert!((scale - driver.delta().cos()).abs() < 1e-5);
    }

    #[test]
    fn two_hundred_ticks_end_to_end() {
        let mut scene = Scene::build();
        let mut driver = FrameDriver::new();
        let mut renderer = DebugTextRenderer::new();
        let view = RenderView {
            aspect: 800.0 / 600.0,
            ..RenderView::default()
        };

        for _ in 0..200 {
            driver.tick(&mut scene, &view, &mut renderer);
        }

        assert_eq!(driver.ticks(), 200);
        assert_eq!(renderer.draw_count(), 200);
        assert!((driver.delta() - 1.0).abs() < 1e-4);
        let uniforms = scene.material().uniforms();
        assert!((uniforms.scalar_or(SCALE, 0.0) - 0.5403).abs() < 1e-3);
        assert!((uniforms.scalar_or(FREQUENCY, 0.0) - 0.8415).abs() < 1e-3);
        // Scene structure untouched by ticking.
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.light_count(), 6);
    }
}
