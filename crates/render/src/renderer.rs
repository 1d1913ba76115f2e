use geosphere_scene::{Scene, FREQUENCY, SCALE, U_TIME};
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Width over height of the output surface.
    pub aspect: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 25.0, 0.1),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and a view configuration, then produces
/// output. It never mutates the scene — scene truth is owned by the caller.
pub trait SceneRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and view.
    fn render(&mut self, scene: &Scene, view: &RenderView) -> Self::Output;

    /// Number of draw calls issued so far.
    fn draw_count(&self) -> u64;
}

/// Debug text renderer — the headless stand-in for the wgpu backend.
///
/// Produces a human-readable string representation of the scene state and
/// counts every draw it issues. Useful for logging and for testing the
/// frame driver without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    draws: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneRenderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene, view: &RenderView) -> String {
        self.draws += 1;
        let uniforms = scene.material().uniforms();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (draw #{}) ===\n",
            self.draws
        ));
        out.push_str(&format!(
            "Meshes: {}  Lights: {}\n",
            scene.mesh_count(),
            scene.light_count()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.3}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees,
            view.aspect
        ));
        out.push_str(&format!(
            "Uniforms: uTime={:.4} scale={:.4} frequency={:.4}\n",
            uniforms.scalar_or(U_TIME, 0.0),
            uniforms.scalar_or(SCALE, 0.0),
            uniforms.scalar_or(FREQUENCY, 0.0)
        ));
        out
    }

    fn draw_count(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_reports_scene_shape() {
        let scene = Scene::build();
        let mut renderer = DebugTextRenderer::new();
        let view = RenderView::default();
        let output = renderer.render(&scene, &view);

        assert!(output.contains("Meshes: 1"));
        assert!(output.contains("Lights: 6"));
        assert_eq!(renderer.draw_count(), 1);
    }

    #[test]
    fn every_render_counts_one_draw() {
        let scene = Scene::build();
        let mut renderer = DebugTextRenderer::new();
        let view = RenderView::default();
        for _ in 0..5 {
            renderer.render(&scene, &view);
        }
        assert_eq!(renderer.draw_count(), 5);
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 75.0);
        assert_eq!(view.target, Vec3::ZERO);
        assert!(view.eye.y > 0.0);
    }
}
