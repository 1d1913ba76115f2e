use crate::uniforms::UniformSet;
use glam::Vec3;

/// Sphere geometry parameters consumed by the mesh generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
}

impl Default for SphereGeometry {
    fn default() -> Self {
        Self {
            radius: 10.0,
            sectors: 100,
            stacks: 100,
        }
    }
}

/// A white directional light placed at an axis extreme, shining at the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            intensity: 1.0,
        }
    }

    /// Direction the light travels: from its position toward the origin.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// The sphere's material: a double-sided shader material owning the
/// uniform set. Mutated only by the frame driver and the debug panel.
#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    uniforms: UniformSet,
}

impl ShaderMaterial {
    pub fn new() -> Self {
        Self {
            uniforms: UniformSet::sphere_defaults(),
        }
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn uniforms_mut(&mut self) -> &mut UniformSet {
        &mut self.uniforms
    }
}

impl Default for ShaderMaterial {
    fn default() -> Self {
        Self::new()
    }
}

/// The renderable world.
///
/// Built exactly once; structurally immutable afterwards. Holds one sphere
/// mesh with its material and six directional lights at the axis extremes.
#[derive(Debug, Clone)]
pub struct Scene {
    sphere: SphereGeometry,
    material: ShaderMaterial,
    lights: Vec<DirectionalLight>,
}

impl Scene {
    /// Construct the populated scene graph.
    pub fn build() -> Self {
        let lights = vec![
            DirectionalLight::new(Vec3::new(0.0, 0.0, 1000.0)),
            DirectionalLight::new(Vec3::new(0.0, 0.0, -1000.0)),
            DirectionalLight::new(Vec3::new(-1000.0, 0.0, 0.0)),
            DirectionalLight::new(Vec3::new(1000.0, 0.0, 0.0)),
            DirectionalLight::new(Vec3::new(0.0, -1000.0, 0.0)),
            DirectionalLight::new(Vec3::new(0.0, 1000.0, 0.0)),
        ];

        let scene = Self {
            sphere: SphereGeometry::default(),
            material: ShaderMaterial::new(),
            lights,
        };
        tracing::info!(
            meshes = scene.mesh_count(),
            lights = scene.light_count(),
            "scene built"
        );
        scene
    }

    pub fn sphere(&self) -> &SphereGeometry {
        &self.sphere
    }

    pub fn material(&self) -> &ShaderMaterial {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut ShaderMaterial {
        &mut self.material
    }

    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    pub fn mesh_count(&self) -> usize {
        1
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::SCALE;

    #[test]
    fn build_populates_one_mesh_and_six_lights() {
        let scene = Scene::build();
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.light_count(), 6);
    }

    #[test]
    fn lights_sit_at_axis_extremes() {
        let scene = Scene::build();
        for light in scene.lights() {
            assert_eq!(light.position.length(), 1000.0);
            assert_eq!(light.intensity, 1.0);
            // Direction points back at the origin.
            let dir = light.direction();
            assert!((dir + light.position.normalize()).length() < 1e-6);
        }
    }

    #[test]
    fn uniform_writes_do_not_touch_structure() {
        let mut scene = Scene::build();
        scene.material_mut().uniforms_mut().set_scalar(SCALE, 5.0).unwrap();
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.light_count(), 6);
    }
}
