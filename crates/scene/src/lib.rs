//! Scene model for the geosphere viewer.
//!
//! Holds everything the renderer reads: the viewport, the animation clock,
//! the shader uniform set, and the scene graph (one displaced sphere plus
//! six directional lights). No GPU types live here.
//!
//! # Invariants
//! - The scene graph is populated once by [`Scene::build`] and never grows
//!   or shrinks afterwards: exactly one mesh, exactly six lights.
//! - The uniform set is owned by the material; only the frame driver and
//!   the debug panel write to it.
//! - Viewport dimensions are never zero, so the aspect ratio is always a
//!   finite positive number.

mod clock;
mod scene;
mod uniforms;
mod viewport;

pub use clock::{AnimationClock, TICK_STEP};
pub use scene::{DirectionalLight, Scene, ShaderMaterial, SphereGeometry};
pub use uniforms::{
    Color, UniformError, UniformSet, UniformValue, COLOR1, COLOR2, FREQUENCY, NOISE_SCALE,
    RING_SCALE, SCALE, U_TIME,
};
pub use viewport::Viewport;
