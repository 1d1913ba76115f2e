//! wgpu render backend for the geosphere viewer.
//!
//! Renders one procedurally displaced sphere lit by six directional lights.
//! Camera uses an orbit model with inertial damping, driven by mouse drag
//! and scroll.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - Exactly one draw is submitted per `render` call.
//! - The depth texture always matches the surface dimensions; `resize`
//!   recreates it and nothing else.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
