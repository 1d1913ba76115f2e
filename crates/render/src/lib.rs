//! Renderer-agnostic interface for the geosphere viewer.
//!
//! # Invariants
//! - A renderer reads scene state; it never mutates it.
//! - The frame driver issues exactly one draw per tick, after writing the
//!   animated uniforms.
//!
//! Provides the [`SceneRenderer`] trait with a debug text renderer for
//! diagnostics and tests. The wgpu backend lives in its own crate; the
//! trait is stable, so backends can be swapped without changing consumers.

mod frame;
mod renderer;

pub use frame::FrameDriver;
pub use renderer::{DebugTextRenderer, RenderView, SceneRenderer};
