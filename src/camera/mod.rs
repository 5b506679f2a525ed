//! Camera system: pose and rotations, per-tick motion primitives, and the
//! renderer/window collaborator traits.

/// Camera pose and rotations.
pub mod core;
/// Per-tick motion primitives.
pub mod motion;
/// Renderer and window host seams.
pub mod target;

pub use self::core::Camera;
pub use target::{NavigationHost, RenderTarget, Viewport};
