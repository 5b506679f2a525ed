//! Collaborator seams: the renderer that owns the camera, and the window
//! host that owns the pointer and the application lifetime.

use glam::{DAffine3, UVec2};

use super::core::Camera;

/// The renderer side: an active camera drawn into a viewport.
pub trait RenderTarget {
    /// The active camera.
    fn camera_mut(&mut self) -> &mut Camera;

    /// Viewport size in pixels.
    fn viewport_size(&self) -> UVec2;

    /// Refit near/far planes after the camera moved.
    fn reset_clipping_range(&mut self) {}

    /// Whether scene lights are attached to the camera.
    fn lights_follow_camera(&self) -> bool {
        false
    }

    /// Re-place camera-attached lights after the camera moved.
    fn update_lights_to_follow_camera(&mut self) {}

    /// Replace the user transform of the attached model.
    fn set_model_transform(&mut self, _transform: DAffine3) {}
}

/// The windowing side.
pub trait NavigationHost {
    /// Current render target, `None` while nothing is being drawn.
    fn render_target(&mut self) -> Option<&mut dyn RenderTarget>;

    /// Warp the pointer back to the viewport centre.
    fn recenter_pointer(&mut self) {}

    /// Ask the application to quit.
    fn request_exit(&mut self);
}

/// A self-contained [`RenderTarget`]: one camera, one viewport, and the
/// last model transform handed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// The camera being steered.
    pub camera: Camera,
    /// Viewport size in pixels.
    pub size: UVec2,
    /// Last transform set on the attached model.
    pub model_transform: Option<DAffine3>,
}

impl Viewport {
    /// Viewport of `size` looking through `camera`.
    #[must_use]
    pub fn new(camera: Camera, size: UVec2) -> Self {
        Self {
            camera,
            size,
            model_transform: None,
        }
    }
}

impl RenderTarget for Viewport {
    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn viewport_size(&self) -> UVec2 {
        self.size
    }

    fn set_model_transform(&mut self, transform: DAffine3) {
        self.model_transform = Some(transform);
    }
}
