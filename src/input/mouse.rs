use glam::{DVec2, IVec2, UVec2};

/// Pointer-capture look input.
///
/// The host warps the pointer back to the viewport centre after every
/// move, so each event's offset from the centre is one frame's worth of
/// motion. Offsets accumulate until the next tick consumes them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerCapture {
    delta: DVec2,
}

impl PointerCapture {
    /// Fold one pointer event at `position` inside a viewport of `size`.
    ///
    /// An event outside the viewport throws away everything gathered this
    /// frame.
    pub fn handle_move(&mut self, position: IVec2, size: UVec2) {
        let inside = position.x >= 0
            && position.y >= 0
            && (position.x as u32) < size.x
            && (position.y as u32) < size.y;
        if inside {
            self.delta += (position - Self::center(size)).as_dvec2();
        } else {
            self.delta = DVec2::ZERO;
        }
    }

    /// Pixels moved since the last reset.
    #[must_use]
    pub fn delta(&self) -> DVec2 {
        self.delta
    }

    /// Forget the accumulated motion.
    pub fn reset(&mut self) {
        self.delta = DVec2::ZERO;
    }

    /// Warp target for a viewport of `size`.
    #[must_use]
    pub fn center(size: UVec2) -> IVec2 {
        (size / 2).as_ivec2()
    }
}
