//! Coalesces bursts of events into one animation-frame callback.
//!
//! Scroll fires many times per frame. The gate lets the first event schedule a
//! `requestAnimationFrame` and drops the rest until that frame has run.

#[cfg(test)]
#[path = "frame_gate_test.rs"]
mod frame_gate_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled frame ran, or scheduling failed.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
