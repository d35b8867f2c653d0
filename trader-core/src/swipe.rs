//! Drag model behind the swipe-to-confirm control.
//!
//! The view layer feeds pointer offsets in and reads the handle position
//! back; all threshold logic lives here. A gesture fires at most once: after
//! a triggering release the model stays disarmed until `reset()`.

/// Track length the handle can travel, in pixels.
pub const TRACK_MAX_DRAG: f64 = 220.0;
/// Drag distance past which releasing fires the bound command.
pub const TRIGGER_THRESHOLD: f64 = 180.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeModel {
    position: f64,
    max_drag: f64,
    threshold: f64,
    armed: bool,
}

impl Default for SwipeModel {
    fn default() -> Self {
        Self::new(TRACK_MAX_DRAG, TRIGGER_THRESHOLD)
    }
}

impl SwipeModel {
    pub fn new(max_drag: f64, threshold: f64) -> Self {
        Self {
            position: 0.0,
            max_drag,
            threshold,
            armed: true,
        }
    }

    /// Current handle offset in pixels.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Fraction of the track covered, for the background fade.
    pub fn progress(&self) -> f64 {
        if self.max_drag > 0.0 {
            self.position / self.max_drag
        } else {
            0.0
        }
    }

    /// Move the handle; clamped to the track. Ignored while disarmed.
    pub fn drag_to(&mut self, offset: f64) {
        if self.armed {
            self.position = offset.clamp(0.0, self.max_drag);
        }
    }

    /// End the gesture. Returns `true` exactly once when the handle was
    /// past the threshold; below it the handle snaps back to zero.
    pub fn release(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        if self.position > self.threshold {
            self.armed = false;
            true
        } else {
            self.position = 0.0;
            false
        }
    }

    /// Snap back and re-arm. Called by the view's reset timer after a fixed
    /// delay, regardless of whether the triggered command succeeded.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.armed = true;
    }
}

/// Track label derived from the engine's running state.
pub fn swipe_label(running: bool) -> &'static str {
    if running {
        "Swipe to stop"
    } else {
        "Swipe to start"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drag_snaps_back_without_firing() {
        let mut model = SwipeModel::default();
        model.drag_to(100.0);
        assert!(!model.release());
        assert_eq!(model.position(), 0.0);
    }

    #[test]
    fn full_drag_fires_exactly_once() {
        let mut model = SwipeModel::default();
        model.drag_to(200.0);
        assert!(model.release());
        // Disarmed until reset: further drags and releases are inert.
        model.drag_to(210.0);
        assert_eq!(model.position(), 200.0);
        assert!(!model.release());
        model.reset();
        assert_eq!(model.position(), 0.0);
        model.drag_to(200.0);
        assert!(model.release());
    }

    #[test]
    fn drag_is_clamped_to_track() {
        let mut model = SwipeModel::default();
        model.drag_to(5000.0);
        assert_eq!(model.position(), TRACK_MAX_DRAG);
        model.drag_to(-50.0);
        assert_eq!(model.position(), 0.0);
    }

    #[test]
    fn exact_threshold_does_not_fire() {
        let mut model = SwipeModel::default();
        model.drag_to(TRIGGER_THRESHOLD);
        assert!(!model.release());
    }

    #[test]
    fn labels_follow_running_state() {
        assert_eq!(swipe_label(false), "Swipe to start");
        assert_eq!(swipe_label(true), "Swipe to stop");
    }

    #[test]
    fn progress_tracks_position() {
        let mut model = SwipeModel::default();
        model.drag_to(110.0);
        assert!((model.progress() - 0.5).abs() < 1e-9);
    }
}
