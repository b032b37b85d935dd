use crate::traits::PointerSource;
use crate::types::PointerDelta;

/// Collects pointer motion between ticks and hands it to the camera as one delta
#[derive(Debug, Clone, Default)]
pub struct PointerAccumulator {
    /// Last absolute cursor position, if the host reports positions
    position: Option<(f32, f32)>,
    /// Motion since the last take
    delta: (f32, f32),
}

impl PointerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record relative motion (raw device deltas)
    pub fn push_motion(&mut self, dx: f32, dy: f32) {
        self.delta.0 += dx;
        self.delta.1 += dy;
    }

    /// Record an absolute cursor position. The first position only seeds
    /// the tracker; later ones add their difference from the previous one.
    pub fn push_position(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.position {
            self.push_motion(x - old_x, y - old_y);
        }
        self.position = Some((x, y));
    }

    /// Forget the cursor position, e.g. when it leaves the window
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Motion accumulated so far without consuming it
    pub fn pending(&self) -> PointerDelta {
        PointerDelta::new(self.delta.0, self.delta.1)
    }
}

impl PointerSource for PointerAccumulator {
    fn take_delta(&mut self) -> PointerDelta {
        let delta = self.pending();
        self.delta = (0.0, 0.0);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accumulator_empty() {
        let pointer = PointerAccumulator::new();
        assert_eq!(pointer.position(), None);
        assert_eq!(pointer.pending(), PointerDelta::ZERO);
    }

    #[test]
    fn test_motion_sums_until_taken() {
        let mut pointer = PointerAccumulator::new();
        pointer.push_motion(1.0, 2.0);
        pointer.push_motion(0.5, -1.0);

        assert_eq!(pointer.take_delta(), PointerDelta::new(1.5, 1.0));
        assert_eq!(pointer.take_delta(), PointerDelta::ZERO);
    }

    #[test]
    fn test_positions_produce_deltas() {
        let mut pointer = PointerAccumulator::new();
        pointer.push_position(100.0, 200.0);
        assert_eq!(pointer.pending(), PointerDelta::ZERO, "first position only seeds");

        pointer.push_position(110.0, 195.0);
        assert_eq!(pointer.take_delta(), PointerDelta::new(10.0, -5.0));
        // Position should remain
        assert_eq!(pointer.position(), Some((110.0, 195.0)));
    }

    #[test]
    fn test_clear_position_avoids_jump() {
        let mut pointer = PointerAccumulator::new();
        pointer.push_position(0.0, 0.0);
        pointer.clear_position();
        pointer.push_position(500.0, 500.0);
        assert_eq!(pointer.take_delta(), PointerDelta::ZERO);
    }
}
