use crate::traits::RayHit;

/// Injectable sink for noteworthy events during a tick.
/// All methods default to doing nothing.
pub trait Diagnostics {
    /// An occlusion ray hit the followed target itself
    fn self_hit(&mut self, _hit: &RayHit) {}

    /// A non-finite input was discarded
    fn rejected_input(&mut self, _field: &'static str, _value: f32) {}

    /// Occlusion pulled the camera in to `distance`
    fn occluded(&mut self, _distance: f32) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn self_hit(&mut self, hit: &RayHit) {
        log::debug!(
            "occlusion ray hit followed target {:?} ({}) at {:.3}",
            hit.entity,
            hit.tag.as_deref().unwrap_or("untagged"),
            hit.distance
        );
    }

    fn rejected_input(&mut self, field: &'static str, value: f32) {
        log::warn!("discarding non-finite {}: {}", field, value);
    }

    fn occluded(&mut self, distance: f32) {
        log::trace!("camera pulled in to {:.3}", distance);
    }
}

/// Records events in memory, for tests and tooling
#[derive(Debug, Default, Clone)]
pub struct RecordingDiagnostics {
    pub self_hits: Vec<RayHit>,
    pub rejected: Vec<(&'static str, f32)>,
    pub occlusions: Vec<f32>,
}

impl Diagnostics for RecordingDiagnostics {
    fn self_hit(&mut self, hit: &RayHit) {
        self.self_hits.push(hit.clone());
    }

    fn rejected_input(&mut self, field: &'static str, value: f32) {
        self.rejected.push((field, value));
    }

    fn occluded(&mut self, distance: f32) {
        self.occlusions.push(distance);
    }
}
