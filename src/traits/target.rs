use crate::core::pose::CameraPose;
use crate::types::TargetFrame;

/// Read access to the followed object
pub trait TargetSource {
    fn target(&self) -> TargetFrame;
}

impl TargetSource for TargetFrame {
    fn target(&self) -> TargetFrame {
        *self
    }
}

/// Receives the resolved camera transform each tick
pub trait TransformSink {
    fn apply(&mut self, pose: &CameraPose);
}

impl TransformSink for Option<CameraPose> {
    fn apply(&mut self, pose: &CameraPose) {
        *self = Some(*pose);
    }
}
