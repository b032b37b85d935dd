use crate::types::PointerDelta;

/// Source of pointer motion for the orbit
pub trait PointerSource {
    /// Motion accumulated since the last call. Consumes it.
    fn take_delta(&mut self) -> PointerDelta;
}
