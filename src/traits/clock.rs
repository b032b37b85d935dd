/// Source of per-tick elapsed time
pub trait Clock {
    /// Seconds since the previous call
    fn delta_seconds(&mut self) -> f32;
}
