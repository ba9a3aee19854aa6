//! Configuration types for the orientation tracker

/// Orientation tracker settings
///
/// # Example
/// ```
/// use core::time::Duration;
/// use orientation_tracker::{OrientationTracker, TrackerSettings};
///
/// let settings = TrackerSettings {
///     gravity_time_constant: 5.0, // faster gravity tracking
/// };
/// let tracker = OrientationTracker::with_settings(settings, Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    /// Time constant in seconds for the gravity-direction low-pass filter
    /// (typically 10.0). Must be positive.
    ///
    /// Higher values make the gravity estimate more stable but slower to
    /// track sensor bias and orientation drift. Lower values respond faster
    /// but let more transient (true) acceleration leak into the estimate.
    pub gravity_time_constant: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            gravity_time_constant: 10.0,
        }
    }
}
