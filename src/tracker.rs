//! Orientation tracking from angular velocity and linear acceleration

use core::time::Duration;

use nalgebra::{UnitQuaternion, Vector3};

use crate::math::rotation_between_vectors;
use crate::types::TrackerSettings;

/// Orientation estimator driven by IMU angular velocities and linear
/// accelerations.
///
/// All quantities are expressed relative to the body frame at construction
/// time, which is held as the fixed reference frame thereafter. Averaged
/// linear acceleration (assuming slow movement) is a direct measurement of
/// gravity, so roll and pitch do not drift. Yaw is unobservable from
/// acceleration and drifts with gyroscope integration error.
///
/// Timestamps are [`Duration`]s from an arbitrary caller-defined epoch and
/// must be non-decreasing across calls to [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct OrientationTracker {
    /// Decay time constant for the gravity low-pass filter, in seconds
    gravity_time_constant: f64,
    /// Timestamp of the last state update
    time: Duration,
    /// Timestamp of the most recent linear acceleration observation
    last_acceleration_time: Option<Duration>,
    /// Estimated rotation from the body frame to the fixed reference frame
    orientation: UnitQuaternion<f64>,
    /// Estimated gravity direction, expressed in the current body frame
    gravity_vector: Vector3<f64>,
    /// Most recently observed angular velocity (body frame, rad/s)
    angular_velocity: Vector3<f64>,
}

impl OrientationTracker {
    /// Create a new tracker with default settings, starting at `time`.
    ///
    /// The fixed reference frame is the body frame at `time`: the initial
    /// orientation is the identity and the initial gravity estimate points
    /// along the frame's up axis (the body is assumed to start upright).
    pub fn new(time: Duration) -> Self {
        Self::with_settings(TrackerSettings::default(), time)
    }

    /// Create a new tracker with the specified settings, starting at `time`.
    ///
    /// `settings.gravity_time_constant` must be positive; this is a caller
    /// contract and is not re-validated here.
    pub fn with_settings(settings: TrackerSettings, time: Duration) -> Self {
        Self {
            gravity_time_constant: settings.gravity_time_constant,
            time,
            last_acceleration_time: None,
            orientation: UnitQuaternion::identity(),
            gravity_vector: Vector3::z(),
            angular_velocity: Vector3::zeros(),
        }
    }

    /// Advance the estimator to `time`, integrating the held angular
    /// velocity into the orientation.
    ///
    /// The incremental rotation is the exponential map of
    /// `angular_velocity * delta_t`: exact for constant angular velocity
    /// over the interval, a first-order approximation otherwise. Advancing
    /// to the current time is a no-op.
    ///
    /// # Panics
    /// Panics if `time` is earlier than the tracker's current time.
    pub fn advance(&mut self, time: Duration) {
        assert!(
            time >= self.time,
            "advance() called with time {:?} earlier than tracker time {:?}",
            time,
            self.time
        );
        let delta_t = (time - self.time).as_secs_f64();
        let rotation = UnitQuaternion::from_scaled_axis(self.angular_velocity * delta_t);

        // Angular velocity is in the body frame, so the increment applies on
        // the right. Renormalize to counter floating-point drift.
        self.orientation =
            UnitQuaternion::from_quaternion((self.orientation * rotation).into_inner());

        // The gravity estimate is stored in body-frame coordinates: as the
        // body rotates, re-express it in the new body frame.
        self.gravity_vector = rotation.inverse() * self.gravity_vector;

        self.time = time;
    }

    /// Record an angular velocity observation (body frame, rad/s).
    ///
    /// The value is held constant and integrated by subsequent
    /// [`advance`](Self::advance) calls until replaced (zero-order hold);
    /// the observation itself changes no other state.
    pub fn add_angular_velocity_observation(&mut self, angular_velocity: Vector3<f64>) {
        self.angular_velocity = angular_velocity;
    }

    /// Fuse a raw linear acceleration observation (body frame) into the
    /// gravity estimate and correct roll/pitch drift accordingly.
    ///
    /// The gravity direction is updated with a first-order low-pass filter
    /// discretized exactly for the elapsed time since the previous
    /// observation. The very first observation is adopted as-is. The
    /// orientation is then adjusted by the minimal rotation aligning the
    /// tracker's up direction with the blended gravity estimate; the
    /// rotation axis is orthogonal to both, so yaw is untouched.
    pub fn add_linear_acceleration_observation(&mut self, acceleration: Vector3<f64>) {
        // An infinite interval makes alpha exactly 1 for the first sample.
        let delta_t = match self.last_acceleration_time {
            Some(last) => (self.time - last).as_secs_f64(),
            None => f64::INFINITY,
        };
        self.last_acceleration_time = Some(self.time);

        let alpha = 1.0 - (-delta_t / self.gravity_time_constant).exp();
        self.gravity_vector = (1.0 - alpha) * self.gravity_vector + alpha * acceleration;

        // Rotate the orientation so that it agrees with the new gravity
        // estimate: afterwards, the estimate maps to the fixed frame's up.
        let correction = rotation_between_vectors(
            &self.gravity_vector,
            &(self.orientation.inverse() * Vector3::z()),
        );
        self.orientation =
            UnitQuaternion::from_quaternion((self.orientation * correction).into_inner());
    }

    /// The timestamp of the last state update.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// The current orientation estimate.
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.orientation
    }

    /// The current gravity direction estimate, in body-frame coordinates.
    pub fn gravity_vector(&self) -> Vector3<f64> {
        self.gravity_vector
    }

    /// The angular velocity currently held for integration.
    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }
}
