//! Gravity-aided orientation estimation from raw IMU data
//!
//! This library maintains the orientation of a rigid body from a stream of
//! angular-velocity and linear-acceleration samples. Angular velocities are
//! integrated incrementally with explicit renormalization, so the estimate
//! stays numerically stable over arbitrarily long runs. Averaged linear
//! acceleration is, under slow motion, a direct measurement of gravity: a
//! first-order low-pass filter turns the noisy accelerometer signal into a
//! long-term gravity-direction estimate, which continuously corrects roll
//! and pitch drift. Yaw carries no gravity information and is left to
//! gyroscope integration alone.
//!
//! # Features
//!
//! - Incremental quaternion integration with zero-order hold on angular velocity
//! - Exponential time-decay filter for the gravity direction estimate
//! - Roll/pitch drift correction that is structurally yaw-free
//! - Timestamp-driven: the estimator advances to any queried time
//! - Plain owned value with no global state and no allocation per update
//!
//! # Quick Start
//!
//! ```rust
//! use core::time::Duration;
//! use nalgebra::Vector3;
//! use orientation_tracker::OrientationTracker;
//!
//! let mut tracker = OrientationTracker::new(Duration::ZERO);
//!
//! // Angular velocity in rad/s (body frame), held until the next advance
//! tracker.add_angular_velocity_observation(Vector3::new(0.0, 0.0, 0.1));
//! tracker.advance(Duration::from_millis(10));
//!
//! // Raw accelerometer reading in m/s^2 (body frame)
//! tracker.add_linear_acceleration_observation(Vector3::new(0.0, 0.0, 9.81));
//!
//! let orientation = tracker.orientation();
//! let (roll, pitch, yaw) = orientation.euler_angles();
//! ```

mod math;
mod tracker;
mod types;

// Re-export all public types and functions
pub use math::rotation_between_vectors;
pub use tracker::OrientationTracker;
pub use types::TrackerSettings;
