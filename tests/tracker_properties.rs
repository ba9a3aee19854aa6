//! Behavioral tests for the orientation tracker
//!
//! These exercise the estimator the way a sensor-processing loop would:
//! long interleaved call sequences, filter blending across representative
//! time scales, and the roll/pitch-only nature of the gravity correction.

use core::time::Duration;
use std::f64::consts::FRAC_PI_2;

use nalgebra::{UnitQuaternion, Vector3};
use orientation_tracker::{OrientationTracker, TrackerSettings};
use rand::prelude::*;
use rand_pcg::Pcg64;

const EPSILON: f64 = 1e-9;

/// The orientation must keep unit norm through arbitrary interleavings of
/// advances and observations.
#[test]
fn test_orientation_stays_normalized() {
    let mut rng = Pcg64::seed_from_u64(42);
    let mut tracker = OrientationTracker::new(Duration::ZERO);
    let mut now = Duration::ZERO;

    for _ in 0..2000 {
        let angular_velocity = Vector3::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
        );
        tracker.add_angular_velocity_observation(angular_velocity);

        now += Duration::from_micros(rng.random_range(100..20_000));
        tracker.advance(now);

        if rng.random_bool(0.3) {
            let acceleration = Vector3::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                9.81 + rng.random_range(-2.0..2.0),
            );
            tracker.add_linear_acceleration_observation(acceleration);
        }

        let norm = tracker.orientation().into_inner().norm();
        assert!(
            (norm - 1.0).abs() < EPSILON,
            "orientation norm drifted to {} at t={:?}",
            norm,
            now
        );
    }
}

/// Two observations separated by `dt` must blend with weight
/// `alpha = 1 - exp(-dt / tau)`, across time scales from `dt << tau` to
/// `dt >> tau`.
#[test]
fn test_gravity_filter_matches_exponential_blend() {
    let a1 = Vector3::new(0.2, -0.1, 9.7);
    let a2 = Vector3::new(-0.3, 0.4, 9.9);

    for (tau, dt) in [
        (10.0, 0.005),
        (10.0, 0.1),
        (1.0, 1.0),
        (0.5, 10.0),
        (2.0, 400.0),
        (100.0, 0.001),
    ] {
        let settings = TrackerSettings {
            gravity_time_constant: tau,
        };
        let mut tracker = OrientationTracker::with_settings(settings, Duration::ZERO);

        tracker.add_linear_acceleration_observation(a1);
        tracker.advance(Duration::from_secs_f64(dt));
        tracker.add_linear_acceleration_observation(a2);

        let alpha = 1.0 - (-dt / tau).exp();
        let expected = (1.0 - alpha) * a1 + alpha * a2;
        assert!(
            (tracker.gravity_vector() - expected).norm() < EPSILON,
            "blend mismatch for tau={} dt={}",
            tau,
            dt
        );
    }
}

/// Gravity observations carry no heading information: correcting a pure
/// roll/pitch error must leave the yaw angle at its initial value.
#[test]
fn test_gravity_correction_preserves_yaw() {
    let mut tracker = OrientationTracker::with_settings(
        TrackerSettings {
            gravity_time_constant: 1.0,
        },
        Duration::ZERO,
    );

    // Build up a known heading by integrating a pure yaw rate for one second.
    tracker.add_angular_velocity_observation(Vector3::new(0.0, 0.0, 1.0));
    tracker.advance(Duration::from_secs(1));
    tracker.add_angular_velocity_observation(Vector3::zeros());

    let (_, _, initial_yaw) = tracker.orientation().euler_angles();
    assert!((initial_yaw - 1.0).abs() < 1e-6);

    // The body is actually pitched: gravity appears tilted in the body frame.
    let tilt = 0.3_f64;
    let gravity_in_body = Vector3::new(tilt.sin(), 0.0, tilt.cos()) * 9.81;

    let mut now = Duration::from_secs(1);
    for _ in 0..500 {
        now += Duration::from_millis(10);
        tracker.advance(now);
        tracker.add_linear_acceleration_observation(gravity_in_body);

        let (_, _, yaw) = tracker.orientation().euler_angles();
        assert!(
            (yaw - initial_yaw).abs() < 1e-6,
            "yaw moved from {} to {} under gravity-only corrections",
            initial_yaw,
            yaw
        );
    }

    // Roll/pitch converged: the observed gravity direction now maps onto the
    // fixed frame's up axis.
    let up = tracker.orientation() * gravity_in_body.normalize();
    assert!(up.z > 0.9999, "gravity not aligned with up: {:?}", up);
}

/// The gravity estimate is stored in body-frame coordinates and must be
/// re-expressed as the body rotates.
#[test]
fn test_gravity_reexpressed_into_rotated_body_frame() {
    let mut tracker = OrientationTracker::new(Duration::ZERO);

    // Roll the body a quarter turn about its x axis.
    tracker.add_angular_velocity_observation(Vector3::new(FRAC_PI_2, 0.0, 0.0));
    tracker.advance(Duration::from_secs(1));

    // The physical direction is unchanged; its body-frame coordinates moved
    // from +z to +y.
    assert!((tracker.gravity_vector() - Vector3::y()).norm() < EPSILON);

    // Mapping back through the orientation recovers the fixed-frame up.
    let fixed = tracker.orientation() * tracker.gravity_vector();
    assert!((fixed - Vector3::z()).norm() < EPSILON);
}

/// Driving the tracker with the true angular velocity and noisy gravity
/// readings keeps the estimate consistent: the gravity estimate mapped into
/// the fixed frame stays within a degree cone of vertical.
#[test]
fn test_correction_keeps_gravity_aligned_with_up() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut tracker = OrientationTracker::new(Duration::ZERO);
    let mut true_orientation = UnitQuaternion::identity();
    let mut now = Duration::ZERO;

    let angular_velocity = Vector3::new(0.2, 0.1, 0.3);
    let dt = 0.01;

    for _ in 0..1000 {
        true_orientation =
            true_orientation * UnitQuaternion::from_scaled_axis(angular_velocity * dt);

        tracker.add_angular_velocity_observation(angular_velocity);
        now += Duration::from_millis(10);
        tracker.advance(now);

        let acceleration = true_orientation.inverse() * (Vector3::z() * 9.81)
            + Vector3::new(
                rng.random_range(-0.1..0.1),
                rng.random_range(-0.1..0.1),
                rng.random_range(-0.1..0.1),
            );
        tracker.add_linear_acceleration_observation(acceleration);
    }

    let up = (tracker.orientation() * tracker.gravity_vector()).normalize();
    assert!(up.z > 0.99, "gravity estimate drifted off vertical: {:?}", up);

    // With a matching gyroscope stream the attitude itself stays close to
    // the simulated truth.
    let error = tracker.orientation().angle_to(&true_orientation);
    assert!(error < 0.05, "attitude error {} rad", error);
}

/// A stream of identical upright readings must never disturb an upright
/// tracker, regardless of pacing.
#[test]
fn test_upright_readings_leave_orientation_identity() {
    let mut tracker = OrientationTracker::new(Duration::ZERO);
    let mut now = Duration::ZERO;

    for step_millis in [1, 10, 100, 1000, 10_000] {
        now += Duration::from_millis(step_millis);
        tracker.advance(now);
        tracker.add_linear_acceleration_observation(Vector3::new(0.0, 0.0, 9.81));

        assert!(tracker.orientation().angle() < EPSILON);
        assert!((tracker.gravity_vector().normalize() - Vector3::z()).norm() < EPSILON);
    }
}
