//! Simulated rocking-motion demonstration
//!
//! Drives the tracker with a synthetic IMU stream: a body that rocks in
//! roll and pitch while turning slowly in yaw, sampled at 100 Hz with
//! noisy gyroscope and accelerometer readings. The estimated Euler angles
//! and the attitude error against the simulated ground truth are written
//! to a CSV trace and rendered as a PNG plot.
//!
//! Run with: `cargo run --example simulation`

use core::time::Duration;
use std::error::Error;
use std::f64::consts::TAU;

use nalgebra::{UnitQuaternion, Vector3};
use orientation_tracker::{OrientationTracker, TrackerSettings};
use plotters::prelude::*;
use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::Serialize;

const SAMPLE_RATE: f64 = 100.0; // 100 Hz
const DURATION_SECONDS: f64 = 20.0;
const GRAVITY: f64 = 9.81; // m/s^2

#[derive(Debug, Serialize)]
struct TraceRecord {
    #[serde(rename = "Time (s)")]
    time: f64,
    #[serde(rename = "Roll (deg)")]
    roll: f64,
    #[serde(rename = "Pitch (deg)")]
    pitch: f64,
    #[serde(rename = "Yaw (deg)")]
    yaw: f64,
    #[serde(rename = "Attitude error (deg)")]
    attitude_error: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = Pcg64::seed_from_u64(42);
    let dt = 1.0 / SAMPLE_RATE;
    let steps = (DURATION_SECONDS * SAMPLE_RATE) as usize;

    let settings = TrackerSettings {
        gravity_time_constant: 2.0,
    };
    let mut tracker = OrientationTracker::with_settings(settings, Duration::ZERO);
    let mut true_orientation = UnitQuaternion::identity();
    let mut now = Duration::ZERO;
    let mut trace = Vec::with_capacity(steps);

    for i in 0..steps {
        let time = i as f64 * dt;

        // Rocking motion: slow sine sweeps in roll and pitch rate plus a
        // constant yaw rate.
        let angular_velocity = Vector3::new(
            0.6 * (0.4 * TAU * time).sin(),
            0.4 * (0.25 * TAU * time).cos(),
            0.1,
        );
        true_orientation = true_orientation * UnitQuaternion::from_scaled_axis(angular_velocity * dt);

        let gyroscope = angular_velocity
            + Vector3::new(
                rng.random_range(-0.01..0.01),
                rng.random_range(-0.01..0.01),
                rng.random_range(-0.01..0.01),
            );
        let accelerometer = true_orientation.inverse() * (Vector3::z() * GRAVITY)
            + Vector3::new(
                rng.random_range(-0.05..0.05),
                rng.random_range(-0.05..0.05),
                rng.random_range(-0.05..0.05),
            );

        tracker.add_angular_velocity_observation(gyroscope);
        now += Duration::from_secs_f64(dt);
        tracker.advance(now);
        tracker.add_linear_acceleration_observation(accelerometer);

        let (roll, pitch, yaw) = tracker.orientation().euler_angles();
        trace.push(TraceRecord {
            time,
            roll: roll.to_degrees(),
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            attitude_error: tracker.orientation().angle_to(&true_orientation).to_degrees(),
        });
    }

    write_csv(&trace)?;
    render_plot(&trace)?;

    let last = trace.last().expect("trace is non-empty");
    println!(
        "Processed {} samples; final attitude error {:.3} deg",
        trace.len(),
        last.attitude_error
    );
    println!("Wrote orientation_trace.csv and orientation_trace.png");

    Ok(())
}

fn write_csv(trace: &[TraceRecord]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path("orientation_trace.csv")?;
    for record in trace {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_plot(trace: &[TraceRecord]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("orientation_trace.png", (1024, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Estimated orientation", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..DURATION_SECONDS, -180.0..180.0)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Angle (deg)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            trace.iter().map(|r| (r.time, r.roll)),
            &RED,
        ))?
        .label("Roll")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            trace.iter().map(|r| (r.time, r.pitch)),
            &GREEN,
        ))?
        .label("Pitch")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
    chart
        .draw_series(LineSeries::new(
            trace.iter().map(|r| (r.time, r.yaw)),
            &BLUE,
        ))?
        .label("Yaw")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
