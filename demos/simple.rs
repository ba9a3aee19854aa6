use core::time::Duration;

use nalgebra::Vector3;
use orientation_tracker::OrientationTracker;

const SAMPLE_PERIOD: Duration = Duration::from_millis(10); // 10 ms sample period

fn main() {
    let mut tracker = OrientationTracker::new(Duration::ZERO);
    let mut now = Duration::ZERO;

    for _ in 0..10 {
        // this loop should repeat each time new IMU data is available
        let angular_velocity = Vector3::new(0.0, 0.0, 0.0); // replace this with actual gyroscope data in rad/s
        let acceleration = Vector3::new(0.0, 0.0, 9.81); // replace this with actual accelerometer data in m/s^2

        tracker.add_angular_velocity_observation(angular_velocity);
        now += SAMPLE_PERIOD;
        tracker.advance(now);
        tracker.add_linear_acceleration_observation(acceleration);

        let (roll, pitch, yaw) = tracker.orientation().euler_angles();

        println!(
            "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            roll.to_degrees(),
            pitch.to_degrees(),
            yaw.to_degrees()
        );
    }
}
