use super::*;

#[test]
fn empty_tracker_reports_zero() {
    let tracker = VelocityTracker1D::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn single_sample_reports_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 100.0);
    assert!(!tracker.is_empty());
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn steady_drag_reports_its_speed() {
    let mut tracker = VelocityTracker1D::new();
    // 50 px every 10 ms = 5000 px/s
    for step in 0..5 {
        tracker.add_data_point(step * 10, step as f32 * 50.0);
    }
    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 5_000.0).abs() < 500.0,
        "expected ~5000, got {velocity}"
    );
}

#[test]
fn upward_drag_is_negative() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 600.0);
    tracker.add_data_point(8, 560.0);
    tracker.add_data_point(16, 520.0);
    assert!(tracker.calculate_velocity() < 0.0);
}

#[test]
fn cap_is_applied_symmetrically() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
}

#[test]
fn invalid_cap_yields_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
}

#[test]
fn samples_outside_horizon_are_ignored() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, -10_000.0);
    tracker.add_data_point(150, 100.0);
    tracker.add_data_point(160, 200.0);
    tracker.add_data_point(170, 300.0);
    let velocity = tracker.calculate_velocity();
    assert!(velocity > 0.0, "stale sample leaked in: {velocity}");
}

#[test]
fn pause_before_release_reports_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn reset_forgets_samples() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.reset();
    assert!(tracker.is_empty());
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn ring_buffer_wraps() {
    let mut tracker = VelocityTracker1D::new();
    for step in 0..(HISTORY_SIZE as i64 * 3) {
        tracker.add_data_point(step * 4, step as f32 * 8.0);
    }
    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 2_000.0).abs() < 200.0,
        "expected ~2000, got {velocity}"
    );
}
