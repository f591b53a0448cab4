use tugrope::{to_pixel, to_value, ConfigError, LinearMapper};

#[test]
fn applied_force_slider_midpoint_is_zero() {
    assert_eq!(to_value(150.0f32, 300.0, -500.0, 500.0), 0.0);
}

#[test]
fn drag_past_left_end_clamps_to_min() {
    assert_eq!(to_value(-50.0f32, 300.0, -500.0, 500.0), -500.0);
}

#[test]
fn drag_past_right_end_clamps_to_max() {
    assert_eq!(to_value(1000.0f32, 300.0, -500.0, 500.0), 500.0);
}

#[test]
fn output_always_within_range() {
    let mapper = LinearMapper::new(300.0f64, -500.0, 500.0).unwrap();
    let mut pixel = -1000.0;
    while pixel <= 1300.0 {
        let v = mapper.to_value(pixel);
        assert!((-500.0..=500.0).contains(&v), "pixel {} gave {}", pixel, v);
        pixel += 7.3;
    }
}

#[test]
fn value_pixel_round_trip() {
    let mapper = LinearMapper::new(300.0f64, -500.0, 500.0).unwrap();
    for i in 0..=100 {
        let v = -500.0 + 10.0 * i as f64;
        let back = mapper.to_value(mapper.to_pixel(v));
        assert!((back - v).abs() < 1e-9, "{} came back as {}", v, back);
    }
}

#[test]
fn to_pixel_is_not_clamped() {
    assert_eq!(to_pixel(1000.0f32, 300.0, -500.0, 500.0), 450.0);
    assert_eq!(to_pixel(-500.0f32, 300.0, -500.0, 500.0), 0.0);
}

#[test]
fn degenerate_ranges_are_rejected() {
    assert_eq!(
        LinearMapper::new(300.0f32, 10.0, 10.0),
        Err(ConfigError::EmptyRange { min: 10.0, max: 10.0 })
    );
    assert_eq!(
        LinearMapper::new(300.0f32, 10.0, -10.0),
        Err(ConfigError::EmptyRange { min: 10.0, max: -10.0 })
    );
    assert_eq!(LinearMapper::new(-1.0f32, 0.0, 1.0), Err(ConfigError::InvalidTrackLength));
    assert_eq!(LinearMapper::new(f32::INFINITY, 0.0, 1.0), Err(ConfigError::InvalidTrackLength));
    assert_eq!(LinearMapper::new(1.0f32, 0.0, f32::INFINITY), Err(ConfigError::NonFiniteBound));
}
