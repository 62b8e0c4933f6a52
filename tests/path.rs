use folio_wasm::engine::path::{self, PathConfig};
use glam::Vec2;

#[test]
fn generation_is_deterministic() {
    let config = PathConfig::default();
    let first = path::generate(&config, 900.0, 5200.0);
    let second = path::generate(&config, 900.0, 5200.0);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn dot_count_and_spacing_follow_config() {
    let config = PathConfig::default();
    let dots = path::generate(&config, 800.0, 4000.0);

    // start = 480, end = 3900, span = 3420 → 97 dots at 35 px spacing.
    assert_eq!(dots.len(), 97);
    assert!((dots[0].pos.y - 480.0).abs() < 1e-2);
    for pair in dots.windows(2) {
        assert!((pair[1].pos.y - pair[0].pos.y - 35.0).abs() < 1e-2);
    }
}

#[test]
fn wave_stays_inside_amplitude() {
    let config = PathConfig::default();
    let dots = path::generate(&config, 800.0, 6000.0);
    for dot in &dots {
        assert!(dot.pos.x >= 50.0 - 120.0 - 1e-3);
        assert!(dot.pos.x <= 50.0 + 120.0 + 1e-3);
    }
    // The wave actually swings; it is not a straight line.
    let max_x = dots.iter().map(|d| d.pos.x).fold(f32::MIN, f32::max);
    let min_x = dots.iter().map(|d| d.pos.x).fold(f32::MAX, f32::min);
    assert!(max_x > 100.0);
    assert!(min_x < 0.0);
}

#[test]
fn short_pages_produce_no_dots() {
    let config = PathConfig::default();
    // end_y (500 − 100) is above start_y (480): negative span.
    assert!(path::generate(&config, 800.0, 500.0).is_empty());
    // Exactly zero span is also skipped.
    assert!(path::generate(&config, 800.0, 580.0).is_empty());
    assert_eq!(path::marker_index(0, 0), None);
}

#[test]
fn consumed_count_is_monotonic_and_complete() {
    let dot_count = 97;
    let mut prev = 0;
    for i in 0..=1000 {
        let fraction = i as f32 / 1000.0;
        let count = path::consumed_count(fraction, dot_count);
        assert!(count >= prev);
        prev = count;
    }
    assert_eq!(path::consumed_count(0.0, dot_count), 0);
    assert_eq!(path::consumed_count(1.0, dot_count), dot_count);
    // At full scroll the marker rests on the last dot.
    assert_eq!(path::marker_index(dot_count, dot_count), Some(dot_count - 1));
}

#[test]
fn consumed_count_clamps_out_of_range_fractions() {
    assert_eq!(path::consumed_count(-0.5, 40), 0);
    assert_eq!(path::consumed_count(1.5, 40), 40);
    assert_eq!(path::consumed_count(0.5, 0), 0);
}

#[test]
fn marker_rotation_leads_with_the_mouth() {
    // Straight down the page: segment angle 90°, glyph rotated 180°.
    let down = path::marker_rotation(Vec2::new(0.0, 0.0), Vec2::new(0.0, 35.0));
    assert!((down - 180.0).abs() < 1e-3);

    // Horizontal to the right: glyph rotated 90°.
    let right = path::marker_rotation(Vec2::new(0.0, 0.0), Vec2::new(35.0, 0.0));
    assert!((right - 90.0).abs() < 1e-3);
}
