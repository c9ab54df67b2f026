use super::*;

#[test]
fn from_rgba8_divides_by_255() {
    let c = Color::from_rgba8(255, 0, 51, 102);
    assert_eq!(c.r, 1.0);
    assert_eq!(c.g, 0.0);
    assert!((c.b - 0.2).abs() < 1e-12);
    assert!((c.a - 0.4).abs() < 1e-12);
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
    let b = Color::WHITE;
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Color::rgba(0.5, 0.5, 0.5, 0.5));
}

#[test]
fn default_is_white() {
    assert_eq!(Color::default(), Color::WHITE);
}
