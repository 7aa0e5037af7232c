//! Degree-based angle helpers.

/// Reduce an angle in degrees to [0, 360).
///
/// Uses `a - 360·floor(a/360)` rather than `rem_euclid` so results match
/// the reference theory bit for bit. A tiny negative input can round up to
/// exactly 360; that case is folded back to 0.
pub fn fixangle(deg: f64) -> f64 {
    let r = deg - 360.0 * (deg / 360.0).floor();
    if r >= 360.0 { 0.0 } else { r }
}

/// Sine of an angle in degrees.
pub fn dsin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn dcos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixangle_basic() {
        assert_eq!(fixangle(0.0), 0.0);
        assert_eq!(fixangle(360.0), 0.0);
        assert_eq!(fixangle(370.0), 10.0);
        assert_eq!(fixangle(-90.0), 270.0);
        assert_eq!(fixangle(-720.0), 0.0);
    }

    #[test]
    fn fixangle_large_values() {
        let a = fixangle(13.176_396_6 * 20_000.0 + 64.975_464);
        assert!((0.0..360.0).contains(&a));
    }

    #[test]
    fn fixangle_tiny_negative_stays_in_range() {
        let a = fixangle(-1e-20);
        assert!((0.0..360.0).contains(&a), "got {a}");
    }

    #[test]
    fn degree_trig() {
        assert!((dsin(30.0) - 0.5).abs() < 1e-15);
        assert!((dcos(60.0) - 0.5).abs() < 1e-15);
        assert!(dsin(180.0).abs() < 1e-15);
    }
}
