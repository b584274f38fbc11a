use crate::clipper::config::ClipperConfig;
use crate::clipper::constants::LO_RANGE;

#[test]
fn test_bits_round_trip() {
    let config = ClipperConfig {
        reverse_solution: true,
        strictly_simple: false,
        preserve_collinear: true,
        lo_range: LO_RANGE,
    };

    assert_eq!(config.bits(), 0b101);
    assert_eq!(ClipperConfig::from_bits(0b101), config);
    assert_eq!(ClipperConfig::from_bits(0), ClipperConfig::default());
}

#[test]
fn test_lo_range_is_clamped() {
    assert_eq!(ClipperConfig::new().with_lo_range(-5).lo_range, 0);
    assert_eq!(ClipperConfig::new().with_lo_range(i64::MAX).lo_range, LO_RANGE);
    assert_eq!(ClipperConfig::new().with_lo_range(1000).lo_range, 1000);
}
