/// Rounds a double to the nearest integer coordinate, half away from zero.
#[inline(always)]
pub fn round_to_i64(value: f64) -> i64 {
    if value < 0.0 {
        (value - 0.5) as i64
    } else {
        (value + 0.5) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_to_i64(2.5), 3);
        assert_eq!(round_to_i64(-2.5), -3);
        assert_eq!(round_to_i64(2.49), 2);
        assert_eq!(round_to_i64(-2.49), -2);
        assert_eq!(round_to_i64(-0.5), -1);
        assert_eq!(round_to_i64(0.5), 1);
    }
}
