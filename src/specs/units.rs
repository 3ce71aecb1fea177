//! Byte-to-gibibyte arithmetic shared by the storage and memory reporters.

/// One binary gigabyte (2^30 bytes). All storage/memory conversions here
/// use binary units, matching what marketing tiers are quoted against.
pub const GIB: u64 = 1 << 30;

/// Convert a raw byte count to fractional gibibytes.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// Round to the nearest whole number, halves up. Non-positive input
/// yields 0.
pub fn round_half_up(value: f64) -> u64 {
    if value <= 0.0 {
        return 0;
    }
    value.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gib_conversion_is_exact_for_whole_gib() {
        assert_eq!(bytes_to_gib(GIB), 1.0);
        assert_eq!(bytes_to_gib(64 * GIB), 64.0);
    }

    #[test]
    fn rounding_halves_go_up() {
        assert_eq!(round_half_up(3.5), 4);
        assert_eq!(round_half_up(3.49), 3);
        assert_eq!(round_half_up(0.0), 0);
    }
}
