//! Storage tier classification.
//!
//! Raw filesystem block counts always read below the nominal chip capacity
//! (filesystem overhead, reserved partitions), so the reported value is the
//! marketing tier at or above the measured usable capacity rather than the
//! raw number.

use serde::{Deserialize, Serialize};

use super::units::bytes_to_gib;

/// Marketing capacity tier for internal storage.
///
/// Exactly one tier matches any byte count; the ranges are contiguous and
/// closed on their upper end, so a device measuring 58 GiB usable lands in
/// the 64 GB tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    Gb16,
    Gb32,
    Gb64,
    Gb128,
    Gb256,
    Gb512,
    Gb512Plus,
    Unknown,
}

impl StorageTier {
    /// Classify a total capacity in bytes into its marketing tier.
    ///
    /// Non-positive input (empty or unreadable partition) maps to
    /// [`StorageTier::Unknown`]; there is no error path.
    pub fn classify(total_bytes: i64) -> Self {
        if total_bytes <= 0 {
            return StorageTier::Unknown;
        }
        let rounded = bytes_to_gib(total_bytes as u64).round() as i64;

        match rounded {
            v if v > 512 => StorageTier::Gb512Plus,
            v if v > 256 => StorageTier::Gb512,
            v if v > 128 => StorageTier::Gb256,
            v if v > 64 => StorageTier::Gb128,
            v if v > 32 => StorageTier::Gb64,
            v if v > 16 => StorageTier::Gb32,
            v if v > 0 => StorageTier::Gb16,
            _ => StorageTier::Unknown,
        }
    }

    /// Tier label as shown in the settings surface.
    pub fn label(&self) -> &'static str {
        match self {
            StorageTier::Gb16 => "16",
            StorageTier::Gb32 => "32",
            StorageTier::Gb64 => "64",
            StorageTier::Gb128 => "128",
            StorageTier::Gb256 => "256",
            StorageTier::Gb512 => "512",
            StorageTier::Gb512Plus => "512+",
            StorageTier::Unknown => "null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::units::GIB;

    const GIB_I: i64 = GIB as i64;

    #[test]
    fn zero_and_negative_are_unknown() {
        assert_eq!(StorageTier::classify(0), StorageTier::Unknown);
        assert_eq!(StorageTier::classify(-1), StorageTier::Unknown);
        assert_eq!(StorageTier::classify(i64::MIN), StorageTier::Unknown);
    }

    #[test]
    fn tier_boundaries_are_closed_on_the_upper_end() {
        assert_eq!(StorageTier::classify(16 * GIB_I), StorageTier::Gb16);
        assert_eq!(StorageTier::classify(17 * GIB_I), StorageTier::Gb32);
        assert_eq!(StorageTier::classify(32 * GIB_I), StorageTier::Gb32);
        assert_eq!(StorageTier::classify(64 * GIB_I), StorageTier::Gb64);
        assert_eq!(StorageTier::classify(512 * GIB_I), StorageTier::Gb512);
        assert_eq!(StorageTier::classify(513 * GIB_I), StorageTier::Gb512Plus);
    }

    #[test]
    fn usable_capacity_rounds_up_to_marketing_tier() {
        // 58 GiB usable on a "64 GB" device.
        assert_eq!(StorageTier::classify(58 * GIB_I), StorageTier::Gb64);
        // 119 GiB usable on a "128 GB" device.
        assert_eq!(StorageTier::classify(119 * GIB_I), StorageTier::Gb128);
    }

    #[test]
    fn classification_is_monotonic() {
        let samples: Vec<i64> = (0..=600).map(|g| g * GIB_I).collect();
        let rank = |t: StorageTier| match t {
            StorageTier::Unknown => 0,
            StorageTier::Gb16 => 1,
            StorageTier::Gb32 => 2,
            StorageTier::Gb64 => 3,
            StorageTier::Gb128 => 4,
            StorageTier::Gb256 => 5,
            StorageTier::Gb512 => 6,
            StorageTier::Gb512Plus => 7,
        };
        let mut last = 0;
        for bytes in samples {
            let r = rank(StorageTier::classify(bytes));
            assert!(r >= last, "tier regressed at {} bytes", bytes);
            last = r;
        }
    }

    #[test]
    fn every_label_is_one_of_the_eight() {
        let labels = ["16", "32", "64", "128", "256", "512", "512+", "null"];
        for gib in [0, 1, 16, 31, 100, 255, 500, 2048] {
            assert!(labels.contains(&StorageTier::classify(gib * GIB_I).label()));
        }
    }
}
