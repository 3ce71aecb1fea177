//! Total RAM rounding.
//!
//! The kernel reserves memory for itself, the modem, and graphics carveouts
//! before userspace ever sees it, so the OS-reported total always reads low
//! (a 4 GiB device typically reports ~3.7 GiB). A fixed offset is added
//! before rounding so the nominal size comes back out.

use super::units::{bytes_to_gib, round_half_up};

/// Empirical calibration added to the measured total before rounding.
///
/// This is a heuristic, not precise accounting: 0.3 GiB covers the reserved
/// memory observed on common 3-8 GiB configurations. Do not retune it
/// without fresh measurements across devices; the rounded value feeds
/// user-visible text.
pub const RAM_CALIBRATION_GIB: f64 = 0.3;

/// Round a measured total-memory byte count to nominal whole gigabytes.
pub fn round_memory(total_bytes: u64) -> u64 {
    round_half_up(bytes_to_gib(total_bytes) + RAM_CALIBRATION_GIB)
}
