//! Battery capacity lookup.
//!
//! The power profile is not a stable public interface; on some platforms it
//! is simply absent. The lookup is therefore best-effort: any failure is
//! logged and the capacity degrades to 0 instead of reaching the caller as
//! an error.

use crate::providers::PowerProfileSource;

/// Power-profile key for the battery's design capacity.
pub const BATTERY_CAPACITY_KEY: &str = "battery.capacity";

/// Resolve the battery capacity figure from the power profile.
///
/// The profile reports a floating value; the integer portion is taken by
/// truncation toward zero, not rounding — a 4000.9 mAh profile entry reads
/// as 4000. Lookup failure at any stage yields 0.
pub fn battery_capacity(source: &dyn PowerProfileSource) -> u64 {
    match source.average_power(BATTERY_CAPACITY_KEY) {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc() as u64,
        Ok(_) => 0,
        Err(err) => {
            tracing::warn!(key = BATTERY_CAPACITY_KEY, %err, "power profile lookup failed");
            0
        }
    }
}
