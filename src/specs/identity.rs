//! Device and processor model resolution.
//!
//! Model strings come from the system property store. Properties read as an
//! empty string when unset, so each resolver walks its fallback chain and
//! settles on "unknown" rather than ever handing the caller an empty value.

use crate::providers::PropertyStore;

/// Property holding the device's marketing model name.
pub const DEVICE_MODEL_PROP: &str = "ro.product.system.model";

/// Property holding the SoC model; preferred when populated.
pub const CPU_MODEL_PROP: &str = "ro.soc.model";

/// Board platform property, used when the SoC property is unset.
pub const CPU_FALLBACK_PROP: &str = "ro.board.platform";

/// Sentinel returned when no source yields a usable string.
pub const UNKNOWN: &str = "unknown";

/// Resolve the device model string, or "unknown".
pub fn resolve_device(store: &dyn PropertyStore) -> String {
    let model = store.get(DEVICE_MODEL_PROP);
    if model.is_empty() {
        UNKNOWN.to_string()
    } else {
        model
    }
}

/// Resolve the processor model string.
///
/// The SoC property wins over the board platform even when both are set;
/// "unknown" only when both are empty.
pub fn resolve_processor(store: &dyn PropertyStore) -> String {
    let soc = store.get(CPU_MODEL_PROP);
    if !soc.is_empty() {
        return soc;
    }
    let platform = store.get(CPU_FALLBACK_PROP);
    if !platform.is_empty() {
        return platform;
    }
    UNKNOWN.to_string()
}
