//! Platform collaborators consumed by the spec resolvers.
//!
//! Each trait wraps one black-box system source: the property store, the
//! data-partition filesystem statistics, the kernel memory total, the live
//! display state, and the power profile. The resolvers in [`crate::specs`]
//! depend only on these seams, so tests substitute in-memory fakes and the
//! adapters stay free to degrade however the platform forces them to.

mod display;
mod memory;
mod partition;
mod power;
mod properties;

pub use display::WindowManagerDisplay;
pub use memory::SysinfoMemory;
pub use partition::{PartitionStats, StatCommandStats};
pub use power::{ProfileError, SysfsPowerProfile};
pub use properties::SystemPropertyStore;

use anyhow::Result;

use crate::specs::display::DisplayGeometry;

/// Key-value system property store. Unset keys read as an empty string,
/// never as an error.
pub trait PropertyStore {
    fn get(&self, name: &str) -> String;
}

/// Filesystem statistics for the designated data partition.
pub trait FilesystemStats {
    fn stats(&self) -> Result<PartitionStats>;
}

/// Total physical memory as the OS reports it.
pub trait MemoryTotal {
    fn total_bytes(&self) -> u64;
}

/// Live display geometry for the active display.
pub trait DisplayState {
    fn geometry(&self) -> Result<DisplayGeometry>;
}

/// Per-component average power figures from the platform power profile.
///
/// The profile may be entirely absent; absence is an error value here and a
/// zero-valued capacity at the resolver, never a panic or a propagated
/// failure.
pub trait PowerProfileSource {
    fn average_power(&self, key: &str) -> Result<f64, ProfileError>;
}
