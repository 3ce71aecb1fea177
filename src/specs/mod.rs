//! Normalized device capability facts.
//!
//! Each leaf module is a pure read-and-normalize operation; [`DeviceSpecs`]
//! composes them over live platform providers. Probing never fails the
//! caller: a source that is missing or unreadable degrades to its sentinel
//! ("unknown", "null", 0) and is logged, matching what best-effort device
//! telemetry deserves.

pub mod battery;
pub mod display;
pub mod identity;
pub mod memory;
pub mod storage;
pub mod units;

use serde::{Deserialize, Serialize};

use crate::config::ProbeConfig;
use crate::providers::{
    DisplayState, FilesystemStats, MemoryTotal, PowerProfileSource, PropertyStore,
    StatCommandStats, SysfsPowerProfile, SysinfoMemory, SystemPropertyStore,
    WindowManagerDisplay,
};
use storage::StorageTier;

/// Snapshot of the device's normalized hardware facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpecs {
    /// Device marketing model, or "unknown".
    pub device_model: String,
    /// SoC/board model, or "unknown".
    pub processor_model: String,
    /// Marketing storage tier label ("16".."512", "512+", or "null").
    pub storage_gb: String,
    /// Nominal RAM in whole gigabytes.
    pub ram_gb: u64,
    /// "WxH, Rotation: {deg}, DPI: {dpi}", if the display state was readable.
    pub display: Option<String>,
    /// Battery design capacity in mAh; 0 when the power profile is absent.
    pub battery_capacity_mah: u64,
}

impl DeviceSpecs {
    /// Probe every fact from the live platform sources.
    pub fn probe_live(config: &ProbeConfig) -> Self {
        Self::probe(
            &SystemPropertyStore,
            &StatCommandStats::new(&config.data_partition),
            &SysinfoMemory,
            &WindowManagerDisplay,
            &SysfsPowerProfile::default(),
        )
    }

    /// Probe every fact from the given providers. Infallible: each fact is
    /// computed fresh and independently, and a failed source only degrades
    /// its own field.
    pub fn probe(
        properties: &dyn PropertyStore,
        filesystem: &dyn FilesystemStats,
        memory_total: &dyn MemoryTotal,
        display_state: &dyn DisplayState,
        power_profile: &dyn PowerProfileSource,
    ) -> Self {
        let storage_tier = match filesystem.stats() {
            Ok(stats) => {
                tracing::debug!(
                    block_size = stats.block_size,
                    total_blocks = stats.total_blocks,
                    "data partition stats"
                );
                StorageTier::classify(stats.total_bytes().min(i64::MAX as u64) as i64)
            }
            Err(err) => {
                tracing::warn!(%err, "could not read data partition stats");
                StorageTier::Unknown
            }
        };

        let display = match display_state.geometry() {
            Ok(geometry) => Some(display::describe(&geometry)),
            Err(err) => {
                tracing::warn!(%err, "could not read display state");
                None
            }
        };

        DeviceSpecs {
            device_model: identity::resolve_device(properties),
            processor_model: identity::resolve_processor(properties),
            storage_gb: storage_tier.label().to_string(),
            ram_gb: memory::round_memory(memory_total.total_bytes()),
            display,
            battery_capacity_mah: battery::battery_capacity(power_profile),
        }
    }

    /// Render the snapshot as a bordered panel for terminal output.
    pub fn display(&self) -> String {
        const WIDTH: usize = 52;
        let mut output = String::new();

        let line = |label: &str, content: &str| -> String {
            let body = format!(" {}{}", label, content);
            format!("║{:<WIDTH$}║\n", truncate(&body, WIDTH))
        };

        output.push_str(&format!("╔{}╗\n", "═".repeat(WIDTH)));
        output.push_str(&format!("║{:^WIDTH$}║\n", "DEVICE SPECS"));
        output.push_str(&format!("╠{}╣\n", "═".repeat(WIDTH)));
        output.push_str(&line("Device:    ", &self.device_model));
        output.push_str(&line("Processor: ", &self.processor_model));
        output.push_str(&line("Storage:   ", &format!("{} GB", self.storage_gb)));
        output.push_str(&line("RAM:       ", &format!("{} GB", self.ram_gb)));
        output.push_str(&line(
            "Display:   ",
            self.display.as_deref().unwrap_or("unavailable"),
        ));
        output.push_str(&line(
            "Battery:   ",
            &format!("{} mAh", self.battery_capacity_mah),
        ));
        output.push_str(&format!("╚{}╝", "═".repeat(WIDTH)));

        output
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
