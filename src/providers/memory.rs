//! Total physical memory adapter.

use sysinfo::System;

use super::MemoryTotal;

/// Reads the OS-reported memory total through sysinfo.
#[derive(Debug, Default)]
pub struct SysinfoMemory;

impl MemoryTotal for SysinfoMemory {
    fn total_bytes(&self) -> u64 {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.total_memory()
    }
}
