//! System property store adapter.

use std::process::Command;

use super::PropertyStore;

/// Reads system properties via the platform `getprop` tool.
///
/// Any failure to spawn or decode collapses to the empty string, which is
/// also what `getprop` prints for unset keys; the resolvers treat both the
/// same way.
#[derive(Debug, Default)]
pub struct SystemPropertyStore;

impl PropertyStore for SystemPropertyStore {
    fn get(&self, name: &str) -> String {
        let output = match Command::new("getprop").arg(name).output() {
            Ok(output) if output.status.success() => output,
            _ => return String::new(),
        };

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
