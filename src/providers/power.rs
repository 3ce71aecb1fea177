//! Power profile adapter.
//!
//! The platform power profile is an internal data source with no stability
//! guarantee; entire platforms ship without one. Absence and misparse are
//! error values here — the battery resolver maps them to a zero capacity.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::PowerProfileSource;
use crate::specs::battery::BATTERY_CAPACITY_KEY;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("no power profile source present on this platform")]
    Unavailable,

    #[error("unknown power profile key: {0}")]
    UnknownKey(String),

    #[error("unreadable power profile entry at {0}")]
    Unreadable(String),
}

/// Resolves power profile figures from the kernel power-supply sysfs nodes.
///
/// `battery.capacity` comes from `charge_full_design` (µAh) when present,
/// otherwise from `energy_full_design` (µWh) divided by the design voltage.
/// Either way the figure lands in mAh, matching the platform profile.
#[derive(Debug, Clone)]
pub struct SysfsPowerProfile {
    supply_dirs: Vec<PathBuf>,
}

impl Default for SysfsPowerProfile {
    fn default() -> Self {
        Self {
            supply_dirs: ["battery", "BAT0", "BAT1"]
                .iter()
                .map(|name| PathBuf::from("/sys/class/power_supply").join(name))
                .collect(),
        }
    }
}

impl SysfsPowerProfile {
    #[cfg(test)]
    fn with_dirs(supply_dirs: Vec<PathBuf>) -> Self {
        Self { supply_dirs }
    }

    fn read_value(&self, file: &str) -> Option<f64> {
        for dir in &self.supply_dirs {
            let path = dir.join(file);
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(value) = content.trim().parse::<f64>() {
                    return Some(value);
                }
                tracing::debug!(path = %path.display(), "ignoring unparsable sysfs entry");
            }
        }
        None
    }

    fn capacity_mah(&self) -> Result<f64, ProfileError> {
        // Charge counter first: µAh straight to mAh.
        if let Some(charge_uah) = self.read_value("charge_full_design") {
            return Ok(charge_uah / 1000.0);
        }

        // Energy-reporting supplies: µWh over design voltage (µV).
        if let Some(energy_uwh) = self.read_value("energy_full_design") {
            let voltage_uv = self
                .read_value("voltage_min_design")
                .filter(|v| *v > 0.0)
                .ok_or_else(|| ProfileError::Unreadable("voltage_min_design".to_string()))?;
            return Ok(energy_uwh * 1000.0 / voltage_uv);
        }

        Err(ProfileError::Unavailable)
    }
}

impl PowerProfileSource for SysfsPowerProfile {
    fn average_power(&self, key: &str) -> Result<f64, ProfileError> {
        if key != BATTERY_CAPACITY_KEY {
            return Err(ProfileError::UnknownKey(key.to_string()));
        }
        self.capacity_mah()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn profile_in(dir: &std::path::Path) -> SysfsPowerProfile {
        SysfsPowerProfile::with_dirs(vec![dir.to_path_buf()])
    }

    #[test]
    fn charge_counter_converts_to_mah() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("charge_full_design"), "4000000\n").unwrap();

        let profile = profile_in(dir.path());
        let value = profile.average_power(BATTERY_CAPACITY_KEY).unwrap();
        assert_eq!(value, 4000.0);
    }

    #[test]
    fn energy_supply_falls_back_to_voltage_division() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("energy_full_design"), "15200000\n").unwrap();
        fs::write(dir.path().join("voltage_min_design"), "3800000\n").unwrap();

        let profile = profile_in(dir.path());
        let value = profile.average_power(BATTERY_CAPACITY_KEY).unwrap();
        assert_eq!(value, 4000.0);
    }

    #[test]
    fn absent_supply_dir_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(dir.path());
        assert!(matches!(
            profile.average_power(BATTERY_CAPACITY_KEY),
            Err(ProfileError::Unavailable)
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(dir.path());
        assert!(matches!(
            profile.average_power("screen.on"),
            Err(ProfileError::UnknownKey(_))
        ));
    }
}
