//! Data-partition filesystem statistics.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

use super::FilesystemStats;

/// Raw block geometry for a mounted filesystem.
#[derive(Debug, Clone, Copy)]
pub struct PartitionStats {
    /// Fundamental block size in bytes.
    pub block_size: u64,
    /// Total data blocks in the filesystem.
    pub total_blocks: u64,
}

impl PartitionStats {
    /// Total capacity in bytes. Saturates rather than wrapping on
    /// pathological geometry.
    pub fn total_bytes(&self) -> u64 {
        self.block_size.saturating_mul(self.total_blocks)
    }
}

/// Reads block statistics with `stat -f` against the data partition.
#[derive(Debug, Clone)]
pub struct StatCommandStats {
    mount_point: PathBuf,
}

impl StatCommandStats {
    pub fn new(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            mount_point: mount_point.into(),
        }
    }
}

impl FilesystemStats for StatCommandStats {
    fn stats(&self) -> Result<PartitionStats> {
        let output = Command::new("stat")
            .args(["-f", "-c", "%S %b"])
            .arg(&self.mount_point)
            .output()
            .with_context(|| format!("could not stat {}", self.mount_point.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "stat -f failed for {}: {}",
                self.mount_point.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_stat_output(stdout.trim())
            .with_context(|| format!("unexpected stat output for {}", self.mount_point.display()))
    }
}

fn parse_stat_output(line: &str) -> Result<PartitionStats> {
    let mut fields = line.split_whitespace();
    let block_size = fields
        .next()
        .context("missing block size field")?
        .parse::<u64>()
        .context("block size is not a number")?;
    let total_blocks = fields
        .next()
        .context("missing block count field")?
        .parse::<u64>()
        .context("block count is not a number")?;

    Ok(PartitionStats {
        block_size,
        total_blocks,
    })
}
