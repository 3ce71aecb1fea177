//! Live display geometry adapter.
//!
//! Samples the active display through the platform window-manager tools:
//! `wm size` and `wm density` for the real pixel geometry, `dumpsys display`
//! for the current rotation index. Size and rotation are separate reads, so
//! a rotation that lands between them can produce a descriptor whose
//! dimensions do not match its rotation. That window is a few milliseconds
//! wide and the result is still well-formed, so the race is accepted.

use std::process::Command;

use anyhow::{Context, Result};

use super::DisplayState;
use crate::specs::display::DisplayGeometry;

/// Queries display geometry from the window manager.
#[derive(Debug, Default)]
pub struct WindowManagerDisplay;

impl DisplayState for WindowManagerDisplay {
    fn geometry(&self) -> Result<DisplayGeometry> {
        let size_out = run_tool("wm", &["size"])?;
        let (width_px, height_px) =
            parse_size(&size_out).context("could not parse wm size output")?;

        let density_out = run_tool("wm", &["density"])?;
        let density_dpi =
            parse_density(&density_out).context("could not parse wm density output")?;

        // Second read; see the module docs for the rotation race.
        let rotation_index = run_tool("dumpsys", &["display"])
            .ok()
            .and_then(|out| parse_rotation(&out))
            .unwrap_or(0);

        Ok(DisplayGeometry {
            width_px,
            height_px,
            rotation_index,
            density_dpi,
        })
    }
}

fn run_tool(tool: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .with_context(|| format!("could not run {}", tool))?;
    if !output.status.success() {
        anyhow::bail!(
            "{} {} failed: {}",
            tool,
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `wm size` output, preferring the override size when present:
/// ```text
/// Physical size: 1080x2400
/// Override size: 1080x2340
/// ```
fn parse_size(output: &str) -> Option<(u32, u32)> {
    let mut physical = None;
    for line in output.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Override size:") {
            if let Some(pair) = parse_dimensions(rest) {
                return Some(pair);
            }
        }
        if let Some(rest) = line.strip_prefix("Physical size:") {
            physical = parse_dimensions(rest);
        }
    }
    physical
}

fn parse_dimensions(text: &str) -> Option<(u32, u32)> {
    let (w, h) = text.trim().split_once('x')?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

/// Parse `wm density` output: `Physical density: 440`.
fn parse_density(output: &str) -> Option<u32> {
    for line in output.lines() {
        let line = line.trim();
        for prefix in ["Override density:", "Physical density:"] {
            if let Some(rest) = line.strip_prefix(prefix) {
                if let Ok(dpi) = rest.trim().parse() {
                    return Some(dpi);
                }
            }
        }
    }
    None
}

/// Scan `dumpsys display` for the current rotation index, e.g.
/// `mCurrentOrientation=1` or `rotation=ROTATION_90` / `rotation=1`.
fn parse_rotation(output: &str) -> Option<u32> {
    for line in output.lines() {
        for key in ["mCurrentOrientation=", "rotation="] {
            if let Some(idx) = line.find(key) {
                let value = line[idx + key.len()..]
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .next()?;
                match value {
                    "ROTATION_0" => return Some(0),
                    "ROTATION_90" => return Some(1),
                    "ROTATION_180" => return Some(2),
                    "ROTATION_270" => return Some(3),
                    _ => {
                        if let Ok(index) = value.parse() {
                            return Some(index);
                        }
                    }
                }
            }
        }
    }
    None
}
