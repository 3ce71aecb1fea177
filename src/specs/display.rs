//! Display geometry descriptor.
//!
//! Turns raw panel geometry (real pixel size, rotation index, density) into
//! the fixed `"WxH, Rotation: {deg}, DPI: {dpi}"` string. The emitted pair
//! is always (longer, shorter) so the text reads the same regardless of how
//! the device is currently held.

use serde::{Deserialize, Serialize};

/// Screen rotation in degrees, derived from the platform's 4-valued
/// rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a rotation index to degrees. Indices are 0..=3 on every known
    /// platform; anything else defaults to 0 rather than failing.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

/// Raw display state as sampled from the platform.
///
/// Width and height are real (non-decor-inset) pixels. When the size and
/// rotation come from separate reads, a configuration change between them
/// can leave the pair inconsistent with the rotation; the descriptor is
/// still well-formed, just momentarily stale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub rotation_index: u32,
    pub density_dpi: u32,
}

/// Format the canonical descriptor string for a sampled geometry.
///
/// Pure function of its input: same geometry, same string.
pub fn describe(geometry: &DisplayGeometry) -> String {
    let rotation = Rotation::from_index(geometry.rotation_index);

    // Canonical orientation: longer edge first.
    let (w, h) = if geometry.width_px < geometry.height_px {
        (geometry.height_px, geometry.width_px)
    } else {
        (geometry.width_px, geometry.height_px)
    };

    format!(
        "{}x{}, Rotation: {}, DPI: {}",
        w,
        h,
        rotation.degrees(),
        geometry.density_dpi
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_geometry_is_swapped_to_landscape_first() {
        let g = DisplayGeometry {
            width_px: 1080,
            height_px: 2400,
            rotation_index: 1,
            density_dpi: 440,
        };
        assert_eq!(describe(&g), "2400x1080, Rotation: 90, DPI: 440");
    }

    #[test]
    fn landscape_geometry_is_unchanged() {
        let g = DisplayGeometry {
            width_px: 2400,
            height_px: 1080,
            rotation_index: 0,
            density_dpi: 440,
        };
        assert_eq!(describe(&g), "2400x1080, Rotation: 0, DPI: 440");
    }

    #[test]
    fn rotation_index_maps_to_degrees() {
        assert_eq!(Rotation::from_index(0).degrees(), 0);
        assert_eq!(Rotation::from_index(1).degrees(), 90);
        assert_eq!(Rotation::from_index(2).degrees(), 180);
        assert_eq!(Rotation::from_index(3).degrees(), 270);
    }

    #[test]
    fn out_of_range_rotation_defaults_to_zero() {
        assert_eq!(Rotation::from_index(4).degrees(), 0);
        assert_eq!(Rotation::from_index(u32::MAX).degrees(), 0);
    }

    #[test]
    fn square_panel_keeps_its_order() {
        let g = DisplayGeometry {
            width_px: 1080,
            height_px: 1080,
            rotation_index: 2,
            density_dpi: 320,
        };
        assert_eq!(describe(&g), "1080x1080, Rotation: 180, DPI: 320");
    }

    #[test]
    fn describing_twice_yields_identical_output() {
        let g = DisplayGeometry {
            width_px: 1440,
            height_px: 3120,
            rotation_index: 3,
            density_dpi: 560,
        };
        assert_eq!(describe(&g), describe(&g));
    }
}
