//! The two built-in palettes.

use phyllo_common::Rgb;

use super::types::{LightingParams, MaterialParams, ThemePalette};
use crate::schema::ThemeMode;

fn hex(rgb: u32) -> Rgb {
    Rgb::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

impl ThemePalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            golden: [hex(0xCA8A04), hex(0xFACC15)],
            cyber: [hex(0x06B6D4), hex(0xEC4899)],
            background: hex(0x0B0B0B),
            line_color: Rgb::WHITE,
            line_opacity: 0.2,
            material: MaterialParams {
                roughness: 0.4,
                metalness: 0.8,
                emissive: hex(0x222222),
                emissive_intensity: 0.2,
            },
            lighting: LightingParams {
                ambient_intensity: 0.5,
                key_intensity: 1.5,
                fill_intensity: 0.5,
                fill_color: hex(0xFFD700),
                starfield: true,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            golden: [hex(0x992200), hex(0xFF3D00)],
            cyber: [hex(0x0000FF), hex(0xFF00FF)],
            background: hex(0xF0F0F0),
            line_color: Rgb::BLACK,
            line_opacity: 0.15,
            material: MaterialParams {
                roughness: 0.2,
                metalness: 0.5,
                emissive: Rgb::BLACK,
                emissive_intensity: 0.0,
            },
            lighting: LightingParams {
                ambient_intensity: 1.0,
                key_intensity: 0.8,
                fill_intensity: 0.5,
                fill_color: hex(0x444444),
                starfield: false,
            },
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::dark()
    }
}
