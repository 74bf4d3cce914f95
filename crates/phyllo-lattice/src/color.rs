//! Per-point color schemes.

use phyllo_common::Rgb;
use phyllo_config::{ColorScheme, ThemePalette};

/// HSL to RGB, all components in `[0, 1]`. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    let q = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Color of point `i` of `n`, given its unit-sphere height `y` and spiral
/// angle `theta`.
///
/// - golden: pole-to-pole gradient, `golden[0]` at `y = 1`, `golden[1]` at `y = -1`
/// - rainbow: hue `i / n` at full saturation, half lightness
/// - cyber: blend driven by `sin(theta)`
pub fn scheme_color(
    scheme: ColorScheme,
    palette: &ThemePalette,
    i: usize,
    n: usize,
    y: f64,
    theta: f64,
) -> Rgb {
    match scheme {
        ColorScheme::Golden => {
            let t = ((1.0 - y) / 2.0) as f32;
            palette.golden[0].lerp(palette.golden[1], t)
        }
        ColorScheme::Rainbow => {
            let hue = if n == 0 { 0.0 } else { i as f32 / n as f32 };
            hsl_to_rgb(hue, 1.0, 0.5)
        }
        ColorScheme::Cyber => {
            let t = ((theta.sin() + 1.0) / 2.0) as f32;
            palette.cyber[0].lerp(palette.cyber[1], t)
        }
    }
}
