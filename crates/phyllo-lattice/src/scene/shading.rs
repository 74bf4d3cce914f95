//! Per-point shading from the theme's material and lights.
//!
//! A white key light and a tinted fill light sit on opposite corners of the
//! scene. Each contributes a Lambert term plus a Blinn-Phong highlight whose
//! sharpness follows the material roughness; metals tint the highlight with
//! their base color and diffuse less. Ambient and emissive are added flat.

use phyllo_common::Rgb;
use phyllo_config::theme::{LightingParams, MaterialParams};

use super::{FILL_LIGHT_POSITION, KEY_LIGHT_POSITION};

type Vec3 = [f32; 3];

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

fn scale(c: Rgb, k: f32) -> Rgb {
    Rgb::new(c.r * k, c.g * k, c.b * k)
}

fn modulate(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(a.r * b.r, a.g * b.g, a.b * b.b)
}

fn accumulate(acc: &mut Rgb, c: Rgb) {
    acc.r += c.r;
    acc.g += c.g;
    acc.b += c.b;
}

/// Lit color of a surface point with outward `normal`, seen from `eye`.
pub fn shade(
    base: Rgb,
    position: Vec3,
    normal: Vec3,
    eye: Vec3,
    material: &MaterialParams,
    lighting: &LightingParams,
) -> Rgb {
    let n = normalize(normal);
    let v = normalize(sub(eye, position));

    let diffuse_weight = 1.0 - 0.5 * material.metalness;
    let specular_tint = Rgb::WHITE.lerp(base, material.metalness);
    let roughness = material.roughness.max(0.05);
    let shininess = 2.0 / (roughness * roughness);
    let specular_weight = 1.0 - roughness;

    let mut out = scale(base, lighting.ambient_intensity);
    let lights = [
        (KEY_LIGHT_POSITION, Rgb::WHITE, lighting.key_intensity),
        (FILL_LIGHT_POSITION, lighting.fill_color, lighting.fill_intensity),
    ];
    for (light_position, light_color, intensity) in lights {
        let l = normalize(sub(light_position, position));
        let lambert = dot(n, l).max(0.0);
        if lambert <= 0.0 {
            continue;
        }
        let h = normalize(add(l, v));
        let highlight = dot(n, h).max(0.0).powf(shininess) * specular_weight;

        let diffuse = scale(modulate(base, light_color), lambert * diffuse_weight);
        let specular = scale(modulate(specular_tint, light_color), highlight);
        accumulate(&mut out, scale(diffuse, intensity));
        accumulate(&mut out, scale(specular, intensity));
    }
    accumulate(
        &mut out,
        scale(material.emissive, material.emissive_intensity),
    );

    Rgb::new(
        out.r.clamp(0.0, 1.0),
        out.g.clamp(0.0, 1.0),
        out.b.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use phyllo_config::ThemePalette;

    const EYE: Vec3 = [0.0, 0.0, 40.0];

    fn luminance(c: Rgb) -> f32 {
        c.r + c.g + c.b
    }

    #[test]
    fn side_facing_the_key_light_is_brighter() {
        let palette = ThemePalette::light();
        let base = Rgb::new(0.5, 0.4, 0.3);
        let lit = shade(
            base,
            [0.6, 0.6, 0.6],
            [1.0, 1.0, 1.0],
            EYE,
            &palette.material,
            &palette.lighting,
        );
        let away = shade(
            base,
            [-0.6, 0.6, -0.6],
            [-1.0, 1.0, -1.0],
            EYE,
            &palette.material,
            &palette.lighting,
        );
        assert!(luminance(lit) > luminance(away));
    }

    #[test]
    fn surface_edge_on_to_both_lights_gets_only_ambient() {
        let palette = ThemePalette::light();
        let base = Rgb::new(0.2, 0.4, 0.6);
        let c = shade(
            base,
            [0.0, 0.0, 0.0],
            [1.0, -1.0, 0.0],
            EYE,
            &palette.material,
            &palette.lighting,
        );
        let expected = scale(base, palette.lighting.ambient_intensity);
        assert!((c.r - expected.r).abs() < 1e-5);
        assert!((c.g - expected.g).abs() < 1e-5);
        assert!((c.b - expected.b).abs() < 1e-5);
    }

    #[test]
    fn emissive_lifts_an_unlit_point() {
        let palette = ThemePalette::dark();
        let mut lighting = palette.lighting;
        lighting.ambient_intensity = 0.0;
        lighting.key_intensity = 0.0;
        lighting.fill_intensity = 0.0;
        let c = shade(
            Rgb::BLACK,
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            EYE,
            &palette.material,
            &lighting,
        );
        let glow = scale(palette.material.emissive, palette.material.emissive_intensity);
        assert!(glow.r > 0.0);
        assert!((c.r - glow.r).abs() < 1e-5);
    }

    #[test]
    fn output_stays_in_unit_range() {
        let palette = ThemePalette::dark();
        let mut lighting = palette.lighting;
        lighting.key_intensity = 50.0;
        let c = shade(
            Rgb::WHITE,
            [0.5, 0.5, 0.5],
            [1.0, 1.0, 1.0],
            [50.0, 50.0, 50.0],
            &palette.material,
            &lighting,
        );
        assert_eq!(c, Rgb::WHITE);
    }

    #[test]
    fn fill_light_carries_its_tint() {
        let palette = ThemePalette::dark();
        let mut lighting = palette.lighting;
        lighting.ambient_intensity = 0.0;
        lighting.key_intensity = 0.0;
        let mut material = palette.material;
        material.emissive_intensity = 0.0;
        let c = shade(
            Rgb::WHITE,
            [-0.6, -0.6, -0.6],
            [-1.0, -1.0, -1.0],
            EYE,
            &material,
            &lighting,
        );
        // Gold fill: red and green dominate blue.
        assert!(c.r > c.b && c.g > c.b);
    }
}
