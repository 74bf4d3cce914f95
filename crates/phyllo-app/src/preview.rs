//! Text-mode rendering of a [`Scene`].
//!
//! Points are projected with the scene's camera and group rotation, then
//! depth-tested into a character grid. Each point covers the cells inside
//! its projected disc, so `point_size` and zoom change the footprint. Nearer
//! points get denser glyphs; colors come from the scene's material and
//! lights.

use std::fmt::Write as _;

use phyllo_common::Rgb;
use phyllo_lattice::scene::matrix::{self, Mat4};
use phyllo_lattice::scene::Scene;

/// Glyphs from nearest to farthest.
const DEPTH_RAMP: [char; 5] = ['@', '%', 'o', '+', '.'];
const LINE_GLYPH: char = '·';
const STAR_GLYPH: char = '`';
const STAR_COLOR: [u8; 3] = [150, 150, 170];
/// Roughly one cell in this many is a star.
const STAR_SPACING: u32 = 53;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    depth: f32,
    color: [u8; 3],
}

/// One rendered frame.
#[derive(Debug, Clone)]
pub struct AsciiFrame {
    width: usize,
    height: usize,
    cells: Vec<Option<Cell>>,
}

impl AsciiFrame {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x].map_or(' ', |c| c.glyph)
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn plot(&mut self, x: usize, y: usize, cell: Cell) {
        let slot = &mut self.cells[y * self.width + x];
        match slot {
            Some(existing) if existing.depth <= cell.depth => {}
            _ => *slot = Some(cell),
        }
    }

    /// Render as text, one line per row. With `ansi`, each glyph carries a
    /// 24-bit foreground color.
    pub fn to_text(&self, ansi: bool) -> String {
        if self.width == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.width * self.height * if ansi { 20 } else { 1 });
        for row in self.cells.chunks(self.width) {
            for cell in row {
                match cell {
                    Some(c) if ansi => {
                        let [r, g, b] = c.color;
                        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{}", c.glyph);
                    }
                    Some(c) => out.push(c.glyph),
                    None => out.push(' '),
                }
            }
            if ansi {
                out.push_str("\x1b[0m");
            }
            out.push('\n');
        }
        out
    }
}

/// A point after projection: screen position, NDC depth and clip `w`.
#[derive(Debug, Clone, Copy)]
struct Projected {
    sx: f32,
    sy: f32,
    depth: f32,
    w: f32,
}

/// Project to screen space, or `None` when behind the camera.
fn project(mvp: &Mat4, p: [f32; 3], width: usize, height: usize) -> Option<Projected> {
    let [x, y, z, w] = matrix::transform_point(mvp, p);
    if w <= f32::EPSILON {
        return None;
    }
    Some(Projected {
        sx: (x / w + 1.0) * 0.5 * width as f32,
        sy: (1.0 - y / w) * 0.5 * height as f32,
        depth: z / w,
        w,
    })
}

fn to_u8(color: [f32; 4]) -> [u8; 3] {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c(color[0]), c(color[1]), c(color[2])]
}

fn rgb_to_u8(color: Rgb) -> [u8; 3] {
    to_u8([color.r, color.g, color.b, 1.0])
}

/// Fixed per-cell hash, so the starfield stays put between frames.
fn is_star(x: usize, y: usize) -> bool {
    let seed = (x as u32).wrapping_mul(2_654_435_761) ^ (y as u32).wrapping_mul(2_246_822_519);
    let seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    (seed >> 16) % STAR_SPACING == 0
}

/// Plot every cell whose center lies inside the ellipse of radii `rx`,
/// `ry` around `(sx, sy)`. The cell under the center is always plotted.
fn plot_disc(frame: &mut AsciiFrame, sx: f32, sy: f32, rx: f32, ry: f32, cell: Cell) {
    let (width, height) = (frame.width as i64, frame.height as i64);
    let x0 = (sx - rx).floor() as i64;
    let x1 = (sx + rx).floor() as i64;
    let y0 = (sy - ry).floor() as i64;
    let y1 = (sy + ry).floor() as i64;
    let (home_x, home_y) = (sx.floor() as i64, sy.floor() as i64);
    for y in y0.max(0)..=y1.min(height - 1) {
        for x in x0.max(0)..=x1.min(width - 1) {
            let dx = (x as f32 + 0.5 - sx) / rx.max(f32::EPSILON);
            let dy = (y as f32 + 0.5 - sy) / ry.max(f32::EPSILON);
            if (x, y) == (home_x, home_y) || dx * dx + dy * dy <= 1.0 {
                frame.plot(x as usize, y as usize, cell);
            }
        }
    }
}

fn cell_index(sx: f32, sy: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    if sx < 0.0 || sy < 0.0 {
        return None;
    }
    let (x, y) = (sx as usize, sy as usize);
    (x < width && y < height).then_some((x, y))
}

/// Draw the scene at its current rotation.
pub fn render(scene: &Scene, width: usize, height: usize) -> AsciiFrame {
    let mut frame = AsciiFrame {
        width,
        height,
        cells: vec![None; width * height],
    };
    if width == 0 || height == 0 {
        return frame;
    }

    if scene.lighting.starfield {
        for y in 0..height {
            for x in 0..width {
                if is_star(x, y) {
                    let cell = Cell { glyph: STAR_GLYPH, depth: f32::INFINITY, color: STAR_COLOR };
                    frame.plot(x, y, cell);
                }
            }
        }
    }

    let aspect = width as f32 / (height as f32 * CELL_ASPECT);
    let projection = scene.camera.projection(aspect);
    let view_projection = scene.camera.view_projection(aspect);
    let mvp = matrix::mul(&view_projection, &scene.model_matrix());

    // Lines first so points win ties.
    for pair in scene.line_vertices.chunks_exact(2) {
        let (Some(a), Some(b)) = (
            project(&mvp, pair[0].position, width, height),
            project(&mvp, pair[1].position, width, height),
        ) else {
            continue;
        };
        let steps = (b.sx - a.sx).abs().max((b.sy - a.sy).abs()).ceil().max(1.0) as usize;
        let color = to_u8(pair[0].color);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let sx = a.sx + (b.sx - a.sx) * t;
            let sy = a.sy + (b.sy - a.sy) * t;
            let depth = a.depth + (b.depth - a.depth) * t;
            if let Some((x, y)) = cell_index(sx, sy, width, height) {
                // Nudged back so a point at the same depth wins.
                frame.plot(x, y, Cell { glyph: LINE_GLYPH, depth: depth + 1e-4, color });
            }
        }
    }

    // Lit points are already in world space.
    let projected: Vec<_> = scene
        .lit_points()
        .into_iter()
        .filter_map(|(world, lit)| {
            project(&view_projection, world, width, height).map(|p| (p, rgb_to_u8(lit)))
        })
        .collect();

    // NDC depth is nonlinear; rank by the sphere's own near/far span instead.
    let (near, far) = projected
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), (p, _)| (lo.min(p.depth), hi.max(p.depth)));
    let span = (far - near).max(f32::EPSILON);

    // Pixels per world unit at w = 1, per axis.
    let scale_x = projection[0] * 0.5 * width as f32;
    let scale_y = projection[5] * 0.5 * height as f32;
    let size = scene.config.point_size;

    for (p, color) in projected {
        let rank = ((p.depth - near) / span * (DEPTH_RAMP.len() - 1) as f32).round() as usize;
        let glyph = DEPTH_RAMP[rank.min(DEPTH_RAMP.len() - 1)];
        let (rx, ry) = (size * scale_x / p.w, size * scale_y / p.w);
        plot_disc(&mut frame, p.sx, p.sy, rx, ry, Cell { glyph, depth: p.depth, color });
    }

    frame
}
