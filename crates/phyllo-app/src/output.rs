//! Lattice serialization for `phyllo generate`.

use std::fmt::Write as _;

use phyllo_common::PhylloError;
use phyllo_lattice::Lattice;

use crate::cli::OutputFormat;

pub fn render(lattice: &Lattice, format: OutputFormat) -> Result<String, PhylloError> {
    match format {
        OutputFormat::Json => to_json(lattice),
        OutputFormat::Csv => Ok(to_csv(lattice)),
    }
}

pub fn to_json(lattice: &Lattice) -> Result<String, PhylloError> {
    serde_json::to_string_pretty(lattice).map_err(|e| PhylloError::Serialize(e.to_string()))
}

/// One row per point. With lines enabled, `next` names the index the point
/// is connected to.
pub fn to_csv(lattice: &Lattice) -> String {
    let lines = lattice.segments.is_some();
    let mut out = String::from("index,x,y,z,r,g,b");
    if lines {
        out.push_str(",next");
    }
    out.push('\n');

    let n = lattice.len();
    for (i, p) in lattice.points.iter().enumerate() {
        let [x, y, z] = p.position;
        let [r, g, b] = p.color;
        let _ = write!(out, "{i},{x},{y},{z},{r},{g},{b}");
        if lines {
            out.push(',');
            if i + 1 < n {
                let _ = write!(out, "{}", i + 1);
            }
        }
        out.push('\n');
    }
    out
}
