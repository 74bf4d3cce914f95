//! Fibonacci-lattice point generation and scene preparation.
//!
//! [`generate`] places points on a sphere along the golden-angle spiral and
//! colors them per scheme and theme. The [`scene`] module turns a
//! [`Lattice`] into what a retained-mode renderer consumes: per-instance
//! transforms, a camera, and the per-frame spin.

pub mod color;
pub mod lattice;
pub mod scene;

pub use color::{hsl_to_rgb, scheme_color};
pub use lattice::{generate, lattice_point, Lattice, LineSegment, Point, GOLDEN_ANGLE};
