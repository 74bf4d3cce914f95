//! Shared value types.

mod color;

pub use color::{Color, Rgb};
