pub mod errors;
pub mod types;

pub use errors::{ConfigError, PhylloError};
pub use types::{Color, Rgb};

pub type Result<T> = std::result::Result<T, PhylloError>;
