//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator runs them all and
//! collects every problem into a single `ConfigError`. [`sanitize`] repairs
//! a config field by field so one bad value never costs the others.

mod helpers;
mod misc;
mod sphere;

#[cfg(test)]
mod tests;

use crate::schema::PhylloConfig;
use phyllo_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PhylloConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sphere::validate_sphere(&mut errors, config);
    misc::validate_ai(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Bring every field into range: sphere values are clamped and snapped, AI
/// numbers clamped, and blank or unknown names reset to their defaults.
/// Valid fields are left untouched.
pub fn sanitize(config: PhylloConfig) -> PhylloConfig {
    PhylloConfig {
        sphere: config.sphere.clamped(),
        ai: misc::sanitize_ai(config.ai),
        logging: misc::sanitize_logging(config.logging),
        ..config
    }
}
