//! AI and logging validation.

use crate::schema::{AiConfig, LoggingConfig, PhylloConfig, LOG_LEVELS};

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_ai(errors: &mut Vec<String>, config: &PhylloConfig) {
    if config.ai.model.trim().is_empty() {
        errors.push("ai.model must not be empty".into());
    }
    if config.ai.api_key_env.trim().is_empty() {
        errors.push("ai.api_key_env must not be empty".into());
    }
    validate_range_f64(errors, "ai.temperature", config.ai.temperature, 0.0, 2.0);
    validate_range(errors, "ai.max_tokens", config.ai.max_tokens, 1, 65536);
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &PhylloConfig) {
    if !is_known_level(&config.logging.level) {
        errors.push(format!(
            "logging.level = {:?} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}

fn is_known_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
}

/// Clamp numeric AI settings into range; blank names fall back to defaults.
pub(crate) fn sanitize_ai(ai: AiConfig) -> AiConfig {
    let defaults = AiConfig::default();
    AiConfig {
        model: if ai.model.trim().is_empty() { defaults.model } else { ai.model },
        api_key_env: if ai.api_key_env.trim().is_empty() {
            defaults.api_key_env
        } else {
            ai.api_key_env
        },
        temperature: if ai.temperature.is_finite() {
            ai.temperature.clamp(0.0, 2.0)
        } else {
            defaults.temperature
        },
        max_tokens: ai.max_tokens.clamp(1, 65536),
    }
}

pub(crate) fn sanitize_logging(logging: LoggingConfig) -> LoggingConfig {
    if is_known_level(&logging.level) {
        logging
    } else {
        LoggingConfig::default()
    }
}
