//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, timeouts and the description content type
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("describe.content_type {0:?} is not a valid header value")]
    ContentType(String),
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let content_type = &config.describe.content_type;
    if content_type.trim().is_empty() || HeaderValue::from_str(content_type).is_err() {
        errors.push(ValidationError::ContentType(content_type.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nope".into();
        assert_eq!(validate_config(&config), Ok(()));

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nope".into())])
        );
    }

    #[test]
    fn test_empty_content_type() {
        let mut config = ServerConfig::default();
        config.describe.content_type = "  ".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::ContentType("  ".into())])
        );
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.describe.content_type = "a\u{7f}b".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("localhost".into()),
                ValidationError::ZeroTimeout,
                ValidationError::ContentType("a\u{7f}b".into()),
            ]
        );
    }
}
