// Unit Tests for Client Configuration
//
// UNIT UNDER TEST: ClientConfig
//
// BUSINESS RESPONSIBILITY:
//   - Provides defaults for the public chat completion endpoint and timeout
//   - Loads credential and endpoint override from the environment
//   - Rejects configurations that cannot produce a request
//
// TEST COVERAGE:
//   - Default values
//   - Validation of missing key and empty endpoint
//   - Environment loading with and without overrides

use crate::config::{ClientConfig, API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_VAR};
use crate::error::ChatError;
use std::time::Duration;

#[cfg(test)]
mod defaults_and_validation_tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = ClientConfig::default();

        assert!(matches!(
            config.validate(),
            Err(ChatError::RequestConstruction { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let config = ClientConfig {
            api_key: Some(String::new()),
            ..ClientConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_endpoint() {
        let config = ClientConfig {
            endpoint: "   ".to_string(),
            api_key: Some("sk-test-key".to_string()),
            ..ClientConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ChatError::RequestConstruction { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let config = ClientConfig {
            api_key: Some("sk-test-key".to_string()),
            ..ClientConfig::default()
        };

        assert!(config.validate().is_ok());
    }
}

#[cfg(test)]
mod from_env_tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_api_key_with_default_endpoint() {
        // Arrange
        std::env::set_var(API_KEY_VAR, "sk-from-env");
        std::env::remove_var(ENDPOINT_VAR);

        // Act
        let config = ClientConfig::from_env().expect("Should load config");

        // Assert
        assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        // Cleanup
        std::env::remove_var(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_applies_endpoint_override() {
        // Arrange
        std::env::set_var(API_KEY_VAR, "sk-from-env");
        std::env::set_var(ENDPOINT_VAR, "http://localhost:8080/v1/chat/completions");

        // Act
        let config = ClientConfig::from_env().expect("Should load config");

        // Assert
        assert_eq!(config.endpoint, "http://localhost:8080/v1/chat/completions");

        // Cleanup
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(ENDPOINT_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_fails_without_api_key() {
        // Arrange
        std::env::remove_var(API_KEY_VAR);

        // Act
        let result = ClientConfig::from_env();

        // Assert
        assert!(matches!(result, Err(ChatError::RequestConstruction { .. })));
    }
}
