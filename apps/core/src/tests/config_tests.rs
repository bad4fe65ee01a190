//! Configuration loading from the environment.

use crate::config::AppConfig;
use crate::error::AppError;

#[test]
fn env_overrides_thresholds() {
    temp_env::with_vars(
        [
            ("NEUROLENS_HOPEFUL_THRESHOLD", Some("0.9")),
            ("NEUROLENS_HEAVY_THRESHOLD", Some("0.2")),
        ],
        || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.classifier.hopeful_threshold, 0.9);
            assert_eq!(config.classifier.heavy_threshold, 0.2);
        },
    );
}

#[test]
fn env_overrides_vocabulary() {
    temp_env::with_vars(
        [("NEUROLENS_BIAS_VOCABULARY", Some("Totally, utterly , "))],
        || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(
                config.classifier.bias_vocabulary,
                vec!["totally".to_string(), "utterly".to_string()]
            );
        },
    );
}

#[test]
fn unparseable_threshold_is_config_error() {
    temp_env::with_vars(
        [("NEUROLENS_HOPEFUL_THRESHOLD", Some("not-a-number"))],
        || {
            assert!(matches!(
                AppConfig::from_env(),
                Err(AppError::Config(_))
            ));
        },
    );
}

#[test]
fn inverted_thresholds_fail_validation() {
    temp_env::with_vars(
        [
            ("NEUROLENS_HOPEFUL_THRESHOLD", Some("0.3")),
            ("NEUROLENS_HEAVY_THRESHOLD", Some("0.7")),
        ],
        || {
            assert!(matches!(
                AppConfig::from_env(),
                Err(AppError::Validation(_))
            ));
        },
    );
}

#[test]
fn art_key_comes_from_env_only() {
    temp_env::with_vars([("NEUROLENS_ART_API_KEY", None::<&str>)], || {
        let config = AppConfig::from_env().unwrap();
        assert!(config.art.api_key.is_none());
    });

    temp_env::with_vars([("NEUROLENS_ART_API_KEY", Some("secret"))], || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.art.api_key.as_deref(), Some("secret"));
    });
}

#[test]
fn bad_endpoint_is_config_error() {
    temp_env::with_vars(
        [("KINDKART_GEOCODE_ENDPOINT", Some("not a url"))],
        || {
            assert!(matches!(
                AppConfig::from_env(),
                Err(AppError::Config(_))
            ));
        },
    );
}
