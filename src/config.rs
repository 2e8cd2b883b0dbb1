//! Environment-driven defaults for front ends
//!
//! Recognized variables (all optional):
//!   DEFAULT_PRINCIPAL, DEFAULT_MONTHLY, DEFAULT_RATE_PCT, DEFAULT_YEARS, DEFAULT_INFLATION_PCT

use std::env;
use std::str::FromStr;
use crate::error::ConfigError;
use crate::params::InputParameters;

pub const ENV_PRINCIPAL: &str = "DEFAULT_PRINCIPAL";
pub const ENV_MONTHLY: &str = "DEFAULT_MONTHLY";
pub const ENV_RATE_PCT: &str = "DEFAULT_RATE_PCT";
pub const ENV_YEARS: &str = "DEFAULT_YEARS";
pub const ENV_INFLATION_PCT: &str = "DEFAULT_INFLATION_PCT";

/// Runtime settings shared by the CLI and the HTTP handler
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    /// Parameters used for any field a request or command line leaves out
    pub defaults: InputParameters,
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

/// Parse a variable, falling back to `default` with a warning when it is malformed
fn parse_or_warn<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> T {
    match parse_var(lookup, key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            log::warn!("{e}; using default");
            default
        }
    }
}

impl Settings {
    /// Read settings from the process environment, ignoring malformed values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings from the process environment, failing on malformed values
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|key| env::var(key).ok())
    }

    /// Lenient variant over any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = InputParameters::default();
        let defaults = InputParameters {
            initial_principal: parse_or_warn(&lookup, ENV_PRINCIPAL, base.initial_principal),
            monthly_contribution: parse_or_warn(&lookup, ENV_MONTHLY, base.monthly_contribution),
            annual_rate_pct: parse_or_warn(&lookup, ENV_RATE_PCT, base.annual_rate_pct),
            years: parse_or_warn(&lookup, ENV_YEARS, base.years),
            inflation_pct: parse_or_warn(&lookup, ENV_INFLATION_PCT, base.inflation_pct),
        };

        if let Err(e) = defaults.validate() {
            log::warn!("Configured defaults are invalid ({e}); using built-in defaults");
            return Self::default();
        }

        Self { defaults }
    }

    /// Strict variant over any key/value source
    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = InputParameters::default();
        let defaults = InputParameters {
            initial_principal: parse_var(&lookup, ENV_PRINCIPAL)?.unwrap_or(base.initial_principal),
            monthly_contribution: parse_var(&lookup, ENV_MONTHLY)?.unwrap_or(base.monthly_contribution),
            annual_rate_pct: parse_var(&lookup, ENV_RATE_PCT)?.unwrap_or(base.annual_rate_pct),
            years: parse_var(&lookup, ENV_YEARS)?.unwrap_or(base.years),
            inflation_pct: parse_var(&lookup, ENV_INFLATION_PCT)?.unwrap_or(base.inflation_pct),
        };
        defaults.validate()?;
        Ok(Self { defaults })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::error::ParameterError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_unset_variables_use_reference_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings.defaults, InputParameters::default());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::try_from_lookup(lookup_from(&[
            (ENV_PRINCIPAL, "10000"),
            (ENV_RATE_PCT, " 6.5 "),
            (ENV_YEARS, "30"),
        ]))
        .unwrap();

        assert_eq!(settings.defaults.initial_principal, 10_000.0);
        assert_eq!(settings.defaults.annual_rate_pct, 6.5);
        assert_eq!(settings.defaults.years, 30);
        assert_eq!(settings.defaults.monthly_contribution, 500.0);
    }

    #[test]
    fn test_malformed_value() {
        let lookup = lookup_from(&[(ENV_YEARS, "twenty"), (ENV_MONTHLY, "250")]);

        let err = Settings::try_from_lookup(&lookup).unwrap_err();
        assert_eq!(err, ConfigError::InvalidNumber { key: ENV_YEARS, value: "twenty".to_string() });

        // Lenient path keeps the good value and falls back for the bad one
        let settings = Settings::from_lookup(&lookup);
        assert_eq!(settings.defaults.years, 20);
        assert_eq!(settings.defaults.monthly_contribution, 250.0);
    }

    #[test]
    fn test_out_of_domain_defaults() {
        let lookup = lookup_from(&[(ENV_YEARS, "0")]);

        let err = Settings::try_from_lookup(&lookup).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDefaults(ParameterError::HorizonTooShort { years: 0, min: 1 }));

        assert_eq!(Settings::from_lookup(&lookup), Settings::default());
    }
}
