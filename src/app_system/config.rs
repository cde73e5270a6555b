use super::SystemError;

pub const CHANNEL_CAPACITY_VAR: &str = "STOREFRONT_CHANNEL_CAPACITY";
pub const LOG_FILTER_VAR: &str = "STOREFRONT_LOG";

/// Startup settings for the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Request queue depth of the cart actor.
    pub channel_capacity: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, SystemError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a key lookup, keeping defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = raw.trim().parse().map_err(|_| {
                SystemError::Config(format!("{CHANNEL_CAPACITY_VAR} is not a number: {raw:?}"))
            })?;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        if self.channel_capacity == 0 {
            return Err(SystemError::Config(format!(
                "{CHANNEL_CAPACITY_VAR} must be greater than zero"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = SystemConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (CHANNEL_CAPACITY_VAR, " 64 "),
            (LOG_FILTER_VAR, "cake_storefront=debug"),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.log_filter, "cake_storefront=debug");
    }

    #[test]
    fn test_bad_capacity_is_rejected() {
        let not_a_number = SystemConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "lots")]));
        assert!(matches!(not_a_number, Err(SystemError::Config(_))));

        let zero = SystemConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "0")]));
        assert!(matches!(zero, Err(SystemError::Config(_))));
    }
}
