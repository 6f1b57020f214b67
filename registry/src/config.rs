// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use bls_validators_types::Stake;
use serde::{Deserialize, Serialize};

/// Admission policy of a [`crate::Registry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegistryConfig {
    /// Smallest stake a validator may attach. Encoded as a decimal string.
    #[serde(with = "stringify")]
    pub min_stake: Stake,
    /// Maximum number of active validators, unbounded when `None`.
    pub max_validators: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_stake: Stake::from(1u32),
            max_validators: None,
        }
    }
}

impl RegistryConfig {
    pub fn with_min_stake(mut self, min_stake: impl Into<Stake>) -> Self {
        self.min_stake = min_stake.into();
        self
    }

    pub fn with_max_validators(mut self, max_validators: usize) -> Self {
        self.max_validators = Some(max_validators);
        self
    }
}

/// Usage: `#[serde(with = "stringify")]`
mod stringify {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() -> anyhow::Result<()> {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"MinStake": "1000", "MaxValidators": 64}"#)?;
        assert_eq!(config.min_stake, Stake::from(1000u32));
        assert_eq!(config.max_validators, Some(64));

        let round_trip: RegistryConfig = serde_json::from_str(&serde_json::to_string(&config)?)?;
        assert_eq!(round_trip, config);
        Ok(())
    }

    #[test]
    fn test_defaults_fill_missing_fields() -> anyhow::Result<()> {
        let config: RegistryConfig = serde_json::from_str("{}")?;
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.min_stake, Stake::from(1u32));
        assert!(config.max_validators.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_stake_rejected() {
        let result = serde_json::from_str::<RegistryConfig>(r#"{"MinStake": "-5"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let config = RegistryConfig::default()
            .with_min_stake(500u32)
            .with_max_validators(3);
        assert_eq!(config.min_stake, Stake::from(500u32));
        assert_eq!(config.max_validators, Some(3));
    }
}
