use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What `GetAllBlockchainEvents` does with an entry that does not decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListPolicy {
    /// Fail the whole listing; callers get a complete list or an error
    #[default]
    AllOrNothing,
    /// Log and skip the entry, returning the decodable subset
    SkipMalformed,
}

impl FromStr for ListPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all-or-nothing" => Ok(ListPolicy::AllOrNothing),
            "skip-malformed" => Ok(ListPolicy::SkipMalformed),
            other => Err(ConfigError::InvalidListPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for ListPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPolicy::AllOrNothing => write!(f, "all-or-nothing"),
            ListPolicy::SkipMalformed => write!(f, "skip-malformed"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid list policy '{0}', expected 'all-or-nothing' or 'skip-malformed'")]
    InvalidListPolicy(String),
}

/// Contract settings, fixed for the lifetime of a chaincode instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractConfig {
    #[serde(default)]
    pub list_policy: ListPolicy,
}

impl ContractConfig {
    pub const LIST_POLICY_ENV: &'static str = "HERBTRACE_LIST_POLICY";

    pub fn new(list_policy: ListPolicy) -> Self {
        Self { list_policy }
    }

    /// Read settings from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let list_policy = lookup(Self::LIST_POLICY_ENV)
            .map(|raw| raw.parse::<ListPolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { list_policy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_or_nothing() {
        assert_eq!(ContractConfig::default().list_policy, ListPolicy::AllOrNothing);
        assert_eq!(ContractConfig::from_lookup(|_| None).unwrap(), ContractConfig::default());
    }

    #[test]
    fn test_lookup_selects_skip_malformed() {
        let config = ContractConfig::from_lookup(|name| {
            (name == ContractConfig::LIST_POLICY_ENV).then(|| " skip-malformed ".to_string())
        })
        .unwrap();

        assert_eq!(config.list_policy, ListPolicy::SkipMalformed);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = ContractConfig::from_lookup(|_| Some("partial".to_string()));

        assert_eq!(result, Err(ConfigError::InvalidListPolicy("partial".to_string())));
    }

    #[test]
    fn test_policy_names_match_serde_encoding() {
        for policy in [ListPolicy::AllOrNothing, ListPolicy::SkipMalformed] {
            let encoded = serde_json::to_string(&policy).unwrap();
            assert_eq!(encoded, format!("\"{policy}\""));
            assert_eq!(policy.to_string().parse::<ListPolicy>().unwrap(), policy);
        }
    }
}
