use std::env;

use crate::errors::AgentError;

/// Identifies the Bedrock agent and the deployed alias to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub agent_id: String,
    pub agent_alias_id: String,
}

impl AgentConfig {
    /// Reads `AGENT_ID` and `AGENT_ALIAS_ID` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Config` naming the first variable that is unset or empty.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Config` naming the first variable that is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            agent_id: required(&lookup, "AGENT_ID")?,
            agent_alias_id: required(&lookup, "AGENT_ALIAS_ID")?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, AgentError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AgentError::Config(format!("{}: environment variable not set", name)))
}

/// Region the function was first deployed to; last resort after the SDK chain.
pub const FALLBACK_REGION: &str = "eu-west-1";

/// Settings for building the Bedrock client once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Explicit region override from `AGENT_REGION`.
    pub region: Option<String>,
}

impl ClientConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            region: env::var("AGENT_REGION")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_both_ids() {
        let config = AgentConfig::from_lookup(lookup_from(&[
            ("AGENT_ID", "AGENT123"),
            ("AGENT_ALIAS_ID", "ALIAS456"),
        ]))
        .unwrap();

        assert_eq!(config.agent_id, "AGENT123");
        assert_eq!(config.agent_alias_id, "ALIAS456");
    }

    #[test]
    fn test_from_lookup_missing_alias() {
        let err = AgentConfig::from_lookup(lookup_from(&[("AGENT_ID", "AGENT123")])).unwrap_err();
        assert_eq!(
            err,
            AgentError::Config("AGENT_ALIAS_ID: environment variable not set".to_string())
        );
    }

    #[test]
    fn test_from_lookup_treats_blank_as_missing() {
        let err = AgentConfig::from_lookup(lookup_from(&[
            ("AGENT_ID", "  "),
            ("AGENT_ALIAS_ID", "ALIAS456"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("AGENT_ID"));
    }
}
