use crate::{
    error::{config::ConfigError, AppError},
    model::role::Role,
};

const DEFAULT_MAX_CANDIDATE_ATTEMPTS: usize = 10_000;

/// How the roster handles an optional role whose quota cannot be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalRolePolicy {
    /// Commit with fewer people, possibly zero.
    #[default]
    Degrade,
    /// Treat the shortfall like a mandatory role and abort the roster.
    Abort,
}

impl OptionalRolePolicy {
    fn parse(name: &str, value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "abort" => Ok(Self::Abort),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Tunables for automatic roster assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub trainee_policy: OptionalRolePolicy,
    pub chef_policy: OptionalRolePolicy,
    /// Upper bound on candidates examined for a single role.
    pub max_candidate_attempts: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            trainee_policy: OptionalRolePolicy::Degrade,
            chef_policy: OptionalRolePolicy::Degrade,
            max_candidate_attempts: DEFAULT_MAX_CANDIDATE_ATTEMPTS,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub roster: RosterConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            roster: RosterConfig::from_lookup(|name| std::env::var(name).ok())?,
        })
    }
}

impl RosterConfig {
    /// Whether an unfilled quota for the role is tolerated.
    ///
    /// Mandatory roles never degrade, whatever the policies say.
    pub fn degrades(&self, role: Role) -> bool {
        if !role.is_optional() {
            return false;
        }
        let policy = if role == Role::TraineePilot {
            self.trainee_policy
        } else {
            self.chef_policy
        };
        policy == OptionalRolePolicy::Degrade
    }

    /// Builds roster settings from a variable lookup, falling back to defaults for unset
    /// variables.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(RosterConfig)` - Parsed settings
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set to an unparseable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let policy = |name: &str, default: OptionalRolePolicy| match lookup(name) {
            Some(value) => OptionalRolePolicy::parse(name, &value),
            None => Ok(default),
        };

        let max_candidate_attempts = match lookup("ROSTER_MAX_CANDIDATE_ATTEMPTS") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|attempts| *attempts > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "ROSTER_MAX_CANDIDATE_ATTEMPTS".to_string(),
                    value,
                })?,
            None => defaults.max_candidate_attempts,
        };

        Ok(Self {
            trainee_policy: policy("ROSTER_TRAINEE_POLICY", defaults.trainee_policy)?,
            chef_policy: policy("ROSTER_CHEF_POLICY", defaults.chef_policy)?,
            max_candidate_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RosterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.trainee_policy, OptionalRolePolicy::Degrade);
        assert_eq!(config.max_candidate_attempts, 10_000);
    }

    #[test]
    fn parses_policies_case_insensitively() {
        let config = RosterConfig::from_lookup(lookup(&[
            ("ROSTER_TRAINEE_POLICY", "Abort"),
            ("ROSTER_CHEF_POLICY", "degrade"),
            ("ROSTER_MAX_CANDIDATE_ATTEMPTS", "50"),
        ]))
        .unwrap();
        assert_eq!(config.trainee_policy, OptionalRolePolicy::Abort);
        assert_eq!(config.chef_policy, OptionalRolePolicy::Degrade);
        assert_eq!(config.max_candidate_attempts, 50);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = RosterConfig::from_lookup(lookup(&[("ROSTER_CHEF_POLICY", "sometimes")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "ROSTER_CHEF_POLICY"
        ));
    }

    #[test]
    fn only_optional_roles_degrade() {
        let config = RosterConfig {
            chef_policy: OptionalRolePolicy::Abort,
            ..RosterConfig::default()
        };
        let degrading: Vec<Role> = Role::CREW
            .into_iter()
            .chain([Role::Passenger])
            .filter(|role| config.degrades(*role))
            .collect();
        assert_eq!(degrading, vec![Role::TraineePilot]);
    }

    #[test]
    fn rejects_zero_attempt_cap() {
        let result =
            RosterConfig::from_lookup(lookup(&[("ROSTER_MAX_CANDIDATE_ATTEMPTS", "0")]));
        assert!(result.is_err());
    }
}
