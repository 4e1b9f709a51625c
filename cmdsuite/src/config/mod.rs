//! Test configuration layers and the global-over-local merge.
//!
//! The same [`TestConfig`] shape describes the suite-wide `config` block and
//! each test's own `config` block. Unset fields are empty or zero, and the
//! merge treats "empty" as "inherit from global".
//!
//! Two consequences of that rule are kept as-is: a test cannot lower
//! `retries` to `0` once the global layer sets it, and cannot switch
//! `inherit-env` off once the global layer switches it on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One layer of test configuration.
///
/// Durations (`timeout`, `interval`) are opaque literals such as `"5s"`;
/// they are interpreted by whatever executes the suite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TestConfig {
    /// Pass the caller's environment through to the command.
    #[serde(rename = "inherit-env", skip_serializing_if = "is_false")]
    pub inherit_environment: bool,
    /// Environment variables set for the command.
    #[serde(rename = "env", skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    /// Working directory for the command.
    #[serde(rename = "dir", skip_serializing_if = "String::is_empty")]
    pub working_directory: String,
    /// Maximum run time, as a duration literal.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    /// Number of retries after a failed attempt.
    #[serde(skip_serializing_if = "is_zero")]
    pub retries: u32,
    /// Pause between retries, as a duration literal.
    #[serde(rename = "interval", skip_serializing_if = "String::is_empty")]
    pub retry_interval: String,
    /// Names of the nodes the test runs on.
    #[serde(rename = "nodes", skip_serializing_if = "Vec::is_empty")]
    pub node_names: Vec<String>,
}

const fn is_false(value: &bool) -> bool {
    !*value
}

const fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn non_empty_or(local: &str, global: &str) -> String {
    let chosen = if local.is_empty() { global } else { local };
    chosen.to_owned()
}

fn unless_equal(own: &str, global: &str) -> String {
    if own == global {
        String::new()
    } else {
        own.to_owned()
    }
}

impl TestConfig {
    /// Returns `true` when every field is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Combine a `global` layer with a test's `local` layer.
    ///
    /// Environment maps are unioned with `local` winning on collisions. Every
    /// other field takes the local value when it is non-empty (or non-zero,
    /// or `true`) and falls back to the global value otherwise. The result
    /// owns fresh copies of both inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::TestConfig;
    ///
    /// let global = TestConfig {
    ///     environment: [("A".to_owned(), "1".to_owned())].into(),
    ///     retries: 3,
    ///     ..TestConfig::default()
    /// };
    /// let local = TestConfig {
    ///     environment: [("B".to_owned(), "2".to_owned())].into(),
    ///     ..TestConfig::default()
    /// };
    /// let effective = TestConfig::merge(&global, &local);
    /// assert_eq!(effective.environment.len(), 2);
    /// assert_eq!(effective.retries, 3);
    /// ```
    #[must_use]
    pub fn merge(global: &Self, local: &Self) -> Self {
        let mut environment = global.environment.clone();
        environment.extend(
            local
                .environment
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        Self {
            inherit_environment: local.inherit_environment || global.inherit_environment,
            environment,
            working_directory: non_empty_or(&local.working_directory, &global.working_directory),
            timeout: non_empty_or(&local.timeout, &global.timeout),
            retries: if local.retries == 0 {
                global.retries
            } else {
                local.retries
            },
            retry_interval: non_empty_or(&local.retry_interval, &global.retry_interval),
            node_names: if local.node_names.is_empty() {
                global.node_names.clone()
            } else {
                local.node_names.clone()
            },
        }
    }

    /// Reduce an effective configuration to the local layer that reproduces
    /// it over `global`.
    ///
    /// Fields equal to the global value are cleared. For any `self` returned
    /// by [`TestConfig::merge`] with the same `global`,
    /// `TestConfig::merge(global, &self.relative_to(global)) == *self`.
    #[must_use]
    pub fn relative_to(&self, global: &Self) -> Self {
        let environment = self
            .environment
            .iter()
            .filter(|(key, value)| global.environment.get(key.as_str()) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            inherit_environment: self.inherit_environment && !global.inherit_environment,
            environment,
            working_directory: unless_equal(&self.working_directory, &global.working_directory),
            timeout: unless_equal(&self.timeout, &global.timeout),
            retries: if self.retries == global.retries {
                0
            } else {
                self.retries
            },
            retry_interval: unless_equal(&self.retry_interval, &global.retry_interval),
            node_names: if self.node_names == global.node_names {
                Vec::new()
            } else {
                self.node_names.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests;
