//! Authored suite document types.
//!
//! These types mirror the YAML layout one-to-one and reject unknown keys at
//! every level. They are the only place that knows about shorthand shapes;
//! [`crate::Suite`] is built from a decoded [`SuiteDocument`] and rendered
//! back into one.

mod assertion;
pub(crate) mod codec;
mod entries;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{NodeKind, TestConfig};

pub use assertion::{ASSERTION_KEYS, AssertionFields, AuthoredAssertion};
pub use entries::TestEntries;

/// Top-level suite document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteDocument {
    /// Test definitions keyed by title.
    #[serde(default, skip_serializing_if = "TestEntries::is_empty")]
    pub tests: TestEntries,
    /// Global configuration applied to every test.
    #[serde(default, skip_serializing_if = "TestConfig::is_empty")]
    pub config: TestConfig,
    /// Execution targets keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nodes: BTreeMap<String, NodeEntry>,
}

/// One authored test definition. The title is the mapping key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TestEntry {
    /// Command to run; the title is used when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    /// Expected exit code; 0 when omitted.
    #[serde(default)]
    pub exit_code: i32,
    /// Assertion on standard output.
    #[serde(default, skip_serializing_if = "AuthoredAssertion::is_absent")]
    pub stdout: AuthoredAssertion,
    /// Assertion on standard error.
    #[serde(default, skip_serializing_if = "AuthoredAssertion::is_absent")]
    pub stderr: AuthoredAssertion,
    /// Per-test configuration layered over the global one.
    #[serde(default, skip_serializing_if = "TestConfig::is_empty")]
    pub config: TestConfig,
}

/// One authored execution target. The name is the mapping key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NodeEntry {
    /// Target kind: `local`, `ssh` or `docker`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Login user.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// Login password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pass: String,
    /// Host address, usually `host:port`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub addr: String,
    /// Container image.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Path to an SSH private key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identity_file: String,
}
