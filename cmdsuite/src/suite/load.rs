//! Loading entrypoints: document text to canonical suite.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::document::codec;
use crate::{Expectation, Node, SuiteDocument, SuiteResult, TestConfig, TestEntry};

use super::{Suite, TestCase};

/// Options for decoding suite documents.
///
/// # Examples
///
/// ```
/// use cmdsuite::SuiteLoader;
///
/// let loader = SuiteLoader::new().strict_booleans(false);
/// let suite = loader.load("config:\n  inherit-env: yes\ntests: {}\n")?;
/// assert!(suite.config().inherit_environment);
/// # Ok::<_, std::sync::Arc<cmdsuite::SuiteError>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteLoader {
    strict_booleans: bool,
}

impl Default for SuiteLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteLoader {
    /// A loader with YAML 1.2 booleans: only `true` and `false`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_booleans: true,
        }
    }

    /// Toggle YAML 1.2 booleans. When disabled, YAML 1.1 spellings such as
    /// `yes` and `off` are accepted for boolean fields.
    #[must_use]
    pub const fn strict_booleans(mut self, enabled: bool) -> Self {
        self.strict_booleans = enabled;
        self
    }

    /// Decode `contents` into the authored document without normalising it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SuiteError::Schema`] when the text is not valid YAML,
    /// contains unknown keys, or holds values of the wrong shape.
    pub fn decode(&self, contents: &str) -> SuiteResult<SuiteDocument> {
        let document: SuiteDocument = codec::decode(contents, self.strict_booleans)?;
        debug!(
            tests = document.tests.len(),
            nodes = document.nodes.len(),
            "decoded suite document"
        );
        Ok(document)
    }

    /// Decode and normalise `contents` into a [`Suite`].
    ///
    /// Nothing is returned unless the whole document is valid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SuiteError::Schema`] on any schema violation.
    pub fn load(&self, contents: &str) -> SuiteResult<Suite> {
        self.decode(contents).map(Suite::from_document)
    }
}

/// Parse and normalise a suite with the default [`SuiteLoader`].
///
/// # Errors
///
/// Returns [`crate::SuiteError::Schema`] on any schema violation.
pub fn load_suite(contents: &str) -> SuiteResult<Suite> {
    SuiteLoader::default().load(contents)
}

impl TestCase {
    /// Build a test case from its authored entry, merging `global` beneath
    /// the entry's own configuration.
    #[must_use]
    pub fn from_entry(title: impl Into<String>, entry: TestEntry, global: &TestConfig) -> Self {
        let title = title.into();
        let command = if entry.command.is_empty() {
            title.clone()
        } else {
            entry.command
        };
        let effective_config = TestConfig::merge(global, &entry.config);

        Self {
            node_names: effective_config.node_names.clone(),
            title,
            command,
            expected_exit_code: entry.exit_code,
            expected_stdout: Expectation::normalize(entry.stdout),
            expected_stderr: Expectation::normalize(entry.stderr),
            effective_config,
        }
    }
}

impl Suite {
    /// Normalise a decoded document.
    #[must_use]
    pub fn from_document(document: SuiteDocument) -> Self {
        let SuiteDocument {
            tests,
            config,
            nodes,
        } = document;

        let nodes: BTreeMap<String, Node> = nodes
            .into_iter()
            .map(|(name, entry)| (name.clone(), Node::from_entry(name, entry)))
            .collect();

        let tests: Vec<TestCase> = tests
            .into_iter()
            .map(|(title, entry)| {
                let test = TestCase::from_entry(title, entry, &config);
                trace!(title = %test.title, command = %test.command, "normalised test");
                test
            })
            .collect();

        for test in &tests {
            for name in test.node_names.iter().filter(|name| !nodes.contains_key(*name)) {
                warn!(test = %test.title, node = %name, "test references an undeclared node");
            }
        }

        Self {
            tests,
            config,
            nodes,
        }
    }
}
