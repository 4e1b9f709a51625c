//! Canonical suite model.
//!
//! A [`Suite`] is built once from a document by [`SuiteLoader`] and is
//! read-only afterwards. Every [`TestCase`] already carries its effective
//! command, normalised expectations and merged configuration, so consumers
//! never look at the authored shorthand.

mod load;
mod render;

use std::collections::BTreeMap;

use crate::{Expectation, Node, TestConfig};

pub use load::{SuiteLoader, load_suite};
pub use render::render_suite;

/// One named command with its expected outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCase {
    /// Unique title the test was declared under.
    pub title: String,
    /// Command to run; the title when none was written.
    pub command: String,
    /// Expected exit code.
    pub expected_exit_code: i32,
    /// Assertion on standard output.
    pub expected_stdout: Expectation,
    /// Assertion on standard error.
    pub expected_stderr: Expectation,
    /// Global configuration merged with the test's own.
    pub effective_config: TestConfig,
    /// Nodes to run on, in the order written.
    pub node_names: Vec<String>,
}

/// A loaded test suite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suite {
    tests: Vec<TestCase>,
    config: TestConfig,
    nodes: BTreeMap<String, Node>,
}

impl Suite {
    /// Parse and normalise a suite from YAML text with default options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SuiteError::Schema`] when the document does not match
    /// the suite schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::Suite;
    ///
    /// let suite = Suite::from_yaml("tests:\n  echo hello:\n    exit-code: 0\n    stdout: hello\n")?;
    /// let test = suite.test("echo hello").expect("test is loaded");
    /// assert_eq!(test.command, "echo hello");
    /// assert_eq!(test.expected_stdout.contains, vec!["hello"]);
    /// # Ok::<_, std::sync::Arc<cmdsuite::SuiteError>>(())
    /// ```
    pub fn from_yaml(contents: &str) -> crate::SuiteResult<Self> {
        SuiteLoader::default().load(contents)
    }

    /// Test cases in document order.
    #[must_use]
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Look up a test case by title.
    #[must_use]
    pub fn test(&self, title: &str) -> Option<&TestCase> {
        self.tests.iter().find(|test| test.title == title)
    }

    /// The global configuration layer.
    #[must_use]
    pub const fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Registered nodes, ordered by name.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Look up a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Resolve the nodes `test` runs on, skipping names that are not
    /// registered.
    pub fn nodes_for<'a>(&'a self, test: &'a TestCase) -> impl Iterator<Item = &'a Node> {
        test.node_names
            .iter()
            .filter_map(|name| self.nodes.get(name.as_str()))
    }
}
