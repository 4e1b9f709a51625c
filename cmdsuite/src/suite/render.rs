//! Rendering a canonical suite back into compact document form.
//!
//! The output is behaviourally equivalent to the loaded document, not a
//! byte-for-byte copy: comments and key order are lost, commands equal to
//! their title are omitted, and each test's configuration is written relative
//! to the global layer.

use crate::document::codec;
use crate::{SuiteDocument, SuiteResult, TestConfig, TestEntries, TestEntry};

use super::{Suite, TestCase};

impl TestCase {
    /// Render the authored entry for this test, omitting anything `global`
    /// already supplies.
    #[must_use]
    pub fn to_entry(&self, global: &TestConfig) -> TestEntry {
        TestEntry {
            command: if self.command == self.title {
                String::new()
            } else {
                self.command.clone()
            },
            exit_code: self.expected_exit_code,
            stdout: self.expected_stdout.to_authored(),
            stderr: self.expected_stderr.to_authored(),
            config: self.effective_config.relative_to(global),
        }
    }
}

impl Suite {
    /// Render the authored document for this suite.
    #[must_use]
    pub fn to_document(&self) -> SuiteDocument {
        let mut tests = TestEntries::new();
        for test in &self.tests {
            tests.push(test.title.clone(), test.to_entry(&self.config));
        }

        SuiteDocument {
            tests,
            config: self.config.clone(),
            nodes: self
                .nodes
                .iter()
                .map(|(name, node)| (name.clone(), node.to_entry()))
                .collect(),
        }
    }

    /// Render this suite as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SuiteError::Render`] if the YAML writer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::Suite;
    ///
    /// let suite = Suite::from_yaml("tests:\n  echo hi:\n    exit-code: 0\n    stdout:\n      contains: [hi]\n")?;
    /// let rendered = suite.to_yaml()?;
    /// assert_eq!(Suite::from_yaml(&rendered)?, suite);
    /// # Ok::<_, std::sync::Arc<cmdsuite::SuiteError>>(())
    /// ```
    pub fn to_yaml(&self) -> SuiteResult<String> {
        codec::encode(&self.to_document())
    }
}

/// Render `suite` as YAML text.
///
/// # Errors
///
/// Returns [`crate::SuiteError::Render`] if the YAML writer fails.
pub fn render_suite(suite: &Suite) -> SuiteResult<String> {
    suite.to_yaml()
}
