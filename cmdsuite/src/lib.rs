//! Declarative test-suite definitions for command-line tools.
//!
//! A suite document names test cases (a command, its expected exit code and
//! assertions on standard output and standard error), an optional global
//! configuration, and a registry of execution nodes. The authoring format is
//! deliberately permissive: an assertion may be a bare string or a mapping of
//! several checks, and per-test configuration overrides the global layer
//! field by field.
//!
//! This crate turns such a document into one canonical [`Suite`] and renders
//! a [`Suite`] back into the most compact equivalent document. It does not
//! run anything.
//!
//! ```rust
//! use cmdsuite::{Suite, load_suite};
//!
//! let suite = load_suite(
//!     "config:\n  env:\n    LANG: C\n  retries: 2\n\
//!      tests:\n  echo hello:\n    exit-code: 0\n    stdout: hello\n    config:\n      env:\n        DEBUG: \"1\"\n",
//! )?;
//! let test = &suite.tests()[0];
//! assert_eq!(test.command, "echo hello");
//! assert_eq!(test.effective_config.environment.len(), 2);
//! assert_eq!(test.effective_config.retries, 2);
//!
//! let rendered = suite.to_yaml()?;
//! assert_eq!(Suite::from_yaml(&rendered)?, suite);
//! # Ok::<_, std::sync::Arc<cmdsuite::SuiteError>>(())
//! ```

mod config;
pub mod document;
mod error;
mod expectation;
mod node;
mod result_ext;
mod suite;

use std::sync::Arc;

pub use config::TestConfig;
pub use document::{
    ASSERTION_KEYS, AssertionFields, AuthoredAssertion, NodeEntry, SuiteDocument, TestEntries,
    TestEntry,
};
pub use error::SuiteError;
pub use expectation::Expectation;
pub use node::{Node, NodeKind};
pub use result_ext::SuiteResultExt;
pub use suite::{Suite, SuiteLoader, TestCase, load_suite, render_suite};

/// Result type used throughout the crate.
pub type SuiteResult<T> = Result<T, Arc<SuiteError>>;
