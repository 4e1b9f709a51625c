//! Primary error enum for suite loading flows.

use std::error::Error;

use thiserror::Error;

/// Errors that can occur while loading or rendering a suite document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SuiteError {
    /// The document does not match the suite schema.
    ///
    /// Raised for unparseable text, unknown keys at any level (including
    /// assertion objects) and assertion values with no defined mapping.
    #[error("invalid suite document: {source}")]
    Schema {
        /// Underlying decoder error, naming the offending key or value.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The YAML writer rejected a rendered document.
    #[error("failed to render suite document: {source}")]
    Render {
        /// Underlying encoder error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}
