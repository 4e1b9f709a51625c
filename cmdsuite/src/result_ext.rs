//! Extensions for mapping codec errors to `SuiteResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(SuiteError::…(e)))`
//! patterns when converting decoder and encoder failures into the crate's
//! `SuiteResult<T>` alias (`Result<T, Arc<SuiteError>>`).
//!
//! # Examples
//!
//! ```
//! use cmdsuite::{SuiteResult, SuiteResultExt};
//!
//! fn parse_retries(raw: &str) -> SuiteResult<u32> {
//!     raw.parse::<u32>().into_schema()
//! }
//!
//! assert!(parse_retries("three").is_err());
//! ```

use std::error::Error;
use std::sync::Arc;

use crate::{SuiteError, SuiteResult};

/// Extension for mapping any `Result<T, E>` whose error can be boxed into an
/// `SuiteResult<T>`.
pub trait SuiteResultExt<T> {
    /// Convert the error into a [`SuiteError::Schema`].
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in `Arc<SuiteError>`.
    fn into_schema(self) -> SuiteResult<T>;

    /// Convert the error into a [`SuiteError::Render`].
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in `Arc<SuiteError>`.
    fn into_render(self) -> SuiteResult<T>;
}

impl<T, E> SuiteResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn into_schema(self) -> SuiteResult<T> {
        self.map_err(|e| Arc::new(SuiteError::schema(e)))
    }

    fn into_render(self) -> SuiteResult<T> {
        self.map_err(|e| Arc::new(SuiteError::render(e)))
    }
}
