//! Constructors and classification helpers for `SuiteError`.

use std::error::Error;
use std::sync::Arc;

use super::SuiteError;

impl SuiteError {
    /// Construct a schema error from any decoder failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::SuiteError;
    /// let err = SuiteError::schema("unknown field `foo`");
    /// assert!(err.is_schema());
    /// ```
    #[must_use]
    pub fn schema(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Schema {
            source: source.into(),
        }
    }

    /// Construct a render error from any encoder failure.
    #[must_use]
    pub fn render(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Render {
            source: source.into(),
        }
    }

    /// Construct a schema error wrapped in an [`Arc`].
    ///
    /// Loader entrypoints return `Arc<SuiteError>`; this avoids spelling out
    /// the wrapping at each call site.
    #[must_use]
    pub fn schema_arc(source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::schema(source))
    }

    /// Returns `true` when the error describes a schema violation.
    #[must_use]
    pub const fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}
