//! Error types produced while loading and rendering suite documents.

mod constructors;
mod types;

pub use types::SuiteError;
