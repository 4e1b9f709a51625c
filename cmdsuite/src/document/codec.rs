//! YAML text boundary backed by `serde-saphyr`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_saphyr::Options;

use crate::{SuiteResult, SuiteResultExt};

/// Decode YAML `contents` into `T`, reporting failures as schema errors.
///
/// With `strict_booleans` only `true` and `false` are booleans, so `yes`
/// and `on` stay strings as in YAML 1.2.
pub(crate) fn decode<T: DeserializeOwned>(contents: &str, strict_booleans: bool) -> SuiteResult<T> {
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans,
            ..Options::default()
        },
    )
    .into_schema()
}

/// Encode `value` as YAML text.
pub(crate) fn encode<T: Serialize>(value: &T) -> SuiteResult<String> {
    serde_saphyr::to_string(value).into_render()
}
