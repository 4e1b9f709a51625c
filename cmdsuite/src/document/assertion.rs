//! Authored `stdout`/`stderr` assertion values.
//!
//! An assertion is written either as a bare string or as a mapping that
//! combines several checks. The shape is resolved once here, at the document
//! boundary; everything downstream works on [`crate::Expectation`].

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Keys accepted inside a structured assertion mapping.
pub const ASSERTION_KEYS: &[&str] = &[
    "contains",
    "exactly",
    "line-count",
    "lines",
    "json",
    "not-contains",
];

/// An assertion value as it appears in a suite document.
///
/// Decoding rejects every shape other than null, a string or a mapping, and
/// rejects mapping keys outside [`ASSERTION_KEYS`].
///
/// # Examples
///
/// ```
/// use cmdsuite::AuthoredAssertion;
///
/// let assertion: AuthoredAssertion = serde_saphyr::from_str("hello").expect("string decodes");
/// assert_eq!(assertion, AuthoredAssertion::Text("hello".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthoredAssertion {
    /// No assertion was written, or it was written as null.
    #[default]
    Absent,
    /// Shorthand: the output must contain this string.
    Text(String),
    /// A mapping of one or more assertion keys.
    Structured(AssertionFields),
}

impl AuthoredAssertion {
    /// Returns `true` for [`AuthoredAssertion::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// The recognised keys of a structured assertion, each optional.
///
/// Leaf values are kept as authored text; trimming happens during
/// normalisation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssertionFields {
    /// `contains`: substrings that must all appear, in authoring order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<String>>,
    /// `exactly`: the whole output must equal this text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exactly: Option<String>,
    /// `line-count`: the number of lines the output must have.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    /// `lines`: expected text keyed by line number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<BTreeMap<i64, String>>,
    /// `json`: expected values keyed by JSON field path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<BTreeMap<String, String>>,
    /// `not-contains`: substrings that must not appear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_contains: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for AuthoredAssertion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AssertionVisitor)
    }
}

struct AssertionVisitor;

impl<'de> Visitor<'de> for AssertionVisitor {
    type Value = AuthoredAssertion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a mapping of assertion keys")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(AuthoredAssertion::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(AuthoredAssertion::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AuthoredAssertion::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AuthoredAssertion::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        AuthoredAssertion::deserialize(deserializer)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = AssertionFields::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "contains" => {
                    let value = map.next_value::<Option<Vec<ScalarText>>>()?;
                    set_once(&mut fields.contains, "contains", value.map(texts))?;
                }
                "exactly" => {
                    let value = map.next_value::<Option<ScalarText>>()?;
                    set_once(&mut fields.exactly, "exactly", value.map(String::from))?;
                }
                "line-count" => {
                    let value = map.next_value::<Option<usize>>()?;
                    set_once(&mut fields.line_count, "line-count", value)?;
                }
                "lines" => {
                    let value = map.next_value::<Option<BTreeMap<i64, ScalarText>>>()?;
                    set_once(&mut fields.lines, "lines", value.map(text_values))?;
                }
                "json" => {
                    let value = map.next_value::<Option<BTreeMap<String, ScalarText>>>()?;
                    set_once(&mut fields.json, "json", value.map(text_values))?;
                }
                "not-contains" => {
                    let value = map.next_value::<Option<Vec<ScalarText>>>()?;
                    set_once(&mut fields.not_contains, "not-contains", value.map(texts))?;
                }
                other => return Err(de::Error::unknown_field(other, ASSERTION_KEYS)),
            }
        }
        Ok(AuthoredAssertion::Structured(fields))
    }
}

/// Store `value` in `slot`, rejecting a key that was already seen.
///
/// A null value leaves the slot untouched, matching an omitted key.
fn set_once<T, E: de::Error>(
    slot: &mut Option<T>,
    key: &'static str,
    value: Option<T>,
) -> Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(key));
    }
    *slot = value;
    Ok(())
}

fn texts(values: Vec<ScalarText>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

fn text_values<K: Ord>(values: BTreeMap<K, ScalarText>) -> BTreeMap<K, String> {
    values
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect()
}

/// Any YAML scalar, kept as its textual form.
///
/// Authors write `contains: [42]` or `exactly: true` as readily as quoted
/// strings; both compare against captured output as text.
struct ScalarText(String);

impl From<ScalarText> for String {
    fn from(value: ScalarText) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl Visitor<'_> for ScalarVisitor {
    type Value = ScalarText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ScalarText(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }
}
