//! Canonical output expectations.
//!
//! [`Expectation::normalize`] turns any authored assertion shape into one
//! record, and [`Expectation::to_authored`] renders a record back into the
//! most compact shape that normalises to the same value.

use std::collections::BTreeMap;

use crate::document::codec;
use crate::{AssertionFields, AuthoredAssertion, SuiteResult};

/// Canonical assertion on one output stream.
///
/// Empty collections, an empty `exactly` and a zero `line_count` mean the
/// check is not requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Substrings the output must contain, in authoring order.
    pub contains: Vec<String>,
    /// Text the whole output must equal.
    pub exactly: String,
    /// Number of lines the output must have.
    pub line_count: usize,
    /// Expected text per line number; keys are kept exactly as written.
    pub lines: BTreeMap<i64, String>,
    /// Substrings the output must not contain.
    pub not_contains: Vec<String>,
    /// Expected values per JSON field path.
    pub json: BTreeMap<String, String>,
}

/// Strip leading and trailing newlines, as block scalars usually carry one.
fn trim_newlines(text: &str) -> String {
    text.trim_matches('\n').to_owned()
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|value| trim_newlines(&value)).collect()
}

fn trim_values<K: Ord>(values: BTreeMap<K, String>) -> BTreeMap<K, String> {
    values
        .into_iter()
        .map(|(key, value)| (key, trim_newlines(&value)))
        .collect()
}

impl Expectation {
    /// Normalise an authored assertion.
    ///
    /// A bare string becomes a single `contains` entry. A mapping fills the
    /// fields it names. An expectation whose only content is an empty
    /// `contains` substring matches every output, so it collapses to the
    /// empty expectation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::{AuthoredAssertion, Expectation};
    ///
    /// let expectation = Expectation::normalize(AuthoredAssertion::Text("exit 0\n".into()));
    /// assert_eq!(expectation.contains, vec!["exit 0"]);
    /// assert!(expectation.exactly.is_empty());
    /// ```
    #[must_use]
    pub fn normalize(authored: AuthoredAssertion) -> Self {
        let expectation = match authored {
            AuthoredAssertion::Absent => Self::default(),
            AuthoredAssertion::Text(text) => Self {
                contains: vec![trim_newlines(&text)],
                ..Self::default()
            },
            AuthoredAssertion::Structured(fields) => Self::from_fields(fields),
        };
        if expectation.is_vacuous() {
            Self::default()
        } else {
            expectation
        }
    }

    fn from_fields(fields: AssertionFields) -> Self {
        Self {
            contains: fields.contains.map(trim_all).unwrap_or_default(),
            exactly: fields
                .exactly
                .map(|text| trim_newlines(&text))
                .unwrap_or_default(),
            line_count: fields.line_count.unwrap_or_default(),
            lines: fields.lines.map(trim_values).unwrap_or_default(),
            not_contains: fields.not_contains.map(trim_all).unwrap_or_default(),
            json: fields.json.map(trim_values).unwrap_or_default(),
        }
    }

    /// Decode a standalone assertion value from YAML and normalise it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SuiteError::Schema`] when the value is not a string,
    /// null or assertion mapping, or when a mapping holds an unknown key.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdsuite::Expectation;
    ///
    /// let expectation = Expectation::from_yaml("{contains: [a, b], not-contains: [c]}")?;
    /// assert_eq!(expectation.contains, vec!["a", "b"]);
    /// assert!(Expectation::from_yaml("{foo: 1}").is_err());
    /// # Ok::<_, std::sync::Arc<cmdsuite::SuiteError>>(())
    /// ```
    pub fn from_yaml(contents: &str) -> SuiteResult<Self> {
        codec::decode::<AuthoredAssertion>(contents, true).map(Self::normalize)
    }

    /// Returns `true` when no check is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// `true` when every field other than `contains` is unset.
    fn only_contains(&self) -> bool {
        self.exactly.is_empty()
            && self.line_count == 0
            && self.lines.is_empty()
            && self.not_contains.is_empty()
            && self.json.is_empty()
    }

    fn is_vacuous(&self) -> bool {
        self.only_contains() && matches!(self.contains.as_slice(), [only] if only.is_empty())
    }

    /// Render the most compact authored form.
    ///
    /// A lone non-empty `contains` entry becomes a bare string, an empty or
    /// vacuous expectation becomes [`AuthoredAssertion::Absent`], and
    /// anything else becomes a mapping holding only the requested checks.
    ///
    /// [`Expectation::normalize`] applied to the result yields `self` again
    /// for every expectation it produced.
    #[must_use]
    pub fn to_authored(&self) -> AuthoredAssertion {
        if self.only_contains() {
            match self.contains.as_slice() {
                [] => return AuthoredAssertion::Absent,
                [only] if only.is_empty() => return AuthoredAssertion::Absent,
                [only] => return AuthoredAssertion::Text(only.clone()),
                _ => {}
            }
        }

        AuthoredAssertion::Structured(AssertionFields {
            contains: (!self.contains.is_empty()).then(|| self.contains.clone()),
            exactly: (!self.exactly.is_empty()).then(|| self.exactly.clone()),
            line_count: (self.line_count != 0).then_some(self.line_count),
            lines: (!self.lines.is_empty()).then(|| self.lines.clone()),
            json: (!self.json.is_empty()).then(|| self.json.clone()),
            not_contains: (!self.not_contains.is_empty()).then(|| self.not_contains.clone()),
        })
    }
}

#[cfg(test)]
mod tests;
