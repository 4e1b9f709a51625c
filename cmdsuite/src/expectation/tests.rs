//! Normalisation and compact rendering of output assertions.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use std::collections::BTreeMap;

use super::Expectation;
use crate::{AssertionFields, AuthoredAssertion};

fn normalise(yaml: &str) -> Result<Expectation> {
    Expectation::from_yaml(yaml).map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn bare_string_becomes_single_contains() -> Result<()> {
    let expectation = normalise("exit 0")?;
    ensure!(
        expectation
            == Expectation {
                contains: vec!["exit 0".into()],
                ..Expectation::default()
            },
        "unexpected expectation: {expectation:?}"
    );
    ensure!(
        expectation.to_authored() == AuthoredAssertion::Text("exit 0".into()),
        "single contains should collapse to a string"
    );
    Ok(())
}

#[rstest]
#[case::null("~")]
#[case::explicit_null("null")]
#[case::empty_mapping("{}")]
fn absent_values_normalise_to_empty(#[case] yaml: &str) -> Result<()> {
    let expectation = normalise(yaml)?;
    ensure!(expectation.is_empty(), "expected empty, got {expectation:?}");
    ensure!(expectation.to_authored().is_absent(), "empty renders as absent");
    Ok(())
}

#[rstest]
fn block_scalar_trailing_newline_is_trimmed() -> Result<()> {
    let expectation = normalise("|\n  hello\n  world\n")?;
    ensure!(
        expectation.contains == vec!["hello\nworld".to_owned()],
        "unexpected contains: {:?}",
        expectation.contains
    );
    Ok(())
}

#[rstest]
fn every_recognised_key_is_populated() -> Result<()> {
    let expectation = normalise(
        "contains: [a, 42]\n\
         exactly: \"all of it\\n\"\n\
         line-count: 3\n\
         lines:\n  1: first\n  3: last\n\
         json:\n  object.attr: hello\n\
         not-contains: [error]\n",
    )?;
    let expected = Expectation {
        contains: vec!["a".into(), "42".into()],
        exactly: "all of it".into(),
        line_count: 3,
        lines: BTreeMap::from([(1, "first".into()), (3, "last".into())]),
        not_contains: vec!["error".into()],
        json: BTreeMap::from([("object.attr".into(), "hello".into())]),
    };
    ensure!(expectation == expected, "got {expectation:?}");
    Ok(())
}

#[rstest]
fn line_keys_are_kept_verbatim() -> Result<()> {
    let expectation = normalise("lines: {0: zero, -1: last}")?;
    ensure!(
        expectation.lines.keys().copied().collect::<Vec<_>>() == vec![-1, 0],
        "unexpected keys: {:?}",
        expectation.lines
    );
    Ok(())
}

#[rstest]
fn multi_field_assertion_stays_structured() -> Result<()> {
    let expectation = normalise("{contains: [a, b], not-contains: [c]}")?;
    ensure!(expectation.contains == vec!["a".to_owned(), "b".to_owned()]);
    ensure!(expectation.not_contains == vec!["c".to_owned()]);
    let authored = expectation.to_authored();
    ensure!(
        authored
            == AuthoredAssertion::Structured(AssertionFields {
                contains: Some(vec!["a".into(), "b".into()]),
                not_contains: Some(vec!["c".into()]),
                ..AssertionFields::default()
            }),
        "unexpected rendering: {authored:?}"
    );
    Ok(())
}

#[rstest]
#[case::unknown_only("{foo: 1}", "foo")]
#[case::unknown_beside_valid("{contains: [a], foo: 1}", "foo")]
#[case::xml_is_not_supported("{xml: {a: b}}", "xml")]
fn unknown_keys_are_rejected(#[case] yaml: &str, #[case] key: &str) -> Result<()> {
    let err = Expectation::from_yaml(yaml).expect_err("unknown key must fail");
    ensure!(err.is_schema(), "expected schema error, got {err:?}");
    ensure!(
        err.to_string().contains(key),
        "error should name `{key}`: {err}"
    );
    Ok(())
}

#[rstest]
#[case::integer("42")]
#[case::boolean("true")]
#[case::list("[a, b]")]
#[case::negative_line_count("line-count: -1")]
fn unmapped_shapes_are_rejected(#[case] yaml: &str) {
    let err = Expectation::from_yaml(yaml).expect_err("shape has no mapping");
    assert!(err.is_schema(), "expected schema error, got {err:?}");
}

#[rstest]
#[case::single_empty_string("\"\"")]
#[case::contains_empty_string("contains: [\"\"]")]
fn vacuous_contains_collapses_to_empty(#[case] yaml: &str) -> Result<()> {
    let expectation = normalise(yaml)?;
    ensure!(expectation.is_empty(), "got {expectation:?}");
    Ok(())
}

#[rstest]
fn empty_contains_entry_survives_beside_other_checks() -> Result<()> {
    let expectation = normalise("{contains: [\"\"], exactly: out}")?;
    ensure!(expectation.contains == vec![String::new()]);
    ensure!(Expectation::normalize(expectation.to_authored()) == expectation);
    Ok(())
}

#[rstest]
#[case::absent("~")]
#[case::text("hello")]
#[case::text_with_newline("\"hello\\n\"")]
#[case::single_contains_list("contains: [only]")]
#[case::two_contains("contains: [a, b]")]
#[case::exactly("exactly: out")]
#[case::line_count("line-count: 2")]
#[case::lines("lines: {2: b, 1: a}")]
#[case::json("json: {a.b: c}")]
#[case::not_contains("not-contains: [x, y]")]
#[case::contains_and_json("{contains: [a], json: {k: v}}")]
#[case::empty_contains_and_not_contains("{contains: [\"\"], not-contains: [c]}")]
fn normalise_after_render_is_identity(#[case] yaml: &str) -> Result<()> {
    let expectation = normalise(yaml)?;
    let again = Expectation::normalize(expectation.to_authored());
    ensure!(again == expectation, "{yaml}: {again:?} != {expectation:?}");
    Ok(())
}
