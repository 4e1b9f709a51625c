//! Precedence rules for merging global and per-test configuration.

use rstest::{fixture, rstest};
use std::collections::BTreeMap;

use super::TestConfig;

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

#[fixture]
fn global() -> TestConfig {
    TestConfig {
        inherit_environment: true,
        environment: env(&[("A", "1"), ("SHARED", "global")]),
        working_directory: "/srv".into(),
        timeout: "10s".into(),
        retries: 3,
        retry_interval: "1s".into(),
        node_names: vec!["local".into()],
    }
}

#[rstest]
fn empty_local_inherits_everything(global: TestConfig) {
    let merged = TestConfig::merge(&global, &TestConfig::default());
    assert_eq!(merged, global);
}

#[rstest]
fn local_values_override_global(global: TestConfig) {
    let local = TestConfig {
        environment: env(&[("B", "2"), ("SHARED", "local")]),
        working_directory: "/tmp".into(),
        timeout: "2s".into(),
        retries: 5,
        retry_interval: "250ms".into(),
        node_names: vec!["web".into(), "db".into()],
        ..TestConfig::default()
    };
    let merged = TestConfig::merge(&global, &local);
    assert_eq!(
        merged.environment,
        env(&[("A", "1"), ("B", "2"), ("SHARED", "local")])
    );
    assert_eq!(merged.working_directory, "/tmp");
    assert_eq!(merged.timeout, "2s");
    assert_eq!(merged.retries, 5);
    assert_eq!(merged.retry_interval, "250ms");
    assert_eq!(merged.node_names, vec!["web", "db"]);
    assert!(merged.inherit_environment);
}

#[rstest]
fn explicit_zero_retries_reads_as_unset() {
    let global = TestConfig {
        environment: env(&[("A", "1")]),
        retries: 3,
        ..TestConfig::default()
    };
    let local = TestConfig {
        environment: env(&[("B", "2")]),
        retries: 0,
        ..TestConfig::default()
    };
    let merged = TestConfig::merge(&global, &local);
    assert_eq!(merged.environment, env(&[("A", "1"), ("B", "2")]));
    assert_eq!(merged.retries, 3);
}

#[rstest]
#[case(false, false, false)]
#[case(false, true, true)]
#[case(true, false, true)]
#[case(true, true, true)]
fn inherit_environment_cannot_be_disabled_locally(
    #[case] global_flag: bool,
    #[case] local_flag: bool,
    #[case] expected: bool,
) {
    let global = TestConfig {
        inherit_environment: global_flag,
        ..TestConfig::default()
    };
    let local = TestConfig {
        inherit_environment: local_flag,
        ..TestConfig::default()
    };
    assert_eq!(
        TestConfig::merge(&global, &local).inherit_environment,
        expected
    );
}

#[rstest]
fn merge_leaves_inputs_untouched(global: TestConfig) {
    let local = TestConfig {
        environment: env(&[("SHARED", "local")]),
        ..TestConfig::default()
    };
    let before = global.clone();
    let merged = TestConfig::merge(&global, &local);
    assert_eq!(global, before);
    assert_eq!(local.environment, env(&[("SHARED", "local")]));
    assert_eq!(merged.environment.get("SHARED").map(String::as_str), Some("local"));
}

#[rstest]
#[case::nothing_overridden(TestConfig::default())]
#[case::environment_only(TestConfig {
    environment: env(&[("SHARED", "local"), ("B", "2")]),
    ..TestConfig::default()
})]
#[case::scalars(TestConfig {
    working_directory: "/tmp".into(),
    retries: 1,
    timeout: "1m".into(),
    ..TestConfig::default()
})]
#[case::nodes(TestConfig {
    node_names: vec!["docker".into()],
    ..TestConfig::default()
})]
fn relative_to_reproduces_the_effective_layer(global: TestConfig, #[case] local: TestConfig) {
    let effective = TestConfig::merge(&global, &local);
    let reduced = effective.relative_to(&global);
    assert_eq!(TestConfig::merge(&global, &reduced), effective);
}

#[rstest]
fn relative_to_drops_values_shared_with_global(global: TestConfig) {
    let local = TestConfig {
        environment: env(&[("A", "1"), ("B", "2")]),
        timeout: "10s".into(),
        ..TestConfig::default()
    };
    let reduced = TestConfig::merge(&global, &local).relative_to(&global);
    assert_eq!(
        reduced,
        TestConfig {
            environment: env(&[("B", "2")]),
            ..TestConfig::default()
        }
    );
}

#[rstest]
fn is_empty_detects_default_layer() {
    assert!(TestConfig::default().is_empty());
    let layer = TestConfig {
        retries: 1,
        ..TestConfig::default()
    };
    assert!(!layer.is_empty());
}
