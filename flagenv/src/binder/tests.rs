//! Unit tests for [`EnvBinder`] against in-memory environments.

use std::collections::HashMap;

use anyhow::{Result as TestResult, anyhow, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::FlagSet;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn string_flags(names: &[&str]) -> TestResult<FlagSet> {
    let mut flags = FlagSet::new("prog");
    for name in names {
        flags.string(*name, "", "")?;
    }
    Ok(flags)
}

fn string_value(flags: &FlagSet, name: &str) -> Option<String> {
    flags.get::<String>(name).cloned()
}

#[fixture]
fn binder() -> EnvBinder {
    EnvBinder::new()
}

#[rstest]
fn populates_flags_from_normalized_names(binder: EnvBinder) -> TestResult<()> {
    let mut flags = string_flags(&["foo", "foo_bar", "foo.bar", "foo-bar"])?;
    let vars = env(&[("foo", "bar"), ("foo_bar", "barfoo")]);
    let report = binder.bind_from(&mut flags, &vars)?;
    ensure!(string_value(&flags, "foo").as_deref() == Some("bar"), "foo");
    for name in ["foo_bar", "foo.bar", "foo-bar"] {
        ensure!(
            string_value(&flags, name).as_deref() == Some("barfoo"),
            "{name} not populated"
        );
        ensure!(
            report.variable_for(name) == Some("foo_bar"),
            "{name} bound from the wrong variable"
        );
    }
    ensure!(report.len() == 4, "expected four bound flags");
    Ok(())
}

#[rstest]
fn explicit_flags_keep_their_values(binder: EnvBinder) -> TestResult<()> {
    let mut flags = string_flags(&["foo"])?;
    flags.set("foo", "from-cli")?;
    let report = binder.bind_from(&mut flags, &env(&[("foo", "from-env")]))?;
    ensure!(
        string_value(&flags, "foo").as_deref() == Some("from-cli"),
        "command line must win"
    );
    ensure!(report.is_empty(), "explicit flag must not be reported");
    Ok(())
}

#[rstest]
fn empty_values_count_as_unset(binder: EnvBinder) -> TestResult<()> {
    let mut flags = FlagSet::new("prog");
    flags.string("foo", "default", "")?;
    let report = binder.bind_from(&mut flags, &env(&[("foo", "")]))?;
    ensure!(
        string_value(&flags, "foo").as_deref() == Some("default"),
        "empty value must be ignored"
    );
    ensure!(!report.contains("foo"), "empty value must not bind");
    Ok(())
}

#[rstest]
fn uppercase_mode_reads_uppercase_names() -> TestResult<()> {
    let binder = EnvBinder::with_policy(NamePolicy::new().with_uppercase(true));
    let mut flags = string_flags(&["foobar"])?;
    binder.bind_from(&mut flags, &env(&[("foobar", "lower"), ("FOOBAR", "upper")]))?;
    ensure!(
        string_value(&flags, "foobar").as_deref() == Some("upper"),
        "uppercase variable should win"
    );
    Ok(())
}

#[rstest]
fn prefix_is_applied_before_uppercasing(binder: EnvBinder) -> TestResult<()> {
    binder.set_prefix("app_");
    binder.set_uppercase(true);
    let mut flags = string_flags(&["http.port"])?;
    binder.bind_from(&mut flags, &env(&[("APP_HTTP_PORT", "9000")]))?;
    ensure!(
        string_value(&flags, "http.port").as_deref() == Some("9000"),
        "prefixed variable not used"
    );
    Ok(())
}

#[rstest]
#[case(&[("A", "a"), ("x", "default"), ("B", "b")], "a")]
#[case(&[("x", "default"), ("B", "b")], "default")]
#[case(&[("B", "b")], "b")]
#[case(&[("A", ""), ("B", "b")], "b")]
fn overrides_are_tried_in_order(
    binder: EnvBinder,
    #[case] vars: &[(&str, &str)],
    #[case] expected: &str,
) -> TestResult<()> {
    binder.register_names("x", ["A", "", "B"]);
    let mut flags = string_flags(&["x"])?;
    binder.bind_from(&mut flags, &env(vars))?;
    ensure!(
        string_value(&flags, "x").as_deref() == Some(expected),
        "expected {expected}, got {:?}",
        string_value(&flags, "x")
    );
    Ok(())
}

#[rstest]
fn overrides_ignore_prefix_and_case(binder: EnvBinder) -> TestResult<()> {
    binder.set_prefix("app_");
    binder.set_uppercase(true);
    binder.register_names("x", ["custom_name", ""]);
    ensure!(
        binder.names_for("x") == vec!["custom_name".to_owned(), "APP_X".to_owned()],
        "unexpected candidates {:?}",
        binder.names_for("x")
    );
    Ok(())
}

#[rstest]
fn registering_no_names_clears_the_override(binder: EnvBinder) -> TestResult<()> {
    binder.register_names("x", ["A"]);
    ensure!(binder.overrides_for("x").is_some(), "override not stored");
    binder.register_names("x", Vec::<String>::new());
    ensure!(binder.overrides_for("x").is_none(), "override not cleared");

    let mut flags = string_flags(&["x"])?;
    binder.bind_from(&mut flags, &env(&[("A", "a"), ("x", "plain")]))?;
    ensure!(
        string_value(&flags, "x").as_deref() == Some("plain"),
        "cleared override must fall back to the generated name"
    );
    Ok(())
}

#[rstest]
fn setter_failure_names_flag_and_keeps_value(binder: EnvBinder) -> TestResult<()> {
    let mut flags = FlagSet::new("prog");
    flags.string("foo", "", "")?.int("foo_int", 7, "")?;
    let vars = env(&[("foo", "bar"), ("foo_int", "notanumber")]);
    let err = binder
        .bind_from(&mut flags, &vars)
        .err()
        .ok_or_else(|| anyhow!("bind should fail on foo_int"))?;
    match &err {
        FlagEnvError::SetterRejected {
            flag,
            value,
            variable,
            ..
        } => {
            ensure!(flag == "foo_int", "wrong flag {flag}");
            ensure!(value == "notanumber", "wrong value {value}");
            ensure!(variable == "foo_int", "wrong variable {variable}");
        }
        other => return Err(anyhow!("unexpected error {other}")),
    }
    ensure!(
        string_value(&flags, "foo").as_deref() == Some("bar"),
        "flags before the failure keep their new values"
    );
    ensure!(
        flags.get::<i64>("foo_int") == Some(&7),
        "rejected flag keeps its prior value"
    );
    Ok(())
}

#[rstest]
fn binding_stops_at_first_failure(binder: EnvBinder) -> TestResult<()> {
    let mut flags = FlagSet::new("prog");
    flags.int("a", 0, "")?.string("b", "", "")?;
    let result = binder.bind_from(&mut flags, &env(&[("a", "x"), ("b", "later")]));
    ensure!(result.is_err(), "bind should fail on a");
    ensure!(
        string_value(&flags, "b").as_deref() == Some(""),
        "flags after the failure must be untouched"
    );
    Ok(())
}

#[rstest]
fn binding_does_not_mark_flags_explicit(binder: EnvBinder) -> TestResult<()> {
    let mut flags = string_flags(&["foo"])?;
    binder.bind_from(&mut flags, &env(&[("foo", "bar")]))?;
    ensure!(!flags.is_explicit("foo"), "env values are not explicit");
    Ok(())
}

#[rstest]
fn options_seed_policy_and_overrides() -> TestResult<()> {
    let options = BindOptions {
        prefix: "svc_".to_owned(),
        uppercase: true,
        names: [("token".to_owned(), vec!["API_TOKEN".to_owned(), String::new()])]
            .into_iter()
            .collect(),
    };
    let binder = EnvBinder::from_options(options);
    ensure!(binder.policy().prefix == "svc_", "prefix not applied");
    ensure!(
        binder.names_for("token") == vec!["API_TOKEN".to_owned(), "SVC_TOKEN".to_owned()],
        "unexpected candidates {:?}",
        binder.names_for("token")
    );
    Ok(())
}

#[rstest]
fn binder_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EnvBinder>();
}
