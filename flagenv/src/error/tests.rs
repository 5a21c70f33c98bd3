//! Tests for error display and accessors.

use super::*;
use anyhow::{Result as TestResult, ensure};
use clap::error::ErrorKind;
use rstest::rstest;

fn rejected() -> FlagEnvError {
    FlagEnvError::SetterRejected {
        flag: "foo_int".to_owned(),
        value: "7x".to_owned(),
        variable: "FOO_INT".to_owned(),
        source: BoxError::from("invalid digit found in string"),
    }
}

#[rstest]
fn setter_rejection_names_flag_value_and_variable() -> TestResult<()> {
    let err = rejected();
    let msg = err.to_string();
    ensure!(msg.contains("foo_int"), "flag missing from {msg}");
    ensure!(msg.contains("\"7x\""), "value missing from {msg}");
    ensure!(msg.contains("FOO_INT"), "variable missing from {msg}");
    ensure!(err.flag() == Some("foo_int"), "unexpected flag accessor");
    ensure!(err.value() == Some("7x"), "unexpected value accessor");
    ensure!(
        std::error::Error::source(&err).is_some(),
        "setter error should be exposed as the source"
    );
    Ok(())
}

#[rstest]
fn unknown_flag_has_no_value() -> TestResult<()> {
    let err = FlagEnvError::UnknownFlag {
        flag: "missing".to_owned(),
    };
    ensure!(err.flag() == Some("missing"), "unexpected flag accessor");
    ensure!(err.value().is_none(), "unknown flag carries no value");
    ensure!(
        err.to_string() == "flag provided but not defined: missing",
        "unexpected display: {err}"
    );
    Ok(())
}

#[rstest]
#[case(ErrorKind::DisplayHelp, true)]
#[case(ErrorKind::DisplayVersion, true)]
#[case(ErrorKind::UnknownArgument, false)]
fn display_requests_are_classified(
    #[case] kind: ErrorKind,
    #[case] expected: bool,
) -> TestResult<()> {
    let err = FlagEnvError::from(clap::Error::new(kind));
    ensure!(
        is_display_request(&err) == expected,
        "unexpected classification for {kind:?}"
    );
    Ok(())
}

#[rstest]
fn non_cli_errors_are_not_display_requests() {
    assert!(!is_display_request(&rejected()));
}

#[rstest]
fn figment_errors_round_trip_through_options() -> TestResult<()> {
    let err = FlagEnvError::from(figment::Error::from("bad options".to_owned()));
    ensure!(
        matches!(err, FlagEnvError::Options(_)),
        "expected Options variant"
    );
    let back = figment::Error::from(err);
    ensure!(
        back.to_string().contains("bad options"),
        "message lost in conversion: {back}"
    );
    Ok(())
}
