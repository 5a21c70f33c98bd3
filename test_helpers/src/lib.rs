//! Test helpers shared across the flagenv workspace.
//!
//! Binding reads the process environment, so tests that exercise it need to
//! set variables without racing each other and restore them afterwards.

pub mod env;
