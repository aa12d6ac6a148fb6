// authprov-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for bounded reads and exit code mapping.
// Purpose: Ensure bounded reads fail closed on oversized inputs.
// Dependencies: authprov-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `read_bytes_with_limit` and `read_reader_with_limit` enforce
//! size limits, and that response statuses map to distinct exit codes.
//!
//! Security posture: CLI inputs are untrusted; size limits must fail closed.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::process::ExitCode;

use authprov_core::StatusCode;

use super::EXIT_CONFLICT;
use super::EXIT_UNPROCESSABLE;
use super::ReadLimitError;
use super::exit_code_for;
use super::read_bytes_with_limit;
use super::read_reader_with_limit;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("small.json");
    fs::write(&path, b"ok").expect("write small file");

    let bytes = read_bytes_with_limit(&path, 16).expect("read small file");
    assert_eq!(bytes, b"ok");
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("large.json");
    let limit = 8_usize;
    fs::write(&path, vec![0_u8; limit + 1]).expect("write large file");

    let err = read_bytes_with_limit(&path, limit).expect_err("expected size limit failure");
    match err {
        ReadLimitError::TooLarge { size, limit: reported } => {
            assert_eq!(size, 9);
            assert_eq!(reported, limit);
        }
        ReadLimitError::Io(err) => panic!("unexpected IO error: {err}"),
    }
}

#[test]
fn read_bytes_with_limit_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_bytes_with_limit(&dir.path().join("absent.json"), 8).expect_err("missing file");
    assert!(matches!(err, ReadLimitError::Io(_)));
}

#[test]
fn read_reader_with_limit_stops_one_past_limit() {
    let input = vec![b'x'; 32];
    let err = read_reader_with_limit(input.as_slice(), 4).expect_err("expected size limit failure");
    assert!(matches!(err, ReadLimitError::TooLarge { size: 5, limit: 4 }));

    let bytes = read_reader_with_limit(&b"four"[..], 4).expect("read at limit");
    assert_eq!(bytes, b"four");
}

#[test]
fn statuses_map_to_distinct_exit_codes() {
    assert_eq!(exit_code_for(StatusCode::Ok), ExitCode::SUCCESS);
    assert_eq!(exit_code_for(StatusCode::Conflict), ExitCode::from(EXIT_CONFLICT));
    assert_eq!(exit_code_for(StatusCode::UnprocessableEntity), ExitCode::from(EXIT_UNPROCESSABLE));
}
