//! Section validation tests for authprov-config.
// crates/authprov-config/tests/section_validation.rs
// =============================================================================
// Module: Config Section Validation Tests
// Description: Validate defaults and per-section constraints.
// Purpose: Ensure invalid audit and limit settings fail closed.
// =============================================================================

use authprov_config::AuditSinkKind;
use authprov_config::AuthProvConfig;
use authprov_config::DEFAULT_MAX_REQUEST_BYTES;
use authprov_config::MAX_REQUEST_BYTES_LIMIT;

type TestResult = Result<(), String>;

fn assert_rejected(content: &str, needle: &str) -> TestResult {
    match AuthProvConfig::from_toml_str(content) {
        Err(error) if error.to_string().contains(needle) => Ok(()),
        Err(error) => Err(format!("error {error} did not contain {needle}")),
        Ok(_) => Err(format!("expected config to be rejected: {content}")),
    }
}

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = AuthProvConfig::from_toml_str("").map_err(|err| err.to_string())?;
    if config.output.pretty {
        return Err("pretty output should default to false".to_string());
    }
    if config.audit.sink != AuditSinkKind::None || !config.audit.anonymize {
        return Err("audit should default to a disabled, anonymizing sink".to_string());
    }
    if config.limits.max_request_bytes != DEFAULT_MAX_REQUEST_BYTES {
        return Err("request limit should default to 4 MiB".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_rejected("[audit]\nsink = \"file\"\n", "audit.path is required for the file sink")
}

#[test]
fn audit_path_must_be_non_empty() -> TestResult {
    assert_rejected("[audit]\nsink = \"stderr\"\npath = \"  \"\n", "audit.path must be non-empty")
}

#[test]
fn unknown_sink_is_a_parse_error() -> TestResult {
    assert_rejected("[audit]\nsink = \"syslog\"\n", "config parse error")
}

#[test]
fn request_limit_is_bounded() -> TestResult {
    assert_rejected("[limits]\nmax_request_bytes = 0\n", "must be greater than zero")?;
    assert_rejected(
        &format!("[limits]\nmax_request_bytes = {}\n", MAX_REQUEST_BYTES_LIMIT + 1),
        "must be at most",
    )?;
    let at_limit = format!("[limits]\nmax_request_bytes = {MAX_REQUEST_BYTES_LIMIT}\n");
    AuthProvConfig::from_toml_str(&at_limit)
        .map(|_| ())
        .map_err(|err| err.to_string())
}
