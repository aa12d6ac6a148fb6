//! Config load validation tests for authprov-config.
// crates/authprov-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use authprov_config::AuthProvConfig;
use authprov_config::ConfigError;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<AuthProvConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    assert_invalid(
        AuthProvConfig::load(Some(Path::new(&long_path))),
        "config path exceeds max length",
    )
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    assert_invalid(
        AuthProvConfig::load(Some(Path::new(&long_component))),
        "config path component too long",
    )
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = write_config(&vec![b'#'; 1_048_577])?;
    assert_invalid(AuthProvConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(AuthProvConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_rejects_missing_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    assert_invalid(AuthProvConfig::load(Some(&missing)), "config io error")?;
    assert_invalid(AuthProvConfig::load_optional(Some(&missing)), "config io error")
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = write_config(b"[output\npretty = true")?;
    assert_invalid(AuthProvConfig::load(Some(file.path())), "config parse error")
}

#[test]
fn load_reads_every_section() -> TestResult {
    let file = write_config(
        b"[output]\npretty = true\n\n[audit]\nsink = \"file\"\npath = \"audit.jsonl\"\n\
          anonymize = false\n\n[limits]\nmax_request_bytes = 1024\n",
    )?;
    let config = AuthProvConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if !config.output.pretty || config.audit.anonymize || config.limits.max_request_bytes != 1024 {
        return Err("config sections were not applied".to_string());
    }
    if config.audit.path.as_deref() != Some("audit.jsonl") {
        return Err("audit path was not applied".to_string());
    }
    Ok(())
}
