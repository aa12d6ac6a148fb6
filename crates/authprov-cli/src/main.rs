// authprov-cli/src/main.rs
// ============================================================================
// Module: AuthProv CLI Entry Point
// Description: Command dispatcher for request validation and config checks.
// Purpose: Validate provisioning change sets from files or stdin.
// Dependencies: clap, authprov-config, authprov-core, authprov-wire, thiserror.
// ============================================================================

//! ## Overview
//! `authprov validate` reads one request document, runs the rule engine over
//! it, and writes the response document to stdout. The exit code mirrors the
//! response status: 0 for accepted, 2 for a constraint violation (409), 3 for
//! an unprocessable entity (422), 4 for a malformed request (400), and 1 for
//! operational failures. Every run records one audit event.
//!
//! Security posture: request documents are untrusted; reads are bounded by
//! `limits.max_request_bytes` and audit paths are anonymized by default.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use authprov_cli::audit::ValidationAuditEvent;
use authprov_cli::audit::ValidationAuditEventParams;
use authprov_cli::audit::ValidationAuditSink;
use authprov_cli::audit::ValidationOutcome;
use authprov_cli::audit::sink_from_config;
use authprov_cli::t;
use authprov_config::AuthProvConfig;
use authprov_core::RuleEngine;
use authprov_core::StatusCode;
use authprov_core::ValidationReport;
use authprov_core::ValidationRequest;
use authprov_wire::WireError;
use authprov_wire::encode_error;
use authprov_wire::encode_report;
use authprov_wire::parse_request;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Input path that selects standard input.
const STDIN_PATH: &str = "-";
/// Exit code for a 409 response.
const EXIT_CONFLICT: u8 = 2;
/// Exit code for a 422 response.
const EXIT_UNPROCESSABLE: u8 = 3;
/// Exit code for a 400 response.
const EXIT_BAD_REQUEST: u8 = 4;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "authprov", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a provisioning request document.
    Validate(ValidateCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for request validation.
#[derive(Args, Debug)]
struct ValidateCommand {
    /// Request document path, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Optional config file path (defaults to authprov.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Indent the response document.
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate an authprov configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to authprov.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Validate(command) => command_validate(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Validate Command
// ============================================================================

/// Executes request validation.
fn command_validate(command: &ValidateCommand) -> CliResult<ExitCode> {
    let config = AuthProvConfig::load_optional(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let sink = sink_from_config(&config.audit)
        .map_err(|err| CliError::new(t!("audit.open_failed", error = err)))?;
    let bytes = read_request(&command.input, config.limits.max_request_bytes)?;
    let pretty = command.pretty || config.output.pretty;
    let anonymize = config.audit.anonymize;

    let parsed = std::str::from_utf8(&bytes)
        .map_err(|_| WireError::WrongFormat)
        .and_then(parse_request);
    let request = match parsed {
        Ok(request) => request,
        Err(err) => {
            let document = encode_error(&err.to_validation_error(), pretty).map_err(encode_failed)?;
            write_stdout_line(&document)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            sink.record(&ValidationAuditEvent::new(ValidationAuditEventParams {
                outcome: ValidationOutcome::BadRequest,
                status: err.status(),
                change_count: 0,
                related_count: 0,
                error_count: 1,
                request_bytes: bytes.len(),
                resource_paths: Vec::new(),
                anonymize,
            }));
            return Ok(ExitCode::from(EXIT_BAD_REQUEST));
        }
    };

    let report = RuleEngine::new().validate(&request);
    let document = encode_report(&report, pretty).map_err(encode_failed)?;
    write_stdout_line(&document).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    record_report(sink.as_ref(), &request, &report, bytes.len(), anonymize);
    Ok(exit_code_for(report.status()))
}

/// Records the audit event for a validated request.
fn record_report(
    sink: &dyn ValidationAuditSink,
    request: &ValidationRequest,
    report: &ValidationReport,
    request_bytes: usize,
    anonymize: bool,
) {
    let outcome = if report.is_accepted() {
        ValidationOutcome::Accepted
    } else {
        ValidationOutcome::Rejected
    };
    sink.record(&ValidationAuditEvent::new(ValidationAuditEventParams {
        outcome,
        status: report.status().as_u16(),
        change_count: request.changes.len(),
        related_count: request.related.len(),
        error_count: report.errors.len(),
        request_bytes,
        resource_paths: request.changes.iter().map(|change| change.resource_path.clone()).collect(),
        anonymize,
    }));
}

/// Maps a response status to the process exit code.
fn exit_code_for(status: StatusCode) -> ExitCode {
    match status {
        StatusCode::Ok => ExitCode::SUCCESS,
        StatusCode::Conflict => ExitCode::from(EXIT_CONFLICT),
        StatusCode::UnprocessableEntity => ExitCode::from(EXIT_UNPROCESSABLE),
    }
}

/// Formats a localized encoding failure.
fn encode_failed(err: WireError) -> CliError {
    CliError::new(t!("validate.encode_failed", error = err))
}

/// Reads the request document from a file or stdin.
fn read_request(input: &Path, max_bytes: usize) -> CliResult<Vec<u8>> {
    let from_stdin = input.as_os_str() == STDIN_PATH;
    let result = if from_stdin {
        read_reader_with_limit(std::io::stdin().lock(), max_bytes)
    } else {
        read_bytes_with_limit(input, max_bytes)
    };
    let label = if from_stdin { t!("input.stdin") } else { input.display().to_string() };
    result.map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(t!("validate.read_failed", path = label, error = err))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            kind = t!("validate.kind.request"),
            path = label,
            size = size,
            limit = limit
        )),
    })
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = AuthProvConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded reads.
#[derive(Debug)]
enum ReadLimitError {
    /// I/O failure.
    Io(std::io::Error),
    /// Input size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    read_reader_with_limit(file, max_bytes)
}

/// Reads a stream to its end, failing once it exceeds `max_bytes`.
fn read_reader_with_limit(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut limited = reader.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
