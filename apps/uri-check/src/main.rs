//! uri-check — command-line front end for the `util` crate.
//!
//! - `validate`: check http/https endpoint URIs and print scheme and effective port.
//! - `hash`: print the stable FNV-1a hash of each argument.
//! - `remove`: drop every occurrence of a value from a list.
//!
//! Results go to stdout (text or JSON lines); logs go to stderr.
//!
//! Configuration: see `config.rs` for environment variables. `RUST_LOG`
//! controls log verbosity (default `info`).

mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use util::Scheme;

use config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "uri-check")]
#[command(about = "Validate endpoint URIs and compute stable hashes", long_about = None)]
struct Cli {
    /// Print one JSON object per result instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate http/https URIs; exits non-zero if any is invalid.
    Validate {
        /// URIs to check.
        #[arg(required = true)]
        uris: Vec<String>,
    },

    /// Print the stable hash of each string.
    Hash {
        /// Strings to hash.
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Print ITEMS without any occurrence of VALUE, one per line.
    Remove {
        /// Value to remove.
        #[arg(long)]
        value: String,
        /// List to filter.
        items: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct UriReport<'a> {
    uri: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<Scheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct HashReport<'a> {
    text: &'a str,
    hash: u32,
    hex: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&cfg);
    debug!(version = %util::about(), "starting");

    let output = if cli.json { OutputFormat::Json } else { cfg.output };
    let mut stdout = io::stdout().lock();
    match run(cli.command, output, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cfg: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(io::stderr),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .init();
        }
    }
}

/// Execute one command, writing results to `out`. Returns `Ok(false)` when a
/// URI failed validation.
fn run<W: Write>(command: Command, output: OutputFormat, out: &mut W) -> io::Result<bool> {
    match command {
        Command::Validate { uris } => validate(&uris, output, out),
        Command::Hash { texts } => {
            for text in &texts {
                let report = HashReport {
                    text,
                    hash: util::hash(text),
                    hex: util::hash_hex(text),
                };
                match output {
                    OutputFormat::Json => write_json(out, &report)?,
                    OutputFormat::Text => {
                        writeln!(out, "{}: {} ({})", report.text, report.hash, report.hex)?
                    }
                }
            }
            Ok(true)
        }
        Command::Remove { value, items } => {
            let kept = util::remove_string(&items, &value);
            info!(removed = items.len() - kept.len(), %value, "filtered list");
            match output {
                OutputFormat::Json => write_json(out, &kept)?,
                OutputFormat::Text => {
                    for item in &kept {
                        writeln!(out, "{item}")?;
                    }
                }
            }
            Ok(true)
        }
    }
}

fn validate<W: Write>(uris: &[String], output: OutputFormat, out: &mut W) -> io::Result<bool> {
    let mut all_valid = true;
    for uri in uris {
        let (report, line) = match util::endpoint(uri) {
            Ok(ep) => {
                debug!(%uri, scheme = %ep.scheme, port = ep.port, "uri valid");
                let line = format!("{uri}: {} (port {})", ep.scheme, ep.port);
                let report = UriReport {
                    uri,
                    valid: true,
                    scheme: Some(ep.scheme),
                    host: Some(ep.host),
                    port: Some(ep.port),
                    error: None,
                };
                (report, line)
            }
            Err(e) => {
                warn!(%uri, error = %e, "uri rejected");
                all_valid = false;
                let line = format!("{uri}: error: {e}");
                let report = UriReport {
                    uri,
                    valid: false,
                    scheme: None,
                    host: None,
                    port: None,
                    error: Some(e.to_string()),
                };
                (report, line)
            }
        };
        match output {
            OutputFormat::Json => write_json(out, &report)?,
            OutputFormat::Text => writeln!(out, "{line}")?,
        }
    }
    Ok(all_valid)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command, output: OutputFormat) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = run(command, output, &mut buf).expect("write to vec");
        (ok, String::from_utf8(buf).expect("utf8 output"))
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["uri-check", "--json", "validate", "http://a"])
            .expect("parse validate");
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Validate { ref uris } if uris == &["http://a"]));

        let cli = Cli::try_parse_from(["uri-check", "remove", "--value", "x", "a", "x"])
            .expect("parse remove");
        assert!(matches!(cli.command, Command::Remove { ref value, .. } if value == "x"));

        assert!(Cli::try_parse_from(["uri-check", "validate"]).is_err());
    }

    #[test]
    fn validate_text_output() {
        let (ok, out) = run_to_string(
            Command::Validate {
                uris: vec!["https://EXAMPLe.com:8080/".into(), "http://redhat".into()],
            },
            OutputFormat::Text,
        );
        assert!(ok);
        assert_eq!(
            out,
            "https://EXAMPLe.com:8080/: https (port 8080)\nhttp://redhat: http (port 80)\n"
        );
    }

    #[test]
    fn validate_reports_failures() {
        let (ok, out) = run_to_string(
            Command::Validate {
                uris: vec!["http://5.6.7.8:0".into(), "http://1.2.3.4".into()],
            },
            OutputFormat::Text,
        );
        assert!(!ok);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("http://5.6.7.8:0: error: invalid uri port"));
        assert_eq!(lines[1], "http://1.2.3.4: http (port 80)");
    }

    #[test]
    fn validate_json_output() {
        let (ok, out) = run_to_string(
            Command::Validate {
                uris: vec!["redhat.com".into(), "https://1.2.3.4".into()],
            },
            OutputFormat::Json,
        );
        assert!(!ok);
        let rows: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect();
        assert_eq!(rows[0]["valid"], false);
        assert!(rows[0].get("scheme").is_none());
        assert_eq!(rows[1]["valid"], true);
        assert_eq!(rows[1]["scheme"], "https");
        assert_eq!(rows[1]["host"], "1.2.3.4");
        assert_eq!(rows[1]["port"], 443);
    }

    #[test]
    fn hash_output() {
        let (ok, out) = run_to_string(
            Command::Hash {
                texts: vec!["a".into()],
            },
            OutputFormat::Text,
        );
        assert!(ok);
        assert_eq!(out, "a: 3826002220 (e40c292c)\n");

        let (_, out) = run_to_string(
            Command::Hash {
                texts: vec!["a".into()],
            },
            OutputFormat::Json,
        );
        let row: serde_json::Value = serde_json::from_str(out.trim()).expect("json");
        assert_eq!(row["hash"], 3_826_002_220u32);
        assert_eq!(row["hex"], "e40c292c");
    }

    #[test]
    fn remove_output() {
        let (ok, out) = run_to_string(
            Command::Remove {
                value: "x".into(),
                items: vec!["a".into(), "x".into(), "b".into(), "x".into()],
            },
            OutputFormat::Text,
        );
        assert!(ok);
        assert_eq!(out, "a\nb\n");
    }
}
