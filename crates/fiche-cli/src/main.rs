//! Command-line shell for the fiche importer.
//!
//! Reads a capture file, parses it into note records, and submits them to a
//! running Anki instance through AnkiConnect. The outcome is a single
//! aggregate line on stdout; per-record diagnostics go to the log.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use fiche::AnkiClient;
use fiche_import::{Importer, parse_notes};
use tracing::info;

/// Import a capture file of vocabulary entries into Anki via AnkiConnect.
#[derive(Parser, Debug)]
#[command(name = "fiche")]
#[command(version, about, long_about = None)]
struct Args {
    /// Capture file with [Expression]: blocks
    file: PathBuf,

    /// AnkiConnect URL
    #[arg(long, default_value = "http://127.0.0.1:8765")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let content = match std::fs::read_to_string(&args.file) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("could not read {}: {error}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let records = parse_notes(&content);
    if records.is_empty() {
        eprintln!(
            "no notes found in {}; check the [Expression]: markers",
            args.file.display()
        );
        return ExitCode::FAILURE;
    }
    info!(count = records.len(), "parsed capture file");

    let client = AnkiClient::builder()
        .url(args.url.clone())
        .timeout(Duration::from_secs(args.timeout))
        .build();

    if !client.is_alive().await {
        eprintln!(
            "could not reach AnkiConnect at {}; start Anki with the AnkiConnect add-on",
            args.url
        );
        return ExitCode::FAILURE;
    }

    let report = Importer::new(client).import_all(records).await;
    println!("{} notes imported, {} failed", report.succeeded, report.failed);

    if report.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
