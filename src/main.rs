use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use rustlike_lexer::report;
use rustlike_lexer::scanner::{self, ScanOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "rustlike-lexer",
    about = "Tokenize Rust-like source and report lexical errors"
)]
struct Cli {
    /// Source file to scan (omit for interactive mode)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Do not render lexical errors
    #[arg(long)]
    no_errors: bool,

    /// Exit with failure if any lexical error was found
    #[arg(long)]
    strict: bool,
}

/// Enable with `RUST_LOG=rustlike_lexer=debug` or `=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read source file '{}'", path.display()))
}

fn report_scan_errors(output: &ScanOutput, name: &str, source: &str) {
    for e in &output.errors {
        let report = miette::Report::new(e.with_source_code(name, source));
        eprintln!("{report:?}");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(path) = cli.file.as_ref() else {
        rustlike_lexer::repl::run_repl().context("interactive mode")?;
        return Ok(());
    };

    let source = read_source(path)?;
    let output = scanner::scan(&source);

    match cli.format {
        Format::Table => print!("{}", report::token_table(&output.tokens)),
        Format::Json => println!("{}", report::to_json(&output)),
    }

    if !cli.no_errors {
        report_scan_errors(&output, &path.display().to_string(), &source);
    }

    if cli.strict && output.has_errors() {
        bail!("{} lexical error(s)", output.errors.len());
    }
    Ok(())
}
