//! Command-line interface for token-sass.
//!
//! Usage:
//!   token-sass `<input>` [--output variables|map] [--no-resolve] [--format dtcg|tokens-studio]
//!              [--config `<file>`] [-o `<file>`] [-v]
//!
//! Flags given on the command line override the config file.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use token_sass::{load_document, Compiler, Options, OutputStyle, TokenFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "token-sass", version, about = "Compile design tokens to SCSS")]
struct Cli {
    /// Token document (.json, .yaml or .yml)
    input: PathBuf,

    /// Output style: variables or map
    #[arg(long, value_name = "STYLE")]
    output: Option<OutputStyle>,

    /// Leave {alias} references unresolved
    #[arg(long)]
    no_resolve: bool,

    /// Input dialect; detected from the document when omitted
    #[arg(long, value_name = "FORMAT")]
    format: Option<TokenFormat>,

    /// Options file (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write SCSS to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_file(path)
                .with_context(|| format!("invalid config {}", path.display()))?,
            None => Options::default(),
        };
        if let Some(output) = self.output {
            options.output = output;
        }
        if self.no_resolve {
            options.resolve_aliases = false;
        }
        if let Some(format) = self.format {
            options.format = Some(format);
        }
        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "token_sass=debug",
        _ => "token_sass=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;
    tracing::debug!(?options, input = %cli.input.display(), "starting compilation");

    let document = load_document(&cli.input)?;
    let compiled = Compiler::with_options(options).compile(&document)?;
    tracing::info!(
        format = %compiled.format,
        tokens = compiled.token_count,
        syntax = %compiled.syntax,
        "compiled token document"
    );

    match &cli.out {
        Some(path) => fs::write(path, &compiled.contents)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", compiled.contents),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
