//! CLI for batch renaming.

use anyhow::{Context, Result};
use batch_rename::prelude::*;
use batch_rename::prompt;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brn")]
#[command(author, version, about = "Rename files in bulk by removing or replacing part of their names", long_about = None)]
struct Cli {
    /// Path to the directory to process
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// String to find (a regex with --regex)
    #[arg(short, long = "search")]
    search: Option<String>,

    /// Only rename files with this extension (e.g. "txt" or ".txt")
    #[arg(short = 't', long = "type")]
    file_type: Option<String>,

    /// Replace the match with this text instead of removing it
    #[arg(long, default_value = "")]
    replace: String,

    /// Skip files whose path relative to the root matches this glob
    #[arg(long)]
    exclude: Vec<String>,

    /// What to do with each planned file
    #[arg(short, long, value_enum, default_value_t = Action::Rename)]
    action: Action,

    /// Print every planned pair and timing
    #[arg(short, long)]
    verbose: bool,

    /// Report the plan without touching any file
    #[arg(short, long)]
    dry_run: bool,

    /// Ask before applying the plan
    #[arg(short, long)]
    interactive: bool,

    /// Treat the search string as a regular expression
    #[arg(short, long)]
    regex: bool,

    /// Print the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    Rename,
    Copy,
    Move,
}

impl From<Action> for TransferStrategy {
    fn from(action: Action) -> Self {
        match action {
            Action::Rename => TransferStrategy::Rename,
            Action::Copy => TransferStrategy::Copy,
            Action::Move => TransferStrategy::Move,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<RenameError>()
                .map_or(2, RenameError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

/// Log level used when `RUST_LOG` is unset.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn options_from(cli: &Cli) -> batch_rename::Result<Options> {
    let mut builder = Options::builder()
        .replace(cli.replace.as_str())
        .regex(cli.regex);
    if let Some(ref path) = cli.path {
        builder = builder.root(path);
    }
    if let Some(ref search) = cli.search {
        builder = builder.search(search);
    }
    if let Some(ref ext) = cli.file_type {
        builder = builder.extension(ext);
    }
    for pattern in &cli.exclude {
        builder = builder.exclude(pattern);
    }
    builder.build()
}

fn run(cli: Cli) -> Result<()> {
    let options = options_from(&cli).context("Invalid options")?;
    let plan = walk(&options).context("Walk dir")?;

    if cli.dry_run {
        let report = PlanReport::new(&plan);
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.render(cli.verbose));
        }
        return Ok(());
    }

    if plan.is_empty() {
        println!("No files to rename.");
        return Ok(());
    }

    if cli.interactive
        && !prompt::ask(&format!("Found {} file(s). Proceed?(y/n) ", plan.len()))
    {
        println!("Aborted.");
        return Ok(());
    }

    let transfer = Transfer::new(cli.action.into());
    let verb = transfer.strategy().verb();
    let start = Instant::now();
    match transfer.apply(&plan) {
        Ok(count) => {
            if cli.verbose {
                println!(
                    "{} {} file(s) in {:?}.",
                    capitalize(verb),
                    count,
                    start.elapsed()
                );
            }
            Ok(())
        }
        Err(err) => {
            println!("{} file(s) were {}.", err.completed(), verb);
            Err(err).context("Transfer failed")
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
