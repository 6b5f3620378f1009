//! rowdiff: row and table diff tool
//!
//! Compares two CSV, TSV or text files row by row and reports equal,
//! replaced, deleted and inserted rows.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use rowdiff::{
    cli,
    config::{AppConfig, ColumnsConfig, ConfigPreset, DiffConfig, DiffPaths, Validatable},
    parsers::TableFormat,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  csv, tsv (and ; or | separated), plain text lines",
        "\n\nOutput Formats:",
        "\n  csv, tsv, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "rowdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Row and table diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No differences (or differences without --fail-on-change)
    1  Differences found with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Changed rows of two CSV files, as CSV on stdout
    rowdiff diff before.csv after.csv

    # All rows, written as TSV
    rowdiff diff before.csv after.csv -a -O changes.tsv

    # Compare only the first and third column
    rowdiff diff before.csv after.csv -t 0,2

    # Counts only, failing the build on any difference
    rowdiff diff before.txt after.txt -o summary --fail-on-change")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// File before the change
    file1: PathBuf,

    /// File after the change
    file2: PathBuf,

    /// Include equal rows
    #[arg(short, long)]
    all: bool,

    /// Output format (auto follows the output file extension, csv on stdout)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Output encoding label (e.g. utf-8, cp932)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Input encoding label
    #[arg(long)]
    input_encoding: Option<String>,

    /// Output line terminator; `\r`, `\n` and `\t` escapes are understood
    #[arg(short, long)]
    line_terminator: Option<String>,

    /// Do not write a header row
    #[arg(short, long)]
    no_header: bool,

    /// Placeholder for an index that does not apply
    #[arg(short = 'N', long)]
    na_value: Option<String>,

    /// Separator between old and new value in replaced fields
    #[arg(short = 'C', long)]
    condition_value: Option<String>,

    /// Minimum similarity (0.0-1.0) for pairing a deleted and an inserted
    /// row as a replace; 0 or 1 disables pairing
    #[arg(long, value_parser = parse_threshold)]
    threshold: Option<f64>,

    /// Named preset (default, strict, loose, exact, full)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// Keep records in matching order instead of sorting by position
    #[arg(long)]
    no_sort: bool,

    /// Sort records in descending position order
    #[arg(long)]
    reverse: bool,

    /// Number given to the first row
    #[arg(long)]
    start_index: Option<usize>,

    /// Columns to compare in both files (e.g. `0,2`, `1-3`, `id,name`)
    #[arg(short = 't', long)]
    columns: Option<String>,

    /// Columns to compare in the first file
    #[arg(long)]
    columns1: Option<String>,

    /// Columns to compare in the second file
    #[arg(long)]
    columns2: Option<String>,

    /// Input format override (detected from extension or content otherwise)
    #[arg(long)]
    format: Option<TableFormat>,

    /// Exit with code 1 if the files differ
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files row by row
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults merged with file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .rowdiff.yaml in the current directory
    Init,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0.0 and 1.0, got {s}"))
    }
}

fn parse_preset(s: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{s}' (expected one of: {})", names.join(", "))
    })
}

/// Expand `\r`, `\n` and `\t` escapes typed on the command line.
fn unescape(s: &str) -> String {
    s.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t")
}

/// Layer command line flags over the file (or preset) configuration.
fn build_diff_config(args: DiffArgs, mut app: AppConfig, quiet: bool) -> Result<DiffConfig> {
    if let Some(threshold) = args.threshold {
        app.matching.threshold = threshold;
    }
    if let Some(format) = args.format {
        app.input.format = Some(format);
    }
    if args.input_encoding.is_some() {
        app.input.encoding = args.input_encoding;
    }
    if let Some(start) = args.start_index {
        app.input.start_index = start;
    }
    if let Some(format) = args.output {
        app.output.format = format;
    }
    if args.output_file.is_some() {
        app.output.file = args.output_file;
    }
    if args.encoding.is_some() {
        app.output.encoding = args.encoding;
    }
    if let Some(terminator) = args.line_terminator {
        app.output.line_terminator = unescape(&terminator);
    }
    if let Some(na) = args.na_value {
        app.output.na_value = na;
    }
    if args.no_header {
        app.output.header = false;
    }
    if let Some(separator) = args.condition_value {
        app.replace.separator = separator;
    }
    if args.all {
        app.behavior.show_equal = true;
    }
    if args.no_sort {
        app.behavior.sort = false;
    }
    if args.reverse {
        app.behavior.reverse = true;
    }
    if args.fail_on_change {
        app.behavior.fail_on_change = true;
    }
    if quiet {
        app.behavior.quiet = true;
    }

    let errors = app.validate();
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration: {}", joined.join("; "));
    }

    Ok(DiffConfig {
        paths: DiffPaths {
            left: args.file1,
            right: args.file2,
        },
        columns: ColumnsConfig {
            both: args.columns,
            left: args.columns1,
            right: args.columns2,
        },
        app,
    })
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let app = match args.preset {
                Some(preset) => {
                    tracing::debug!("Using preset {preset}");
                    AppConfig::from_preset(preset)
                }
                None => rowdiff::config::load_or_default(cli.config.as_deref()).0,
            };
            let config = build_diff_config(args, app, cli.quiet)?;
            cli::run_diff(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "rowdiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema =
                rowdiff::config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    rowdiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    rowdiff::config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                match rowdiff::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".rowdiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = rowdiff::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
