use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::CodecLimits;
use glob::Pattern;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ugss_tools::{
    deconstruct_file, describe_failure, format_inspect_pretty, inspect_document,
    reconstruct_file, InspectReport,
};

#[derive(Parser)]
#[command(
    name = "ugss-tools",
    version,
    about = "UserGameStatsSchema conversion and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Maximum mapping nesting depth.
    #[arg(long, global = true)]
    max_depth: Option<usize>,
    /// Maximum binary input size in bytes.
    #[arg(long, global = true)]
    max_input_bytes: Option<usize>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a binary schema into readable YAML.
    #[command(alias = "deconstruct")]
    Decode {
        /// Path to UserGameStatsSchema_<app id>.bin.
        path: PathBuf,
        /// Destination folder.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Convert a YAML schema back into binary.
    #[command(alias = "reconstruct")]
    Encode {
        /// Path to UserGameStatsSchema_<app id>.yaml.
        path: PathBuf,
        /// Destination folder.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Inspect schema structure and sizes.
    Inspect {
        /// A binary schema, or a directory of them.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{}", describe_failure(&err));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut limits = CodecLimits::default();
    if let Some(max_depth) = cli.max_depth {
        limits.max_depth = max_depth;
    }
    if let Some(max_input_bytes) = cli.max_input_bytes {
        limits.max_input_bytes = max_input_bytes;
    }

    match cli.command {
        Command::Decode { path, output } => {
            let done = deconstruct_file(&path, &output, &limits)?;
            info!(
                "successfully extracted game achievement schema to {}",
                done.output.display()
            );
        }
        Command::Encode { path, output } => {
            let done = reconstruct_file(&path, &output, &limits)?;
            info!(
                bytes = done.bytes_written,
                "successfully encoded game achievement schema to {}",
                done.output.display()
            );
        }
        Command::Inspect {
            path,
            glob,
            sort,
            limit,
            format,
        } => {
            if path.is_dir() {
                let entries = collect_schema_entries(&path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let report = inspect_file(&entry.path, &limits)?;
                    if matches!(format, InspectFormat::Pretty) {
                        println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    }
                    print_inspect_report(&report, format)?;
                }
            } else {
                let report = inspect_file(&path, &limits)?;
                print_inspect_report(&report, format)?;
            }
        }
    }
    Ok(())
}

fn inspect_file(path: &Path, limits: &CodecLimits) -> Result<InspectReport> {
    let bytes = fs::read(path).with_context(|| format!("read schema {}", path.display()))?;
    inspect_document(&bytes, limits).with_context(|| format!("inspect {}", path.display()))
}

fn print_inspect_report(report: &InspectReport, format: InspectFormat) -> Result<()> {
    match format {
        InspectFormat::Pretty => print!("{}", format_inspect_pretty(report)),
        InspectFormat::Json => {
            let json = serde_json::to_string(report).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}

struct SchemaEntry {
    path: PathBuf,
    size: u64,
}

fn collect_schema_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<SchemaEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(SchemaEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<SchemaEntry>,
    sort: Option<InspectSort>,
) -> Vec<SchemaEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}
