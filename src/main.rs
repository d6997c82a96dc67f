//! docaudit CLI: walk a directory tree and emit one metadata record per
//! file, as text, CSV or JSON.
//!
//! The walk is sequential and deterministic (sorted paths, 1-based
//! index); the inspection core itself stays one-file-at-a-time.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use tracing::{error, info, warn};

use docaudit::{export, FileMetadataRecord, InspectionConfig, Inspector, PathLimits};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Multi-line text rendering per record
    Text,
    /// CSV with the record labels as header
    Csv,
    /// JSON array of label-keyed objects
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn build_cli() -> Command {
    Command::new("docaudit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds normalized metadata records for every file under a directory")
        .arg(
            Arg::new("root")
                .help("Root directory to walk")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .help("Skip format introspection of files larger than this many bytes (0 = no limit)")
                .value_parser(clap::value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("digits")
                .long("digits")
                .help("Zero-padding width of the record index")
                .value_parser(clap::value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            Arg::new("ignore-long-paths")
                .long("ignore-long-paths")
                .help("Inspect files even when the full path exceeds the length limit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log verbosity")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("info"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<LogLevel>("log-level")
        .copied()
        .unwrap_or(LogLevel::Info);
    init_logging(log_level);

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> docaudit::Result<()> {
    let root = matches.get_one::<PathBuf>("root").expect("root is required");
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text);

    let config = InspectionConfig {
        root_dir: root.to_string_lossy().into_owned(),
        index_digits: matches.get_one::<usize>("digits").copied().unwrap_or(5),
        max_size_for_processing: matches.get_one::<u64>("max-size").copied().unwrap_or(0),
        ignore_path_length_limit: matches.get_flag("ignore-long-paths"),
        limits: PathLimits::default(),
    };
    config.validate()?;
    let inspector = Inspector::new(config);

    let mut files = Vec::new();
    collect_files(root, &mut files);
    files.sort();
    info!(count = files.len(), root = %root.display(), "walk complete");

    let records: Vec<FileMetadataRecord> = files
        .iter()
        .enumerate()
        .map(|(i, path)| inspector.inspect(&path.to_string_lossy(), (i + 1) as u64))
        .collect();

    match matches.get_one::<PathBuf>("output") {
        Some(path) => emit(&records, format, BufWriter::new(File::create(path)?)),
        None => emit(&records, format, io::stdout().lock()),
    }
}

fn emit<W: Write>(
    records: &[FileMetadataRecord],
    format: OutputFormat,
    out: W,
) -> docaudit::Result<()> {
    match format {
        OutputFormat::Text => export::write_text(records, out),
        OutputFormat::Csv => export::write_csv(records, out),
        OutputFormat::Json => export::write_json(records, out),
    }
}

/// Depth-first walk collecting regular files. Unreadable directories and
/// entries are logged and skipped so one bad subtree does not abort the
/// audit; symlinks and special files are left out.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "cannot read directory");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "cannot read directory entry");
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "cannot determine file type");
                continue;
            }
        };

        if file_type.is_dir() {
            collect_files(&entry.path(), files);
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("docaudit={}", filter_level)))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
