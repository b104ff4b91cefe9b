#![warn(clippy::all, clippy::pedantic)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use copy_scout::config::load_config;
use copy_scout::{scan, ContentSet, Error, ScanReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON report
    Json,
    /// One line per occurrence
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "copy-scout",
    about = "Find where managed copy appears in JSX/TSX components",
    version
)]
struct Cli {
    /// JSON file mapping content ids to text (`-` reads stdin)
    #[arg(long, short)]
    input: PathBuf,

    /// Project root to scan
    #[arg(long, short, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/copy-scout.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort on the first file that fails to parse
    #[arg(long)]
    strict: bool,

    /// Maximum number of files processed at once
    #[arg(long, short)]
    jobs: Option<usize>,

    /// Extra directory names to skip (repeatable)
    #[arg(long = "exclude", value_name = "DIR")]
    exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = load_config(&cli.root, cli.config.as_deref())?;

    if cli.strict {
        config.strict = true;
    }
    if let Some(jobs) = cli.jobs {
        config.concurrency = jobs;
    }
    config.excluded_dirs.extend(cli.exclude.iter().cloned());
    config.validate()?;

    let content = ContentSet::load(&cli.input)?;
    tracing::info!(items = content.len(), root = %cli.root.display(), "starting scan");

    let report = scan(&cli.root, &content, &config).await?;

    print_report(&report, cli.format)?;
    print_skipped(&report);

    Ok(())
}

fn print_report(report: &ScanReport, format: Format) -> Result<(), Error> {
    let rendered = match format {
        Format::Json => report.to_json_pretty()? + "\n",
        Format::Text => report.results.render_text(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(Error::Output)
}

fn print_skipped(report: &ScanReport) {
    if report.skipped.is_empty() {
        return;
    }

    eprintln!(
        "{} of {} files skipped:",
        report.skipped.len(),
        report.files_scanned
    );
    for skipped in &report.skipped {
        eprintln!("  skipped {}: {}", skipped.file, skipped.reason);
    }
}
