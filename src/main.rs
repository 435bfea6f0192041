use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use outbreak_radar::config::ScanConfig;
use outbreak_radar::history::{FileHistoryStore, PgHistoryStore};
use outbreak_radar::models::{ScanRecord, ScanReport};
use outbreak_radar::pipeline;
use outbreak_radar::report::render_markdown;

#[derive(Parser)]
#[command(name = "outbreak-radar")]
#[command(about = "Multi-source outbreak signal scanner with anomaly and hotspot detection", long_about = None)]
struct Cli {
    /// Postgres URL for the history store; the JSON history file is used when unset
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the Postgres history schema
    InitDb,
    /// Fetch all sources, aggregate, and write the report
    Scan {
        #[arg(long, default_value = "signals.json")]
        report: PathBuf,
        #[arg(long, default_value = "signal_history.json")]
        history: PathBuf,
        /// Also write a markdown summary here
        #[arg(long)]
        summary: Option<PathBuf>,
        /// JSON file of raw records to include (repeatable)
        #[arg(long)]
        inbox: Vec<PathBuf>,
        /// CSV search-interest export to include (repeatable)
        #[arg(long)]
        trends_csv: Vec<PathBuf>,
        /// Per-request timeout; paced search sources get their whole query loop on top
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        /// Skip network sources and scan local files only
        #[arg(long)]
        offline: bool,
        #[arg(long, env = "BRAVE_API_KEY", hide_env_values = true)]
        search_api_key: Option<String>,
    },
    /// Show recent scans and the largest baselines
    History {
        #[arg(long, default_value = "signal_history.json")]
        history: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Render a markdown summary from a report file
    Summary {
        #[arg(long, default_value = "signals.json")]
        report: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("outbreak_radar=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitDb => {
            let database_url = cli
                .database_url
                .context("DATABASE_URL must be set to initialize the history schema")?;
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .context("failed to connect to Postgres")?;
            PgHistoryStore::new(pool).init_db().await?;
            println!("Schema ready.");
        }
        Commands::Scan {
            report,
            history,
            summary,
            inbox,
            trends_csv,
            timeout_secs,
            offline,
            search_api_key,
        } => {
            let config = ScanConfig {
                report_path: report,
                history_path: history,
                summary_path: summary,
                inboxes: inbox,
                trend_files: trends_csv,
                fetch_timeout: Duration::from_secs(timeout_secs.max(1)),
                offline,
                search_api_key,
                database_url: cli.database_url,
            };
            config.log_redacted();

            let client = reqwest::Client::builder()
                .user_agent(concat!("outbreak-radar/", env!("CARGO_PKG_VERSION")))
                .timeout(config.fetch_timeout)
                .build()
                .context("failed to build HTTP client")?;
            let sources = config.build_sources(&client);
            let store = config.history_store();

            let scan = pipeline::run_scan(&sources, store.as_ref(), config.fetch_timeout).await;

            write_report(&config.report_path, &scan)?;
            if let Some(path) = &config.summary_path {
                std::fs::write(path, render_markdown(&scan))
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }

            let tiers = &scan.stats.by_severity;
            println!(
                "{} signals | {} hotspots | {} flight routes ({:.1}s)",
                scan.stats.total_signals,
                scan.stats.countries_affected,
                scan.flight_routes.len(),
                scan.scan_duration_seconds
            );
            println!(
                "Critical: {} | High: {} | Moderate: {} | Low: {}",
                tiers.critical, tiers.high, tiers.moderate, tiers.low
            );
            println!(
                "Traveler signals: {} | Anomalies: {}",
                scan.stats.traveler_signals, scan.stats.anomalies_detected
            );
            println!("Report written to {}.", config.report_path.display());
        }
        Commands::History { history, limit } => {
            if let Some(database_url) = cli.database_url {
                let pool = PgPoolOptions::new()
                    .max_connections(1)
                    .connect(&database_url)
                    .await
                    .context("failed to connect to Postgres")?;
                let scans = PgHistoryStore::new(pool).recent_scans(limit as i64).await?;
                print_scans(scans.iter());
                return Ok(());
            }

            let history = FileHistoryStore::new(history).load().await;
            if history.scans.is_empty() {
                println!("No scans recorded yet.");
                return Ok(());
            }
            print_scans(history.scans.iter().rev().take(limit));

            let mut baselines: Vec<_> = history.baselines.iter().collect();
            baselines.sort_by(|a, b| {
                b.1.average_weekly
                    .partial_cmp(&a.1.average_weekly)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            println!("Largest baselines:");
            for (key, entry) in baselines.iter().take(limit) {
                println!(
                    "- {} averages {:.2} signals over {} scans",
                    key, entry.average_weekly, entry.sample_count
                );
            }
        }
        Commands::Summary { report, out } => {
            let body = std::fs::read_to_string(&report)
                .with_context(|| format!("failed to read {}", report.display()))?;
            let scan: ScanReport = serde_json::from_str(&body)
                .with_context(|| format!("{} is not a scan report", report.display()))?;
            std::fs::write(&out, render_markdown(&scan))?;
            println!("Summary written to {}.", out.display());
        }
    }

    Ok(())
}

fn write_report(path: &std::path::Path, scan: &ScanReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(scan)?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn print_scans<'a>(scans: impl Iterator<Item = &'a ScanRecord>) {
    println!("Recent scans:");
    for scan in scans {
        println!(
            "- {} {} signals, {} hotspots",
            scan.timestamp.format("%Y-%m-%d %H:%M"),
            scan.signal_count,
            scan.hotspot_count
        );
    }
}
