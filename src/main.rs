//! portfolio-nav - hover-intent sidebar navigation
//!
//! Entry point for the CLI binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use portfolio_nav::config::Config;
use portfolio_nav::kanban::KanbanBoard;
use portfolio_nav::nav::Sidebar;
use portfolio_nav::runtime::{RuntimeError, SidebarRuntime};
use portfolio_nav::scenario::{self, Scenario};
use portfolio_nav::utils::format_user_error;

/// Command-line arguments for portfolio-nav
#[derive(Parser, Debug)]
#[command(name = "portfolio-nav")]
#[command(version, about = "Hover-intent sidebar navigation", long_about = None)]
pub struct Args {
    /// Configuration file path (default: <config dir>/portfolio-nav/config.toml)
    #[arg(short, long, global = true, env = "PORTFOLIO_NAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the dismissal delay used when heading toward the submenu (ms)
    #[arg(long, global = true, env = "PORTFOLIO_NAV_TOWARD_SUBMENU_MS")]
    pub toward_submenu_ms: Option<u64>,

    /// Override the dismissal delay used otherwise (ms)
    #[arg(long, global = true, env = "PORTFOLIO_NAV_AWAY_MS")]
    pub away_ms: Option<u64>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Write logs to file (in addition to stderr)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scenario on a synthetic clock and print the state timeline
    Replay {
        /// Scenario TOML file
        scenario: PathBuf,
        /// Print the timeline as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a scenario in real time through the async runtime
    Run {
        /// Scenario TOML file
        scenario: PathBuf,
    },

    /// Print the sidebar layout
    Sidebar {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the demo kanban board
    Board {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&args)?;

    info!("════════════════════════════════════════════════════════");
    info!("  portfolio-nav v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {} {}", env!("BUILD_DATE"), env!("BUILD_TIME"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    info!("════════════════════════════════════════════════════════");

    if let Err(e) = run(args).await {
        eprintln!("{}", format_user_error(&e));
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?
        .with_overrides(args.toward_submenu_ms, args.away_ms);
    config.validate()?;

    info!("Configuration loaded successfully");
    debug!("Config: {:?}", config);

    match args.command {
        Command::Replay { scenario, json } => replay(&config, &scenario, json),
        Command::Run { scenario } => run_live(&config, &scenario).await,
        Command::Sidebar { json } => show_sidebar(&config, json),
        Command::Board { json } => show_board(json),
    }
}

fn load_scenario(config: &Config, path: &Path) -> Result<Scenario> {
    let scenario = Scenario::load(path)?;
    scenario.validate(&config.nav)?;
    Ok(scenario)
}

fn replay(config: &Config, path: &Path, json: bool) -> Result<()> {
    let scenario = load_scenario(config, path)?;
    let mut sidebar = Sidebar::new(config.nav.clone(), config.menu.clone());
    let timeline = scenario::replay(&mut sidebar, &scenario);

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    if let Some(name) = &scenario.name {
        println!("Scenario: {}", name);
    }
    for entry in &timeline {
        println!("{}", entry);
    }
    println!();
    print!("{}", sidebar.view());
    debug!("Stats: {:?}", sidebar.controller().stats());
    Ok(())
}

async fn run_live(config: &Config, path: &Path) -> Result<()> {
    let scenario = load_scenario(config, path)?;
    let sidebar = Sidebar::new(config.nav.clone(), config.menu.clone());
    let (handle, task) = SidebarRuntime::spawn(sidebar, &config.runtime);

    let start = tokio::time::Instant::now();
    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            println!("{:>6}ms  {}", start.elapsed().as_millis(), snapshot);
        }
    });

    let settle = Duration::from_millis(
        config
            .menu
            .toward_submenu_delay_ms
            .max(config.menu.away_delay_ms)
            + 10,
    );

    let feed = async {
        for scheduled in &scenario.events {
            tokio::time::sleep_until(start + Duration::from_millis(scheduled.at_ms)).await;
            debug!("Sending {} at {}ms", scheduled.event.name(), scheduled.at_ms);
            handle.send(scheduled.event.clone()).await?;
        }
        // Let the last pending dismissal fire
        tokio::time::sleep(settle).await;
        Ok::<(), RuntimeError>(())
    };

    tokio::select! {
        result = feed => result.context("Failed to deliver scenario events")?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }

    drop(handle);
    let sidebar = task.await.context("Sidebar runtime task failed")?;
    printer.await.context("Snapshot printer task failed")?;

    println!();
    print!("{}", sidebar.view());
    info!("Stats: {:?}", sidebar.controller().stats());
    Ok(())
}

fn show_sidebar(config: &Config, json: bool) -> Result<()> {
    let sidebar = Sidebar::new(config.nav.clone(), config.menu.clone());
    if json {
        println!("{}", serde_json::to_string_pretty(&sidebar.view())?);
    } else {
        print!("{}", sidebar.view());
    }
    Ok(())
}

fn show_board(json: bool) -> Result<()> {
    let board = KanbanBoard::demo();
    if json {
        println!("{}", serde_json::to_string_pretty(board.columns())?);
    } else {
        print!("{}", board);
    }
    Ok(())
}

fn init_logging(args: &Args) -> Result<Option<WorkerGuard>> {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("portfolio_nav={},warn", log_level))
    });

    let stderr_layer = match args.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    // If log file is specified, write to both stderr and file
    let (file_layer, guard) = match &args.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = match args.log_format {
                LogFormat::Json => tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed(),
                _ => tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed(),
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    if let Some(path) = &args.log_file {
        info!("Logging to file: {}", path.display());
    }

    Ok(guard)
}
