use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use yearcal::autostart;
use yearcal::clock::{Clock, SystemClock};
use yearcal::commands;
use yearcal::config::{self, Config};
use yearcal::events::EventSource;
use yearcal::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "yearcal")]
#[command(about = "Year-at-a-glance calendar", long_about = "Year-at-a-glance calendar with a per-day events list\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Events file (default: events.toml in the XDG data directory)
    #[arg(short = 'E', long, global = true)]
    events_file: Option<PathBuf>,

    /// Use built-in sample events instead of the events file
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a whole year, three months per row
    Year {
        /// Year to display (optional, defaults to the year of the selected date)
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,

        /// Date to mark as selected, in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display the events of one day
    Events {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List calendars and whether they are shown
    Calendars,
    /// Print today's date for a status bar
    Status {
        /// strftime format of the printed date
        #[arg(
            short,
            long,
            default_value = commands::status::DEFAULT_STATUS_FORMAT,
            value_parser = commands::status::parse_status_format
        )]
        format: String,

        /// Keep running and print a new line after every midnight
        #[arg(short, long)]
        watch: bool,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    match cfg.events_path() {
        Some(path) => println!("events_file: {}", path.display()),
        None => println!("events_file: (unknown)"),
    }
    if cfg.enabled_calendars.is_empty() {
        println!("enabled_calendars: (all)");
    } else {
        let ids: Vec<&str> = cfg.enabled_calendars.iter().map(String::as_str).collect();
        println!("enabled_calendars: {}", ids.join(", "));
    }
    println!("max_events: {}", cfg.max_events());
    println!("show_all_day_events: {}", cfg.show_all_day_events);
    println!(
        "launch_at_login: {} (autostart entry {})",
        cfg.launch_at_login,
        if autostart::is_enabled() { "present" } else { "absent" }
    );
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("accent_fg: {:?}", cfg.display.accent_fg);
    println!("text_fg: {:?}", cfg.display.text_fg);
    println!("muted_fg: {:?}", cfg.display.muted_fg);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Pick the event source for interactive mode
#[allow(unused_variables)]
fn create_source(cli: &Cli, config: &Config, clock: &dyn Clock) -> anyhow::Result<Arc<dyn EventSource>> {
    #[cfg(feature = "development")]
    if cli.demo {
        return Ok(Arc::new(yearcal::dev::demo_source::demo_source(clock.today())));
    }
    Ok(Arc::new(commands::open_store(config)?))
}

/// Run TUI mode against the configured event source
async fn run_tui_mode(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let source = create_source(cli, &config, clock.as_ref())?;
    tui::run(config, source, clock).await?;
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Year { year, date } => {
            commands::year::run(&SystemClock, &config.display, year, date)
        }
        Commands::Events { date } => {
            commands::events::run(config, &SystemClock, date).await
        }
        Commands::Calendars => {
            commands::calendars::run(config).await
        }
        Commands::Status { format, watch } => {
            commands::status::run(Arc::new(SystemClock), &format, watch).await
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(events_file) = cli.events_file.clone() {
        config.events_file = Some(events_file);
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command.take() else {
        if let Err(e) = run_tui_mode(&cli, config).await {
            eprintln!("Error running TUI: {:#}", e);
            tracing::error!("TUI failed: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(&config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
