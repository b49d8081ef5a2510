use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally::audit::AuditLogger;
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::display::DisplayStyle;
use tally::ledger::Ledger;
use tally::ui::Ui;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line tracker for expenses and income",
    long_about = "Tally records expenses and income typed one command per line, \
                  lists them, totals them (optionally between two dates) and \
                  deletes them by position. Run without a subcommand and type \
                  'help' at the prompt to see every command."
)]
struct Cli {
    /// Directory holding config.json and audit.log
    #[arg(long, global = true, env = "TALLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Do not write ledger changes to the audit log
    #[arg(long, global = true)]
    no_audit: bool,

    /// Currency symbol to print amounts with (overrides config.json)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent ledger changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let paths = match cli.data_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }
    if cli.no_audit {
        settings.audit_enabled = false;
    }

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Audit { limit }) => show_audit(&paths, limit)?,
        None => run_interactive(&paths, &settings)?,
    }

    Ok(())
}

fn show_audit(paths: &TallyPaths, limit: usize) -> Result<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries in {}", logger.path().display());
        return Ok(());
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

fn run_interactive(paths: &TallyPaths, settings: &Settings) -> Result<()> {
    let mut ledger = if settings.audit_enabled {
        paths.ensure_directories()?;
        Ledger::with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        Ledger::new()
    };

    let stdout = io::stdout();
    let mut ui = Ui::new(
        stdout.lock(),
        DisplayStyle::from_settings(settings),
        settings.prompt.clone(),
    );

    tally::app::run(io::stdin().lock(), &mut ui, &mut ledger)?;
    Ok(())
}
