use boston_tour::Catalog;
use boston_tour::core::config::{self, CliOverrides, StartupLog};
use boston_tour::core::state::App;
use boston_tour::tui;
use clap::Parser;
use log::Level;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boston-tour", about = "Browse Boston points of interest in the terminal")]
struct Args {
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let catalog = Catalog::boston();

    if args.dump_catalog {
        let json = serde_json::to_string_pretty(&catalog).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let mut startup_log = StartupLog::new();
    let file_config = config::load_config(&mut startup_log).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Using default configuration");
        startup_log.push(Level::Warn, format!("{e}, using default configuration"));
        config::TourConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
        &mut startup_log,
    );

    // Initialize file logger - the terminal is owned by the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    startup_log.flush();

    log::info!(
        "Boston Tour starting up with {} categories, {} locations",
        catalog.len(),
        catalog.location_count()
    );

    let mut app = App::new(catalog);
    tui::run(&mut app, &resolved)
}
