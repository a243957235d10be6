use std::{fs::File, io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::{Config, LevelFilter, WriteLogger};

use rosterview::event_source::KeyboardEventSource;
use rosterview::pagination::ItemsPerPage;
use rosterview::panic_handler::initialize_panic_handler;
use rosterview::records::{load_records, sample_records};
use rosterview::{App, run_app_with_event_source, settings};

#[derive(Parser, Debug)]
#[command(version, about = "Browse a players roster one page at a time")]
struct Args {
    /// JSON file holding an array of player records
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Number of generated players when no records file is given
    #[arg(long, default_value_t = 240)]
    sample: usize,

    /// Page size to start with (10, 20 or 50); overrides the config file
    #[arg(short, long)]
    items_per_page: Option<ItemsPerPage>,

    #[arg(long, default_value = "rosterview.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    WriteLogger::init(
        args.log_level,
        Config::default(),
        File::create(&args.log_file)
            .with_context(|| format!("Failed to create log file {}", args.log_file.display()))?,
    )?;

    info!("Starting rosterview");
    settings::load_settings();

    let mut config = settings::current();
    if let Some(items_per_page) = args.items_per_page {
        config.items_per_page = items_per_page;
    }

    let (records, load_error) = match &args.records {
        Some(path) => match load_records(path) {
            Ok(records) => (records, None),
            Err(e) => {
                error!("{e:#}");
                (Vec::new(), Some(format!("{e:#}")))
            }
        },
        None => (sample_records(args.sample), None),
    };

    let mut app = App::with_settings(records, &config);
    if let Some(message) = load_error {
        app.toasts.error(message);
    }

    initialize_panic_handler();
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app_with_event_source(&mut terminal, &mut app, &mut KeyboardEventSource);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    settings::set_items_per_page(app.items_per_page());
    settings::save_settings();

    if let Err(err) = res {
        error!("Application error: {err:?}");
        println!("{err:?}");
    }

    info!("Shutting down rosterview");
    Ok(())
}
