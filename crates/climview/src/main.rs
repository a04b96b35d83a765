use std::path::PathBuf;

use clap::Parser;
use climview::data::storage::DataDirectory;
use climview::{App, init_logging};
use climview_core::Region;

#[derive(Parser, Debug)]
#[command(name = "climview")]
#[command(about = "A terminal dashboard for regional climate projections")]
struct Args {
    /// Path to the data directory (default: ~/.climview/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Region to open with, overriding the saved selection
    #[arg(short, long)]
    region: Option<Region>,

    /// Target year to open with, clamped to 2023..=2050
    #[arg(short, long)]
    year: Option<i32>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);
    if let Some(region) = args.region {
        app.state_mut().select_region(region);
    }
    if let Some(year) = args.year {
        app.state_mut().set_year(year);
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
