#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};

use zenfield::config::AppConfig;
use zenfield::core::session::ZenMode;
use zenfield::ui::app::App;

#[derive(Parser)]
#[command(name = "zenfield", version, about = "A calm terminal mindfulness companion")]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session mode to start in (calm, focus, gratitude)
    #[arg(short, long)]
    mode: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut config = if let Some(ref config_path) = cli.config {
        AppConfig::load_from(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: could not load config: {e}");
            AppConfig::default()
        })
    } else {
        AppConfig::load().unwrap_or_else(|_| AppConfig::default())
    };

    if let Some(mode) = cli.mode {
        match mode.parse::<ZenMode>() {
            Ok(mode) => config.startup_mode = mode,
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    // Install panic hook that restores terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));

    let mut terminal = ratatui::init();
    crossterm::execute!(io::stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(&mut terminal);
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
