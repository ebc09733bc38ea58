use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::bail;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{IsTerminal, stdin, stdout};
use std::path::PathBuf;

use multicheck::app::{App, Settings};
use multicheck::config::{self, OutputFormat};
use multicheck::multi_check::ColumnOrder;
use multicheck::options_reader::OptionsReader;

/// Interactive multi-select checklist
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive multi-select checklist with a Select All toggle"
)]
struct Args {
    /// JSON file with an array of {"label", "value"} objects (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Label shown above the checkboxes
    #[arg(long)]
    label: Option<String>,

    /// Number of columns
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    columns: Option<u8>,

    /// Comma-separated values selected on start
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<String>>,

    /// How options are distributed across columns
    #[arg(long, value_enum)]
    order: Option<ColumnOrder>,

    /// How the confirmed selection is printed
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

impl Args {
    /// Overlay CLI flags on top of config file settings
    fn settings(&self, config: &config::Config) -> Settings {
        let mut settings = Settings::from_config(config);
        if let Some(label) = &self.label {
            settings.label = Some(label.clone());
        }
        if let Some(columns) = self.columns {
            settings.columns = columns as usize;
        }
        if let Some(order) = self.order {
            settings.order = order;
        }
        if let Some(output) = self.output {
            settings.output_format = output;
        }
        settings.values = self.values.clone();
        settings
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/multicheck-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if args.input.is_none() && stdin().is_terminal() {
        bail!("No options given. Pass a JSON file or pipe a JSON array on stdin.");
    }

    // Read before touching the terminal so errors print normally
    let options = OptionsReader::read_options(args.input.as_deref())?;

    let config_result = config::load_config();
    let settings = args.settings(&config_result.config);

    let mut app = App::new(options, settings);
    if let Some(warning) = &config_result.warning {
        app.show_warning(warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(output) = app.output()? {
        println!("{}", output);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== MULTICHECK DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/multicheck-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== MULTICHECK DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
