use std::io::{self, IsTerminal};

use askbar::app::App;
use askbar::cli::{Args, format_filtered};
use askbar::config::{Config, ConfigResult, load_config};
use askbar::logging;
use askbar::suggestions::{CandidateReader, CandidateSource, SuggestionSource, sample};
use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());
    args.apply_overrides(&mut config);

    let source = resolve_source(&args, &config)?;

    // Headless: print matches and skip the UI entirely
    if let Some(query) = &args.filter {
        if let Some(warning) = &warning {
            eprintln!("askbar: {}", warning);
        }
        print!("{}", format_filtered(&source.suggest(query)));
        return Ok(());
    }

    let mut app = App::new(source, &config);
    if let Some(warning) = warning {
        app.set_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = io::stdout()
        .execute(EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|_| run(terminal, &mut app));

    let _ = io::stdout().execute(DisableMouseCapture);
    ratatui::restore();
    result?;

    if let Some(text) = app.last_committed() {
        println!("{}", text);
    }

    Ok(())
}

/// FILE, then piped stdin, then the config file, then the built-in samples
fn resolve_source(args: &Args, config: &Config) -> Result<CandidateSource> {
    if let Some(path) = &args.file {
        return Ok(CandidateReader::read_file(path)?);
    }

    if !io::stdin().is_terminal() {
        if let Some(source) = CandidateReader::read_stdin()? {
            return Ok(source);
        }
    }

    Ok(config
        .suggestions
        .source()
        .unwrap_or_else(sample::sample_groups))
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
