mod app;
mod config;
mod footer;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use config::AppConfig;
use footer::{Footer, StaticLinks};

#[derive(Parser, Debug)]
#[command(name = "dashfoot")]
#[command(version)]
#[command(about = "Render the dashboard product footer as HTML, JSON or a terminal preview")]
struct Args {
    /// Print the footer as an HTML fragment
    #[arg(long, conflicts_with = "json")]
    html: bool,

    /// Print the footer links as a JSON array
    #[arg(long)]
    json: bool,

    /// Hide the license and version links
    #[arg(long)]
    hide_edition: bool,

    /// Read config from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so --html/--json output stays clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let hide_edition = setup_footer(&config, args.hide_edition);

    if args.html || args.json {
        let footer = Footer::new(config.footer.custom_links.clone(), hide_edition);
        if args.html {
            println!("{}", footer.render(&config));
        } else {
            println!("{}", serde_json::to_string_pretty(&footer.links(&config))?);
        }
        return Ok(());
    }

    run_tui(App::new(config, hide_edition))
}

/// Install configured static links and resolve the hide flag. Runs before any render.
fn setup_footer(config: &AppConfig, hide_edition: bool) -> bool {
    if !config.footer.links.is_empty() {
        footer::set_footer_links_fn(StaticLinks(config.footer.links.clone()));
    }
    hide_edition || config.footer.hide_edition
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc if app.popup == Popup::None => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                _ => app.handle_key(key),
            }
        }
    }
}
