mod config;
mod todo;
mod tui;

use clap::{Parser, Subcommand, Command, CommandFactory};
use clap_complete::{generate, Generator, Shell};
use config::{Config, ConfigError};
use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tui::handlers::KeyEventHandler;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "quicktodo")]
#[command(about = "A single-screen TUI for quick in-memory todo lists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (currently only 'accent_color' is supported)")]
        key: String,
        #[arg(help = "Configuration value, e.g. '#45a29e'")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            if key != "accent_color" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'accent_color' is supported.", key);
                std::process::exit(1);
            }

            if config::parse_hex_color(&value).is_none() {
                eprintln!("Error: '{}' is not a '#rrggbb' color.", value);
                std::process::exit(1);
            }

            let mut config = Config::load_or_default()?;
            config.set_accent_color(value);
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            if key != "accent_color" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'accent_color' is supported.", key);
                std::process::exit(1);
            }

            let config = Config::load_or_default()?;
            println!("{}", config.accent_color);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            println!("accent_color = {}", config.accent_color);
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let mut app = App::new(config);

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
