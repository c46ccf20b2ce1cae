use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, path::PathBuf};

use refinance::{
    app::App, config::DEFAULT_CONFIG_PATH, logger, ui::ui, Config, RefinanceForm, RefinanceReport,
};

#[derive(Parser, Debug)]
#[command(name = "refinance")]
#[command(about = "Compare monthly payments before and after a mortgage refinance")]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute payments and savings without the interactive form
    Calculate {
        #[arg(long, allow_hyphen_values = true)]
        current_amount: String,
        #[arg(long, allow_hyphen_values = true)]
        current_rate: String,
        #[arg(long, allow_hyphen_values = true)]
        remaining_term: String,
        #[arg(long, allow_hyphen_values = true)]
        new_amount: String,
        #[arg(long, allow_hyphen_values = true)]
        new_rate: String,
        #[arg(long, allow_hyphen_values = true)]
        new_term: String,
        #[arg(long, help = "Print the full report as JSON")]
        json: bool,
    },
    /// Write a default config file
    InitConfig {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config)?;

    match cli.command {
        None => {
            logger::init_file_logger(&cfg.logging, cli.verbose)?;
            tracing::info!(config = %cli.config.display(), "starting refinance calculator");
            run_tui(App::new(cfg.export_path))
        }
        Some(Command::Calculate {
            current_amount,
            current_rate,
            remaining_term,
            new_amount,
            new_rate,
            new_term,
            json,
        }) => {
            logger::init_cli_logger(&cfg.logging, cli.verbose);
            let form = RefinanceForm {
                current_loan_amount: current_amount,
                current_interest_rate: current_rate,
                remaining_term,
                new_loan_amount: new_amount,
                new_interest_rate: new_rate,
                new_loan_term: new_term,
            };
            tracing::debug!(?form, "calculating from command line");
            let report = RefinanceReport::from_form(&form);
            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
        Some(Command::InitConfig { force }) => {
            logger::init_cli_logger(&cfg.logging, cli.verbose);
            Config::write_default(&cli.config, force)?;
            tracing::info!(path = %cli.config.display(), "wrote default config");
            println!("Wrote {}", cli.config.display());
            Ok(())
        }
    }
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("terminal loop failed: {:?}", err);
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases as well as presses.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            tracing::debug!(code = ?key.code, "key");
            if app.handle_key(key) {
                tracing::info!("exiting");
                return Ok(());
            }
        }
    }
}
