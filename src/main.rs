mod app;
mod domain;
mod errors;
mod input;
mod persistence;
mod repository;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_store_dir, init_local_store, TaskStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use repository::TaskRepository;
use std::io;

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A simple, calm terminal task list with local persistence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .ticklist directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .ticklist directory
            let store_dir = init_local_store()?;
            println!("Initialized ticklist directory: {}", store_dir.display());
            println!();
            println!("Ticklist will now use this local directory for task storage.");
            println!("Run 'ticklist' to start managing tasks.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure the store directory exists
    let store_dir = ensure_store_dir()?;

    // Show which directory we're using
    eprintln!("Using ticklist directory: {}", store_dir.display());

    // Load the collection (first run seeds it; a corrupt blob degrades to
    // sample data plus a notice)
    let repo = TaskRepository::open(TaskStore::new(&store_dir));
    let mut app = AppState::new(repo);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Expire notices and finalize a due submission
        app.tick();
    }
}
