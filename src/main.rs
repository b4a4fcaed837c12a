mod app;

use app::App;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use flashcards_srs::{ResponseQuality, SchedulerConfig};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "flashcards", about = "Spaced repetition study from the command line", version)]
struct Cli {
    /// Scheduler config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Study as if it were this moment (RFC 3339, with offset)
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an empty deck file
    Init {
        deck: PathBuf,
        #[arg(long, default_value = "My Deck")]
        name: String,
    },

    /// Add a new card to a deck
    Add {
        deck: PathBuf,
        term: String,
        definition: String,
    },

    /// Show the next card to study
    Next { deck: PathBuf },

    /// Record a response (again, hard, good or perfect) for a card
    Grade {
        deck: PathBuf,
        card: Uuid,
        quality: ResponseQuality,
    },

    /// Show the interval each response would give a card
    Preview { deck: PathBuf, card: Uuid },

    /// Count the new, learning and review cards available now
    Stats { deck: PathBuf },

    /// Recompute cached card states
    Reconcile { deck: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)?,
        None => SchedulerConfig::default(),
    };
    let app = App::new(config, cli.now.unwrap_or_else(Utc::now));

    match cli.command {
        Command::Init { deck, name } => app.init(&deck, &name)?,
        Command::Add {
            deck,
            term,
            definition,
        } => {
            app.add(&deck, &term, &definition)?;
        }
        Command::Next { deck } => {
            app.next(&deck)?;
        }
        Command::Grade {
            deck,
            card,
            quality,
        } => {
            app.grade(&deck, card, quality)?;
        }
        Command::Preview { deck, card } => {
            app.preview(&deck, card)?;
        }
        Command::Stats { deck } => {
            app.stats(&deck)?;
        }
        Command::Reconcile { deck } => {
            app.reconcile(&deck)?;
        }
    }
    Ok(())
}
