//! vocab - learn English vocabulary from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use vocab_core::MatchTiming;
use vocab_terminal::ai::{GenerateRequest, Style};
use vocab_terminal::commands::{self, WordFields};
use vocab_terminal::{init_logging, AppConfig, AppState};

#[derive(Parser)]
#[command(name = "vocab", about = "English-Vietnamese vocabulary trainer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage vocabulary sets
    Sets {
        #[command(subcommand)]
        action: SetAction,
    },

    /// Manage the words of a set
    Words {
        #[command(subcommand)]
        action: WordAction,
    },

    /// Flip through a set as flashcards
    Study {
        /// Set id (see `vocab sets list`)
        set: String,
    },

    /// Play the matching game on a set
    Match {
        /// Set id (see `vocab sets list`)
        set: String,
    },

    /// Generate a new set with the AI model
    Generate {
        /// Topic or keywords
        topic: String,

        /// Number of words (1-50)
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Your interests, used to personalize the examples
        #[arg(short, long, default_value = "")]
        interests: String,

        /// Tone: default, simple, humorous, academic, kids
        #[arg(short, long, default_value = "default")]
        style: Style,
    },

    /// Chat with the AI tutor
    Chat,
}

#[derive(Subcommand)]
enum SetAction {
    /// List every set
    List,
    /// Create an empty set
    Add { title: String },
    /// Rename a set you created
    Rename { set: String, title: String },
    /// Delete a set you created, with its words
    Delete { set: String },
}

#[derive(Subcommand)]
enum WordAction {
    /// List the words of a set
    List { set: String },
    /// Add a word to a set
    Add {
        set: String,
        #[command(flatten)]
        fields: WordFields,
    },
    /// Edit a word you added
    Edit {
        id: String,
        #[command(flatten)]
        fields: WordFields,
    },
    /// Delete a word you added
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_logging();

    let state = AppState::open(&config)?;
    let mut out = std::io::stdout();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    match cli.command {
        Commands::Sets { action } => match action {
            SetAction::List => commands::sets::list(&state, &mut out)?,
            SetAction::Add { title } => {
                commands::sets::add(&state, &title, &mut out)?;
            }
            SetAction::Rename { set, title } => {
                commands::sets::rename(&state, &set, &title, &mut out)?
            }
            SetAction::Delete { set } => commands::sets::delete(&state, &set, &mut out)?,
        },
        Commands::Words { action } => match action {
            WordAction::List { set } => commands::words::list(&state, &set, &mut out)?,
            WordAction::Add { set, fields } => {
                commands::words::add(&state, &set, fields, &mut out)?;
            }
            WordAction::Edit { id, fields } => {
                commands::words::edit(&state, &id, fields, &mut out)?;
            }
            WordAction::Delete { id } => commands::words::delete(&state, &id, &mut out)?,
        },
        Commands::Study { set } => {
            commands::study::run(&state, &set, &mut input, &mut out).await?;
        }
        Commands::Match { set } => {
            commands::matching::run(&state, &set, MatchTiming::default(), &mut input, &mut out)
                .await?;
        }
        Commands::Generate {
            topic,
            count,
            interests,
            style,
        } => {
            let mut request = GenerateRequest::new(topic, count);
            request.interests = interests;
            request.style = style;
            commands::ai::generate(&state, &request, &mut out).await?;
        }
        Commands::Chat => {
            commands::ai::chat(&state, &mut input, &mut out).await?;
        }
    }

    Ok(())
}
