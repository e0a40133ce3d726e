use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quizdeck::{App, Config};
use quizdeck::bank::{catalog, loader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chapters in the catalog and their availability
    Chapters,
    /// Validate a question CSV file
    Check {
        /// Path to the CSV file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chapters) => {
            let config = Config::load()?;
            let questions_dir = config.questions_dir()?;
            println!("Questions directory: {}", questions_dir.display());
            for chapter in catalog::chapters() {
                match chapter.source_path(&questions_dir) {
                    Some(path) if path.exists() => {
                        println!("  {} [{}]", chapter.title, path.display());
                    }
                    Some(path) => {
                        println!("  {} [missing: {}]", chapter.title, path.display());
                    }
                    None => {
                        println!("  {} (not yet available)", chapter.title);
                    }
                }
            }
        }
        Some(Commands::Check { file }) => {
            let records = loader::parse_source(&file)
                .with_context(|| format!("Invalid question source {}", file.display()))?;
            println!("OK: {} questions in {}", records.len(), file.display());
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run()?;
        }
    }

    Ok(())
}
