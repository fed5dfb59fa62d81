//! Binary entrypoint for the Treasure Hunter CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--no-color]` - play a game in the terminal (the default)
//! - `init [--force]` - write a starter `treasure-hunter.toml`
//!
//! See the library crate docs for module-level details: `treasure_hunter::`.
use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use treasure_hunter::config::Config;
use treasure_hunter::console::{AnsiTerminal, Console, StdinLines};
use treasure_hunter::game::play;
use treasure_hunter::logutil::init_logging;

#[derive(Parser)]
#[command(name = "treasure-hunter")]
#[command(about = "A text adventure about hunting for treasure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "treasure-hunter.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Fixed RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        no_color: false,
    }) {
        Commands::Init { force } => {
            init_logging(None, cli.verbose);
            if Path::new(&cli.config).exists() && !force {
                bail!("{} already exists (use --force to overwrite)", cli.config);
            }
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::Play { seed, no_color } => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(Some(&config.logging), cli.verbose);
            info!("Starting Treasure Hunter v{}", env!("CARGO_PKG_VERSION"));

            let rng = match seed.or(config.session.seed) {
                Some(seed) => {
                    info!("Using fixed seed {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            let color = !no_color && config.display.color.enabled();

            let stdin = std::io::stdin();
            let mut console = Console::new(
                StdinLines::new(stdin.lock()),
                AnsiTerminal::new(std::io::stdout(), color),
            );
            let outcome = play(&mut console, &config.rules, rng)?;
            info!("Session finished: {:?}", outcome);
        }
    }

    Ok(())
}
