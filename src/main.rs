//! rxgithub-link: CLI that rewrites GitHub links to an rxgithub mirror
//!
//! The mirror serves preview cards for source files when the link is shared.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use rxgithub_link::commands;
use rxgithub_link::config::Mirror;
use rxgithub_link::logging;

#[derive(Parser)]
#[command(name = "rxgithub-link")]
#[command(about = "Rewrite GitHub links to an rxgithub mirror", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a GitHub link and copy it to the clipboard
    Copy {
        /// Link to rewrite (read from stdin if omitted)
        url: Option<String>,

        /// Mirror to rewrite to
        #[arg(long, short, value_enum, default_value_t = Mirror::Rxgithub)]
        mirror: Mirror,

        /// Show what would be copied without touching the clipboard
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print only the rewritten link (for scripts)
        #[arg(short, long)]
        print: bool,

        /// Keep running until another application takes over the clipboard
        /// (needed on Linux without a clipboard manager)
        #[arg(short, long, conflicts_with = "dry_run")]
        wait: bool,
    },

    /// Show how a link would be rewritten
    Inspect {
        /// Link to inspect (read from stdin if omitted)
        url: Option<String>,

        /// Mirror to rewrite to
        #[arg(long, short, value_enum, default_value_t = Mirror::Rxgithub)]
        mirror: Mirror,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in mirrors
    Mirrors,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Copy {
            url,
            mirror,
            dry_run,
            print,
            wait,
        } => {
            if dry_run && !print {
                println!("{}", "(DRY-RUN MODE - clipboard will not be touched)".blue());
            }
            if wait && !print {
                println!(
                    "{}",
                    "(WAIT MODE - holding the clipboard until it is replaced)".blue()
                );
            }
            let options = commands::copy::CopyOptions {
                mirror,
                dry_run,
                print,
                wait,
            };
            commands::copy::execute(url, options)?;
        }

        Commands::Inspect { url, mirror, json } => {
            commands::inspect::execute(url, mirror, json)?;
        }

        Commands::Mirrors => {
            println!("{}", commands::mirrors::execute());
        }
    }

    Ok(())
}
