//! Naela CLI - drive the storefront cart from a terminal.
//!
//! Commands:
//! - `naela parse-price` - Parse catalog price text
//! - `naela format` - Format an amount for display
//! - `naela compose` - Build the order message and link from an order file
//! - `naela session` - Interactive cart session

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ComposeArgs, FormatArgs, ParsePriceArgs, SessionArgs};

/// Naela CLI - cart, checkout and order handoff for the batik storefront
#[derive(Parser)]
#[command(name = "naela")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse catalog price text into whole Rupiah
    ParsePrice(ParsePriceArgs),

    /// Format an amount the way the cart displays it
    Format(FormatArgs),

    /// Compose the checkout message for an order file
    Compose(ComposeArgs),

    /// Start an interactive cart session
    Session(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = naela_observability::init(&logging) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::ParsePrice(args) => commands::price::parse(args, &ctx),
        Commands::Format(args) => commands::price::format(args, &ctx),
        Commands::Compose(args) => commands::compose::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
