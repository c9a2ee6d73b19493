use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{quote::QuoteArgs, schema::SchemaSubcommands};

mod file_utils;
mod quote;
mod schema;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the pickup route of one or more orders
    #[command(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// Print or write JSON schemas of the input formats
    Schema {
        #[command(subcommand)]
        commands: SchemaSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Quote { args } => quote::run(args)?,
        Commands::Schema { commands } => schema::run(commands)?,
    }

    Ok(())
}
