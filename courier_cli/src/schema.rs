use std::path::PathBuf;

use clap::Subcommand;
use courier_routing::json::schema::{generate_order_schema, generate_reference_data_schema};

use crate::file_utils::write_or_print;

#[derive(Subcommand)]
pub enum SchemaSubcommands {
    /// Schema of the catalog and distance graph file
    ReferenceData {
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// Schema of an order body
    Order {
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(subcommand: SchemaSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        SchemaSubcommands::ReferenceData { out } => {
            write_or_print(out.as_deref(), &generate_reference_data_schema()?)
        }
        SchemaSubcommands::Order { out } => {
            write_or_print(out.as_deref(), &generate_order_schema()?)
        }
    }
}
