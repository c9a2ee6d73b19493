use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use courier_routing::{
    json::{REFERENCE_DATA_ENV_VAR, load_reference_data_or_builtin},
    problem::{order::Order, reference_data::ReferenceData},
    solver::{quote::Quote, routing_engine::RoutingEngine},
};
use tracing::info;

use crate::file_utils::{read_folder, read_json};

#[derive(Args)]
pub struct QuoteArgs {
    /// An order file, or a folder of order files
    #[arg(short, long)]
    order: PathBuf,

    /// Reference data file, defaults to $COURIER_REFERENCE_DATA then to the built-in tables
    #[arg(short, long, env = REFERENCE_DATA_ENV_VAR)]
    reference_data: Option<PathBuf>,
}

pub fn run(args: QuoteArgs) -> Result<(), anyhow::Error> {
    let reference_data = load_reference_data_or_builtin(args.reference_data.as_deref())?;
    let engine = RoutingEngine::new(&reference_data);

    let paths = if args.order.is_file() {
        vec![args.order]
    } else {
        read_folder(&args.order)?
    };

    for path in paths {
        let order: Order = read_json(&path)?;
        let validated = order.validate(reference_data.catalog())?;
        let quote = engine.quote(&validated)?;

        info!("{}: minimum cost = {}", path.display(), quote.total_cost());
        println!("{}", legs_table(&reference_data, &quote));
    }

    Ok(())
}

fn legs_table(reference_data: &ReferenceData, quote: &Quote) -> Table {
    let graph = reference_data.graph();
    let mut table = Table::new();

    table.set_header(vec!["From", "To", "Distance", "Mass", "Rate", "Cost"]);
    for leg in quote.legs() {
        table.add_row(vec![
            graph.center(leg.from).external_id().to_owned(),
            graph.center(leg.to).external_id().to_owned(),
            leg.distance.to_string(),
            leg.mass.to_string(),
            leg.rate.to_string(),
            leg.cost.to_string(),
        ]);
    }
    table.add_row(vec![
        String::from("Total"),
        String::new(),
        quote.total_distance().to_string(),
        String::new(),
        String::new(),
        quote.total_cost().to_string(),
    ]);

    table
}
