pub mod schema;
pub mod types;

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use tracing::info;

use crate::problem::reference_data::ReferenceData;

use self::types::JsonReferenceData;

/// Environment variable naming a reference data file.
pub const REFERENCE_DATA_ENV_VAR: &str = "COURIER_REFERENCE_DATA";

pub fn load_reference_data<P: AsRef<Path>>(path: P) -> Result<ReferenceData, anyhow::Error> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Could not open reference data {}", path.display()))?;

    let json: JsonReferenceData = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse reference data {}", path.display()))?;

    let reference_data = json
        .build()
        .with_context(|| format!("Inconsistent reference data {}", path.display()))?;

    info!(
        "Loaded {} products over {} centers from {}",
        reference_data.catalog().len(),
        reference_data.graph().num_centers(),
        path.display()
    );

    Ok(reference_data)
}

/// Reads `path` when given, otherwise falls back to [`ReferenceData::builtin`].
pub fn load_reference_data_or_builtin(path: Option<&Path>) -> Result<ReferenceData, anyhow::Error> {
    match path {
        Some(path) => load_reference_data(path),
        None => {
            info!("No reference data file given, using the built-in tables");
            Ok(ReferenceData::builtin())
        }
    }
}
