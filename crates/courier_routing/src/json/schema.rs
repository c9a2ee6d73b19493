use schemars::schema_for;

use crate::{json::types::JsonReferenceData, problem::order::Order};

pub fn generate_reference_data_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(JsonReferenceData))
}

pub fn generate_order_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Order))
}
