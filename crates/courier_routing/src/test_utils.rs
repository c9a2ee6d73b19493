use crate::{
    problem::{
        order::{Order, ValidatedOrder},
        reference_data::{ReferenceData, ReferenceDataBuilder},
    },
    solver::quote::Quote,
};

pub fn builtin_reference_data() -> ReferenceData {
    ReferenceData::builtin()
}

/// Hub `HUB` and a single center `X` stocking product `P` of unit mass,
/// `distance` away in both directions.
pub fn single_center_data(distance: f64) -> ReferenceData {
    let mut builder = ReferenceDataBuilder::default();
    builder.set_hub("HUB");
    builder.add_center("HUB");
    builder.add_center("X");
    builder.add_symmetric_edge("X", "HUB", distance);
    builder.add_product("P", "X", 1.0);
    builder.build().unwrap()
}

pub fn validated_order(data: &ReferenceData, items: &[(&str, f64)]) -> ValidatedOrder {
    Order::from_iter(items.iter().copied())
        .validate(data.catalog())
        .unwrap()
}

pub fn route_ids(data: &ReferenceData, quote: &Quote) -> Vec<String> {
    quote
        .route()
        .into_iter()
        .map(|center| data.graph().center(center).external_id().to_owned())
        .collect()
}
