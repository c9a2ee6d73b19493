use courier_routing::problem::reference_data::ReferenceData;

pub struct AppState {
    pub reference_data: ReferenceData,
}
