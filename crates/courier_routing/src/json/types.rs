use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::problem::{
    reference_data::{ReferenceData, ReferenceDataBuilder, ReferenceDataError},
    tariff::Tariff,
};

/// On-disk form of the catalog and distance graph. Lists are used instead of
/// maps so that declaration order survives a round trip.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "ReferenceData")]
pub struct JsonReferenceData {
    pub hub: String,
    pub products: Vec<JsonProduct>,
    pub centers: Vec<JsonCenter>,
    pub tariff: Option<Tariff>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Product")]
pub struct JsonProduct {
    pub id: String,
    pub center: String,
    pub mass: f64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Center")]
pub struct JsonCenter {
    pub id: String,
    #[serde(default)]
    pub neighbors: Vec<JsonNeighbor>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Neighbor")]
pub struct JsonNeighbor {
    pub id: String,
    pub distance: f64,
}

impl JsonReferenceData {
    #[instrument(skip_all, level = "debug")]
    pub fn build(self) -> Result<ReferenceData, ReferenceDataError> {
        let mut builder = ReferenceDataBuilder::default();

        builder.set_hub(self.hub);

        if let Some(tariff) = self.tariff {
            builder.set_tariff(tariff);
        }

        for center in self.centers {
            builder.add_center(center.id.as_str());
            for neighbor in center.neighbors {
                builder.add_edge(&center.id, neighbor.id, neighbor.distance);
            }
        }

        for product in self.products {
            builder.add_product(product.id, product.center, product.mass);
        }

        builder.build()
    }
}

impl From<&ReferenceData> for JsonReferenceData {
    fn from(value: &ReferenceData) -> Self {
        let graph = value.graph();

        JsonReferenceData {
            hub: graph.center(graph.hub()).external_id().to_owned(),
            products: value
                .catalog()
                .products()
                .iter()
                .map(|product| JsonProduct {
                    id: product.external_id().to_owned(),
                    center: graph.center(product.center()).external_id().to_owned(),
                    mass: product.mass(),
                })
                .collect(),
            centers: graph
                .centers()
                .iter()
                .map(|center| JsonCenter {
                    id: center.external_id().to_owned(),
                    neighbors: center
                        .neighbors()
                        .iter()
                        .map(|edge| JsonNeighbor {
                            id: graph.center(edge.to()).external_id().to_owned(),
                            distance: edge.distance(),
                        })
                        .collect(),
                })
                .collect(),
            tariff: Some(*value.tariff()),
        }
    }
}
