use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::{
    catalog::Catalog,
    center::{Center, CenterIdx, Edge},
    distance_graph::{Distance, DistanceGraph},
    product::{Mass, Product},
    tariff::Tariff,
};

#[derive(Debug, Error, PartialEq)]
pub enum ReferenceDataError {
    #[error("No hub was declared")]
    MissingHub,

    #[error("Hub {0} is not a declared center")]
    UnknownHub(String),

    #[error("Center {0} is declared more than once")]
    DuplicateCenter(String),

    #[error("Product {0} is declared more than once")]
    DuplicateProduct(String),

    #[error("Product {product} is stocked at unknown center {center}")]
    UnknownCenter { product: String, center: String },

    #[error("Product {product} is stocked at the hub {hub}")]
    ProductAtHub { product: String, hub: String },

    #[error("Product {product} has invalid mass {mass}")]
    InvalidMass { product: String, mass: Mass },

    #[error("Center {center} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { center: String, neighbor: String },

    #[error("Center {0} lists itself as a neighbor")]
    SelfLoop(String),

    #[error("Center {from} lists neighbor {to} more than once")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge {from} -> {to} has invalid distance {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: Distance,
    },

    #[error("Invalid tariff {0:?}")]
    InvalidTariff(Tariff),
}

/// Catalog, distance graph and tariff, fixed for the lifetime of the process.
#[derive(Debug)]
pub struct ReferenceData {
    catalog: Catalog,
    graph: DistanceGraph,
    tariff: Tariff,
}

impl ReferenceData {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &DistanceGraph {
        &self.graph
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Products A..I spread over C1, C2 and C3, delivered to hub L1.
    pub fn builtin() -> Self {
        let mut builder = ReferenceDataBuilder::default();

        builder.set_hub("L1");

        builder.add_center("C1");
        builder.add_edge("C1", "C2", 4.0);
        builder.add_edge("C1", "L1", 3.0);

        builder.add_center("C2");
        builder.add_edge("C2", "C1", 4.0);
        builder.add_edge("C2", "L1", 2.5);
        builder.add_edge("C2", "C3", 3.0);

        builder.add_center("C3");
        builder.add_edge("C3", "L1", 2.0);
        builder.add_edge("C3", "C2", 3.0);

        builder.add_center("L1");
        builder.add_edge("L1", "C1", 3.0);
        builder.add_edge("L1", "C2", 2.5);
        builder.add_edge("L1", "C3", 2.0);

        for (product, center, mass) in [
            ("A", "C1", 3.0),
            ("B", "C1", 2.0),
            ("C", "C1", 8.0),
            ("D", "C2", 12.0),
            ("E", "C2", 25.0),
            ("F", "C2", 15.0),
            ("G", "C3", 0.5),
            ("H", "C3", 1.0),
            ("I", "C3", 2.0),
        ] {
            builder.add_product(product, center, mass);
        }

        builder
            .build()
            .expect("built-in reference data should be consistent")
    }
}

struct CenterDeclaration {
    id: String,
    neighbors: Vec<(String, Distance)>,
}

struct ProductDeclaration {
    id: String,
    center: String,
    mass: Mass,
}

/// Collects string-keyed declarations and resolves them into indexed tables.
/// Edges may be declared before their target center.
#[derive(Default)]
pub struct ReferenceDataBuilder {
    hub: Option<String>,
    centers: Vec<CenterDeclaration>,
    products: Vec<ProductDeclaration>,
    tariff: Option<Tariff>,
}

impl ReferenceDataBuilder {
    pub fn set_hub(&mut self, hub: impl Into<String>) -> &mut Self {
        self.hub = Some(hub.into());
        self
    }

    pub fn set_tariff(&mut self, tariff: Tariff) -> &mut Self {
        self.tariff = Some(tariff);
        self
    }

    pub fn add_center(&mut self, id: impl Into<String>) -> &mut Self {
        self.centers.push(CenterDeclaration {
            id: id.into(),
            neighbors: Vec::new(),
        });
        self
    }

    /// Adds the `from -> to` direction only. Declares `from` if it is new.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: impl Into<String>,
        distance: Distance,
    ) -> &mut Self {
        let to = to.into();
        match self.centers.iter_mut().rev().find(|center| center.id == from) {
            Some(center) => center.neighbors.push((to, distance)),
            None => {
                let mut center = CenterDeclaration {
                    id: from.to_owned(),
                    neighbors: Vec::new(),
                };
                center.neighbors.push((to, distance));
                self.centers.push(center);
            }
        }
        self
    }

    /// Adds both directions with the same distance.
    pub fn add_symmetric_edge(&mut self, a: &str, b: &str, distance: Distance) -> &mut Self {
        self.add_edge(a, b, distance);
        self.add_edge(b, a, distance);
        self
    }

    pub fn add_product(
        &mut self,
        id: impl Into<String>,
        center: impl Into<String>,
        mass: Mass,
    ) -> &mut Self {
        self.products.push(ProductDeclaration {
            id: id.into(),
            center: center.into(),
            mass,
        });
        self
    }

    pub fn build(self) -> Result<ReferenceData, ReferenceDataError> {
        let tariff = self.tariff.unwrap_or_default();
        if !tariff.is_valid() {
            return Err(ReferenceDataError::InvalidTariff(tariff));
        }

        let mut center_ids: FxHashMap<String, CenterIdx> = FxHashMap::default();
        for (index, declaration) in self.centers.iter().enumerate() {
            if center_ids
                .insert(declaration.id.clone(), CenterIdx::new(index))
                .is_some()
            {
                return Err(ReferenceDataError::DuplicateCenter(declaration.id.clone()));
            }
        }

        let hub_id = self.hub.ok_or(ReferenceDataError::MissingHub)?;
        let hub = *center_ids
            .get(&hub_id)
            .ok_or_else(|| ReferenceDataError::UnknownHub(hub_id.clone()))?;

        let mut centers = Vec::with_capacity(self.centers.len());
        for declaration in self.centers {
            let mut center = Center::new(declaration.id);
            let mut seen = FxHashSet::default();

            for (neighbor, distance) in declaration.neighbors {
                let Some(&to) = center_ids.get(&neighbor) else {
                    return Err(ReferenceDataError::UnknownNeighbor {
                        center: center.external_id().to_owned(),
                        neighbor,
                    });
                };

                if neighbor == center.external_id() {
                    return Err(ReferenceDataError::SelfLoop(neighbor));
                }

                if !seen.insert(to) {
                    return Err(ReferenceDataError::DuplicateEdge {
                        from: center.external_id().to_owned(),
                        to: neighbor,
                    });
                }

                if !distance.is_finite() || distance <= 0.0 {
                    return Err(ReferenceDataError::InvalidDistance {
                        from: center.external_id().to_owned(),
                        to: neighbor,
                        distance,
                    });
                }

                center.push_neighbor(Edge::new(to, distance));
            }

            centers.push(center);
        }

        let mut product_ids = FxHashSet::default();
        let mut products = Vec::with_capacity(self.products.len());
        for declaration in self.products {
            if !product_ids.insert(declaration.id.clone()) {
                return Err(ReferenceDataError::DuplicateProduct(declaration.id));
            }

            let Some(&center) = center_ids.get(&declaration.center) else {
                return Err(ReferenceDataError::UnknownCenter {
                    product: declaration.id,
                    center: declaration.center,
                });
            };

            if center == hub {
                return Err(ReferenceDataError::ProductAtHub {
                    product: declaration.id,
                    hub: hub_id,
                });
            }

            if !declaration.mass.is_finite() || declaration.mass <= 0.0 {
                return Err(ReferenceDataError::InvalidMass {
                    product: declaration.id,
                    mass: declaration.mass,
                });
            }

            products.push(Product::new(declaration.id, center, declaration.mass));
        }

        Ok(ReferenceData {
            catalog: Catalog::new(products),
            graph: DistanceGraph::new(centers, center_ids, hub),
            tariff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> ReferenceDataBuilder {
        let mut builder = ReferenceDataBuilder::default();
        builder.set_hub("HUB");
        builder.add_center("HUB");
        builder.add_center("X");
        builder.add_symmetric_edge("X", "HUB", 1.0);
        builder.add_product("P", "X", 1.0);
        builder
    }

    #[test]
    fn test_builtin_is_consistent() {
        let data = ReferenceData::builtin();

        assert_eq!(data.graph().num_centers(), 4);
        assert_eq!(data.graph().center(data.graph().hub()).external_id(), "L1");
        assert_eq!(data.catalog().len(), 9);
        assert_eq!(*data.tariff(), Tariff::default());
    }

    #[test]
    fn test_edge_may_precede_its_target() {
        let mut builder = ReferenceDataBuilder::default();
        builder.set_hub("HUB");
        builder.add_edge("X", "HUB", 2.0);
        builder.add_edge("HUB", "X", 2.0);
        builder.add_product("P", "X", 1.0);

        let data = builder.build().unwrap();
        let x = data.graph().find("X").unwrap();

        assert_eq!(data.graph().distance_to_hub(x), Some(2.0));
    }

    #[test]
    fn test_missing_hub() {
        let mut builder = ReferenceDataBuilder::default();
        builder.add_center("X");

        assert_eq!(builder.build().err(), Some(ReferenceDataError::MissingHub));

        let mut builder = minimal_builder();
        builder.set_hub("NOWHERE");
        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::UnknownHub("NOWHERE".to_owned()))
        );
    }

    #[test]
    fn test_product_at_hub_is_rejected() {
        let mut builder = minimal_builder();
        builder.add_product("Q", "HUB", 1.0);

        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::ProductAtHub {
                product: "Q".to_owned(),
                hub: "HUB".to_owned(),
            })
        );
    }

    #[test]
    fn test_unknown_product_center() {
        let mut builder = minimal_builder();
        builder.add_product("Q", "Y", 1.0);

        assert!(matches!(
            builder.build(),
            Err(ReferenceDataError::UnknownCenter { .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        let mut builder = minimal_builder();
        builder.add_product("Q", "X", 0.0);
        assert!(matches!(
            builder.build(),
            Err(ReferenceDataError::InvalidMass { .. })
        ));

        let mut builder = minimal_builder();
        builder.add_center("Y");
        builder.add_edge("HUB", "Y", -1.0);
        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::InvalidDistance {
                from: "HUB".to_owned(),
                to: "Y".to_owned(),
                distance: -1.0,
            })
        );

        let mut builder = minimal_builder();
        builder.add_edge("HUB", "X", 2.0);
        assert!(matches!(
            builder.build(),
            Err(ReferenceDataError::DuplicateEdge { .. })
        ));

        let mut builder = minimal_builder();
        builder.add_center("Y");
        builder.add_edge("Y", "HUB", f64::NAN);
        assert!(matches!(
            builder.build(),
            Err(ReferenceDataError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_duplicates_and_loops() {
        let mut builder = minimal_builder();
        builder.add_product("P", "X", 2.0);
        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::DuplicateProduct("P".to_owned()))
        );

        let mut builder = minimal_builder();
        builder.add_edge("X", "X", 1.0);
        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::SelfLoop("X".to_owned()))
        );

        let mut builder = minimal_builder();
        builder.add_edge("X", "Y", 1.0);
        assert_eq!(
            builder.build().err(),
            Some(ReferenceDataError::UnknownNeighbor {
                center: "X".to_owned(),
                neighbor: "Y".to_owned(),
            })
        );
    }
}
