use crate::define_index_newtype;

use super::{center::CenterIdx, order::Quantity};

define_index_newtype!(ProductIdx, Product, Quantity);

pub type Mass = f64;

#[derive(Debug, Clone)]
pub struct Product {
    external_id: String,
    center: CenterIdx,
    mass: Mass,
}

impl Product {
    pub fn new(external_id: String, center: CenterIdx, mass: Mass) -> Self {
        Self {
            external_id,
            center,
            mass,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// The center stocking this product.
    pub fn center(&self) -> CenterIdx {
        self.center
    }

    /// Mass of a single unit.
    pub fn mass(&self) -> Mass {
        self.mass
    }
}
