use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{catalog::Catalog, product::ProductIdx};

pub type Quantity = f64;

#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid product identifiers: {}", .0.join(", "))]
    UnknownProducts(Vec<String>),

    #[error("Negative quantities not allowed: {}", .0.join(", "))]
    NegativeQuantities(Vec<String>),

    #[error("Quantities must be finite numbers: {}", .0.join(", "))]
    NonFiniteQuantities(Vec<String>),
}

/// Requested quantity per product identifier, as received from a caller.
/// Products left out are not requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Order(BTreeMap<String, Quantity>);

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: impl Into<String>, quantity: Quantity) -> &mut Self {
        self.0.insert(product.into(), quantity);
        self
    }

    pub fn quantity(&self, product: &str) -> Option<Quantity> {
        self.0.get(product).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.0.iter().map(|(product, &quantity)| (product.as_str(), quantity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks the order against `catalog`. Unknown products are reported
    /// before negative quantities, which are reported before non-finite ones.
    pub fn validate(&self, catalog: &Catalog) -> Result<ValidatedOrder, OrderError> {
        let unknown = self.products_where(|product, _| !catalog.contains(product));
        if !unknown.is_empty() {
            return Err(OrderError::UnknownProducts(unknown));
        }

        let negative = self.products_where(|_, quantity| quantity < 0.0);
        if !negative.is_empty() {
            return Err(OrderError::NegativeQuantities(negative));
        }

        let non_finite = self.products_where(|_, quantity| !quantity.is_finite());
        if !non_finite.is_empty() {
            return Err(OrderError::NonFiniteQuantities(non_finite));
        }

        let mut quantities: Vec<Quantity> = vec![0.0; catalog.len()];
        for (product, quantity) in self.iter() {
            if let Some(index) = catalog.find(product) {
                quantities[index] = quantity;
            }
        }

        Ok(ValidatedOrder { quantities })
    }

    fn products_where(&self, predicate: impl Fn(&str, Quantity) -> bool) -> Vec<String> {
        self.iter()
            .filter(|&(product, quantity)| predicate(product, quantity))
            .map(|(product, _)| product.to_owned())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Quantity)> for Order {
    fn from_iter<T: IntoIterator<Item = (S, Quantity)>>(iter: T) -> Self {
        Order(
            iter.into_iter()
                .map(|(product, quantity)| (product.into(), quantity))
                .collect(),
        )
    }
}

/// An order whose products all exist in the catalog it was validated
/// against, with finite non-negative quantities. Quantities are dense over
/// the catalog, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    quantities: Vec<Quantity>,
}

impl ValidatedOrder {
    #[inline]
    pub fn quantity(&self, product: ProductIdx) -> Quantity {
        self.quantities[product]
    }

    /// Number of catalog entries this order was validated against.
    pub fn catalog_len(&self) -> usize {
        self.quantities.len()
    }

    pub fn requested(&self) -> impl Iterator<Item = (ProductIdx, Quantity)> {
        self.quantities
            .iter()
            .enumerate()
            .filter(|&(_, &quantity)| quantity > 0.0)
            .map(|(index, &quantity)| (ProductIdx::new(index), quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.requested().next().is_none()
    }
}
