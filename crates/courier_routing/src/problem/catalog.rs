use fxhash::FxHashMap;

use super::{
    center::CenterIdx,
    product::{Mass, Product, ProductIdx},
};

#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    product_ids: FxHashMap<String, ProductIdx>,
}

impl Catalog {
    pub(crate) fn new(products: Vec<Product>) -> Self {
        let product_ids = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.external_id().to_owned(), ProductIdx::new(index)))
            .collect();

        Self {
            products,
            product_ids,
        }
    }

    #[inline]
    pub fn product(&self, index: ProductIdx) -> &Product {
        &self.products[index]
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, external_id: &str) -> Option<ProductIdx> {
        self.product_ids.get(external_id).copied()
    }

    pub fn contains(&self, external_id: &str) -> bool {
        self.product_ids.contains_key(external_id)
    }

    #[inline]
    pub fn location_of(&self, index: ProductIdx) -> CenterIdx {
        self.products[index].center()
    }

    #[inline]
    pub fn mass_of(&self, index: ProductIdx) -> Mass {
        self.products[index].mass()
    }

    /// Product indices in declaration order.
    pub fn indices(&self) -> impl Iterator<Item = ProductIdx> {
        ProductIdx::all(self.products.len())
    }
}
