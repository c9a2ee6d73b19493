use fixedbitset::FixedBitSet;

use crate::problem::{
    center::CenterIdx, order::ValidatedOrder, product::Mass, reference_data::ReferenceData,
};

/// Centers still to be visited and the mass each of them hands over.
///
/// Pending centers keep the order in which the catalog first reached them.
/// The hub is never pending and always carries zero mass.
pub struct PickupPlan {
    pending: Vec<CenterIdx>,
    pending_set: FixedBitSet,
    masses: Vec<Mass>,
}

impl PickupPlan {
    pub fn from_order(reference_data: &ReferenceData, order: &ValidatedOrder) -> Self {
        let catalog = reference_data.catalog();
        let num_centers = reference_data.graph().num_centers();

        let mut plan = PickupPlan {
            pending: Vec::new(),
            pending_set: FixedBitSet::with_capacity(num_centers),
            masses: vec![0.0; num_centers],
        };

        for (product, quantity) in order.requested() {
            let center = catalog.location_of(product);
            plan.masses[center] += quantity * catalog.mass_of(product);

            if !plan.pending_set.put(center.get()) {
                plan.pending.push(center);
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn contains(&self, center: CenterIdx) -> bool {
        self.pending_set.contains(center.get())
    }

    /// Pending centers in pickup order.
    pub fn pending(&self) -> &[CenterIdx] {
        &self.pending
    }

    #[inline]
    pub fn mass(&self, center: CenterIdx) -> Mass {
        self.masses[center]
    }

    pub fn total_mass(&self) -> Mass {
        self.masses.iter().sum()
    }

    /// Marks `center` as visited. Returns whether it was pending.
    pub fn remove(&mut self, center: CenterIdx) -> bool {
        if !self.contains(center) {
            return false;
        }

        self.pending_set.set(center.get(), false);
        self.pending.retain(|&pending| pending != center);
        true
    }
}
