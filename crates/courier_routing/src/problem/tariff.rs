use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{distance_graph::Distance, product::Mass};

pub type Cost = f64;

/// Tiered per-distance pricing of a leg, driven by the mass carried out of
/// the leg's origin.
///
/// The base rate covers up to one tier of mass; every further full tier adds
/// the surcharge. A mass that lands exactly on a tier boundary is billed one
/// surcharge fewer than its tier count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Tariff {
    pub base_rate: f64,
    pub tier_surcharge: f64,
    pub tier_mass: Mass,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_rate: 10.0,
            tier_surcharge: 8.0,
            tier_mass: 5.0,
        }
    }
}

impl Tariff {
    /// Cost per unit of distance for a leg leaving with `mass` on board.
    pub fn rate(&self, mass: Mass) -> f64 {
        let tiers = (mass / self.tier_mass).floor();

        if mass % self.tier_mass == 0.0 && mass / self.tier_mass > 0.0 {
            self.base_rate + self.tier_surcharge * (tiers - 1.0)
        } else if mass % self.tier_mass != 0.0 {
            self.base_rate + self.tier_surcharge * tiers
        } else {
            self.base_rate
        }
    }

    pub fn leg_cost(&self, mass: Mass, distance: Distance) -> Cost {
        self.rate(mass) * distance
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.base_rate.is_finite()
            && self.base_rate >= 0.0
            && self.tier_surcharge.is_finite()
            && self.tier_surcharge >= 0.0
            && self.tier_mass.is_finite()
            && self.tier_mass > 0.0
    }
}
