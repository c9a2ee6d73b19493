use serde::Serialize;

use crate::problem::{
    center::CenterIdx, distance_graph::Distance, product::Mass, tariff::Cost,
};

/// One priced hop of the pickup walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: CenterIdx,
    pub to: CenterIdx,
    pub distance: Distance,
    /// Mass picked up at `from`, which prices the leg.
    pub mass: Mass,
    pub rate: f64,
    pub cost: Cost,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quote {
    legs: Vec<Leg>,
    total_cost: Cost,
}

impl Quote {
    pub(crate) fn push_leg(&mut self, leg: Leg) {
        self.total_cost += leg.cost;
        self.legs.push(leg);
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn total_distance(&self) -> Distance {
        self.legs.iter().map(|leg| leg.distance).sum()
    }

    /// Every center the walk passed through, starting center first.
    pub fn route(&self) -> Vec<CenterIdx> {
        let mut route = Vec::with_capacity(self.legs.len() + 1);

        if let Some(first) = self.legs.first() {
            route.push(first.from);
        }
        route.extend(self.legs.iter().map(|leg| leg.to));

        route
    }
}
