use std::collections::VecDeque;

use thiserror::Error;
use tracing::{Level, debug, instrument};

use crate::problem::{
    center::{CenterIdx, Edge},
    distance_graph::Distance,
    order::ValidatedOrder,
    reference_data::ReferenceData,
    tariff::Cost,
};

use super::{
    pickup_plan::PickupPlan,
    quote::{Leg, Quote},
};

#[derive(Debug, Error, PartialEq)]
pub enum RoutingError {
    #[error("Order was validated against a catalog of {actual} products, expected {expected}")]
    CatalogMismatch { expected: usize, actual: usize },

    #[error("None of the pickup centers [{}] has a direct edge to the hub {hub}", .centers.join(", "))]
    NoStartCenter { centers: Vec<String>, hub: String },

    #[error("Center {center} has no edge to a pending pickup center nor to the hub {hub}")]
    NoOutgoingLeg { center: String, hub: String },

    #[error("Order is too large to price: the cost overflows on the leg leaving {center}")]
    CostOverflow { center: String },
}

/// Prices the pickup walk of an order over shared reference data.
///
/// The walk starts at the pending center farthest from the hub and greedily
/// hops to the nearest neighbor that is either still pending or the hub,
/// until every pending center has been left once. Each leg is priced with
/// the mass picked up at its origin.
pub struct RoutingEngine<'a> {
    reference_data: &'a ReferenceData,
}

impl<'a> RoutingEngine<'a> {
    pub fn new(reference_data: &'a ReferenceData) -> Self {
        Self { reference_data }
    }

    pub fn compute_minimum_cost(&self, order: &ValidatedOrder) -> Result<Cost, RoutingError> {
        self.quote(order).map(|quote| quote.total_cost())
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn quote(&self, order: &ValidatedOrder) -> Result<Quote, RoutingError> {
        let expected = self.reference_data.catalog().len();
        if order.catalog_len() != expected {
            return Err(RoutingError::CatalogMismatch {
                expected,
                actual: order.catalog_len(),
            });
        }

        let mut plan = PickupPlan::from_order(self.reference_data, order);
        let mut quote = Quote::default();

        let Some(start) = self.select_start_center(&plan)? else {
            debug!("Nothing to pick up");
            return Ok(quote);
        };

        let tariff = self.reference_data.tariff();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let next = self.select_next_center(current, &plan)?;
            let mass = plan.mass(current);
            let rate = tariff.rate(mass);
            let leg = Leg {
                from: current,
                to: next.to(),
                distance: next.distance(),
                mass,
                rate,
                cost: rate * next.distance(),
            };

            debug!(
                "Leg {} -> {}: distance = {}, mass = {}, cost = {}",
                self.external_id(leg.from),
                self.external_id(leg.to),
                leg.distance,
                leg.mass,
                leg.cost,
            );
            quote.push_leg(leg);

            if !quote.total_cost().is_finite() {
                return Err(RoutingError::CostOverflow {
                    center: self.external_id(current).to_owned(),
                });
            }

            plan.remove(current);
            if plan.is_empty() {
                break;
            }

            queue.push_back(next.to());
        }

        Ok(quote)
    }

    /// First pending center whose hub distance strictly exceeds every
    /// earlier one. Centers without a hub edge are not candidates.
    fn select_start_center(&self, plan: &PickupPlan) -> Result<Option<CenterIdx>, RoutingError> {
        if plan.is_empty() {
            return Ok(None);
        }

        let graph = self.reference_data.graph();
        let mut farthest: Distance = 0.0;
        let mut start = None;

        for &center in plan.pending() {
            let Some(distance) = graph.distance_to_hub(center) else {
                continue;
            };

            if farthest < distance {
                farthest = distance;
                start = Some(center);
            }
        }

        match start {
            Some(start) => {
                debug!(
                    "Starting at {} ({} from the hub)",
                    self.external_id(start),
                    farthest
                );
                Ok(Some(start))
            }
            None => Err(RoutingError::NoStartCenter {
                centers: plan
                    .pending()
                    .iter()
                    .map(|&center| self.external_id(center).to_owned())
                    .collect(),
                hub: self.external_id(graph.hub()).to_owned(),
            }),
        }
    }

    /// Nearest neighbor of `current` that is still pending, or the hub.
    /// Neighbors are scanned in declaration order and only a strictly
    /// shorter edge replaces the running choice.
    fn select_next_center(
        &self,
        current: CenterIdx,
        plan: &PickupPlan,
    ) -> Result<Edge, RoutingError> {
        let graph = self.reference_data.graph();
        let hub = graph.hub();

        let mut next: Option<Edge> = None;
        let mut nearest = Distance::INFINITY;

        for &edge in graph.neighbors(current) {
            let is_hub = graph.is_hub(edge.to());

            if plan.contains(edge.to()) && !is_hub && edge.distance() < nearest {
                nearest = edge.distance();
                next = Some(edge);
            } else if is_hub && edge.distance() < nearest {
                nearest = edge.distance();
                next = Some(edge);
            }
        }

        next.ok_or_else(|| RoutingError::NoOutgoingLeg {
            center: self.external_id(current).to_owned(),
            hub: self.external_id(hub).to_owned(),
        })
    }

    fn external_id(&self, center: CenterIdx) -> &str {
        self.reference_data.graph().center(center).external_id()
    }
}
