use crate::define_index_newtype;

use super::{distance_graph::Distance, product::Mass};

define_index_newtype!(CenterIdx, Center, Mass);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    to: CenterIdx,
    distance: Distance,
}

impl Edge {
    pub fn new(to: CenterIdx, distance: Distance) -> Self {
        Self { to, distance }
    }

    pub fn to(&self) -> CenterIdx {
        self.to
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// A distribution center, or the hub. Neighbors keep the order in which they
/// were declared, which decides ties during the walk.
#[derive(Debug, Clone)]
pub struct Center {
    external_id: String,
    neighbors: Vec<Edge>,
}

impl Center {
    pub fn new(external_id: String) -> Self {
        Self {
            external_id,
            neighbors: Vec::new(),
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    pub fn distance_to(&self, to: CenterIdx) -> Option<Distance> {
        self.neighbors
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.distance)
    }

    pub(crate) fn push_neighbor(&mut self, edge: Edge) {
        self.neighbors.push(edge);
    }
}
