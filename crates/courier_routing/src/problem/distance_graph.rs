use fxhash::FxHashMap;

use super::center::{Center, CenterIdx, Edge};

pub type Distance = f64;

/// Sparse adjacency over the centers and the hub.
///
/// Each direction of an edge is stored under its origin, so `distance(a, b)`
/// always reads `a`'s entry even if `b` lists a different value back.
#[derive(Debug)]
pub struct DistanceGraph {
    centers: Vec<Center>,
    center_ids: FxHashMap<String, CenterIdx>,
    hub: CenterIdx,
}

impl DistanceGraph {
    pub(crate) fn new(
        centers: Vec<Center>,
        center_ids: FxHashMap<String, CenterIdx>,
        hub: CenterIdx,
    ) -> Self {
        Self {
            centers,
            center_ids,
            hub,
        }
    }

    pub fn hub(&self) -> CenterIdx {
        self.hub
    }

    pub fn is_hub(&self, center: CenterIdx) -> bool {
        self.hub == center
    }

    #[inline]
    pub fn center(&self, index: CenterIdx) -> &Center {
        &self.centers[index]
    }

    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    pub fn num_centers(&self) -> usize {
        self.centers.len()
    }

    pub fn find(&self, external_id: &str) -> Option<CenterIdx> {
        self.center_ids.get(external_id).copied()
    }

    #[inline]
    pub fn neighbors(&self, from: CenterIdx) -> &[Edge] {
        self.centers[from].neighbors()
    }

    #[inline]
    pub fn distance(&self, from: CenterIdx, to: CenterIdx) -> Option<Distance> {
        self.centers[from].distance_to(to)
    }

    pub fn distance_to_hub(&self, from: CenterIdx) -> Option<Distance> {
        self.distance(from, self.hub)
    }

    pub fn is_symmetric(&self) -> bool {
        CenterIdx::all(self.centers.len()).all(|from| {
            self.neighbors(from)
                .iter()
                .all(|edge| self.distance(edge.to(), from) == Some(edge.distance()))
        })
    }
}
