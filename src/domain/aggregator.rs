//! Land parcel counting for tree nodes.

use std::collections::HashMap;

use crate::domain::entities::{Land, TreeNode};

/// Counts land parcels per company and attaches totals to tree nodes.
///
/// Direct counts are indexed once on construction; the land slice itself is
/// kept for ordered lookups.
#[derive(Debug)]
pub struct LandAggregator<'a> {
    lands: &'a [Land],
    direct_counts: HashMap<&'a str, usize>,
}

impl<'a> LandAggregator<'a> {
    pub fn new(lands: &'a [Land]) -> Self {
        let mut direct_counts = HashMap::new();
        for land in lands {
            *direct_counts.entry(land.company_id.as_str()).or_insert(0) += 1;
        }
        Self {
            lands,
            direct_counts,
        }
    }

    /// Lands owned directly by `company_id`, in input order.
    pub fn owned_lands_direct(&self, company_id: &str) -> Vec<&'a Land> {
        self.lands
            .iter()
            .filter(|land| land.company_id == company_id)
            .collect()
    }

    pub fn direct_count(&self, company_id: &str) -> usize {
        self.direct_counts.get(company_id).copied().unwrap_or(0)
    }

    /// Direct count plus the counts already stored on `node.items`.
    ///
    /// Items are not recursed into: their `owned_lands_count` must be final.
    pub fn owned_lands_count(&self, node: &TreeNode) -> usize {
        let direct = self.direct_count(&node.id);
        node.items
            .iter()
            .fold(direct, |acc, item| acc + item.owned_lands_count)
    }

    /// Overwrite `owned_lands_count`, leaving every other field untouched.
    pub fn annotate_one(&self, mut node: TreeNode) -> TreeNode {
        node.owned_lands_count = self.owned_lands_count(&node);
        node
    }

    pub fn annotate_many(&self, nodes: Vec<TreeNode>) -> Vec<TreeNode> {
        nodes.into_iter().map(|n| self.annotate_one(n)).collect()
    }
}
