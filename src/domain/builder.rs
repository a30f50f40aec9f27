//! Tree builder for company ownership hierarchies.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, trace};

use crate::domain::aggregator::LandAggregator;
use crate::domain::entities::{Company, Land, Mode, TreeNode};
use crate::domain::error::{DomainError, DomainResult};

/// One step of the ascent from the pivot towards the root.
#[derive(Debug)]
struct Level<'a> {
    parent: &'a Company,
    siblings: Vec<&'a Company>,
}

/// Constructs annotated trees around a pivot company.
pub struct TreeBuilder<'a> {
    companies: &'a [Company],
    by_id: HashMap<&'a str, &'a Company>,
    aggregator: LandAggregator<'a>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(companies: &'a [Company], lands: &'a [Land]) -> Self {
        let mut by_id = HashMap::with_capacity(companies.len());
        for company in companies {
            // first match wins on duplicate ids
            by_id.entry(company.id.as_str()).or_insert(company);
        }
        Self {
            companies,
            by_id,
            aggregator: LandAggregator::new(lands),
        }
    }

    pub fn find(&self, id: &str) -> Option<&'a Company> {
        self.by_id.get(id).copied()
    }

    /// Companies whose parent is `id`, in input order.
    pub fn children_of(&self, id: &str) -> Vec<&'a Company> {
        self.companies.iter().filter(|c| c.parent_id == id).collect()
    }

    /// Companies sharing `company`'s parent, excluding `company` itself.
    pub fn siblings_of(&self, company: &Company) -> Vec<&'a Company> {
        self.companies
            .iter()
            .filter(|c| c.parent_id == company.parent_id && c.id != company.id)
            .collect()
    }

    /// Build the tree for `pivot_id`; the result always holds exactly one root.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, pivot_id: &str, mode: Mode) -> DomainResult<Vec<TreeNode>> {
        let pivot = self
            .find(pivot_id)
            .ok_or_else(|| DomainError::PivotNotFound(pivot_id.to_string()))?;

        let root = match mode {
            Mode::Expanded => self.build_expanded(pivot),
            Mode::FromRoot => self.build_from_root(pivot)?,
            Mode::Single => self.leaf(pivot, true),
        };
        debug!(
            "built tree rooted at {} with {} parcels",
            root.id, root.owned_lands_count
        );
        Ok(vec![root])
    }

    fn leaf(&self, company: &Company, found: bool) -> TreeNode {
        self.aggregator
            .annotate_one(TreeNode::from_company(company).with_found(found))
    }

    fn build_expanded(&self, pivot: &Company) -> TreeNode {
        let children = self
            .children_of(&pivot.id)
            .into_iter()
            .map(TreeNode::from_company)
            .collect();
        let children = self.aggregator.annotate_many(children);
        trace!("{} has {} direct children", pivot.id, children.len());

        let node = TreeNode::from_company(pivot)
            .with_found(true)
            .with_items(children);
        self.aggregator.annotate_one(node)
    }

    fn build_from_root(&self, pivot: &'a Company) -> DomainResult<TreeNode> {
        let levels = self.ascend(pivot)?;

        let mut node = self.leaf(pivot, true);
        for level in levels {
            let mut items = Vec::with_capacity(level.siblings.len() + 1);
            items.push(node);
            items.extend(
                self.aggregator.annotate_many(
                    level
                        .siblings
                        .into_iter()
                        .map(TreeNode::from_company)
                        .collect(),
                ),
            );
            node = self.aggregator.annotate_one(
                TreeNode::from_company(level.parent)
                    .with_found(level.parent.id == pivot.id)
                    .with_items(items),
            );
        }
        Ok(node)
    }

    /// Collect levels from the pivot's parent up to the root, nearest first.
    fn ascend(&self, pivot: &'a Company) -> DomainResult<Vec<Level<'a>>> {
        let mut levels = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(pivot.id.as_str());

        let mut current = pivot;
        while let Some(parent) = self.find(&current.parent_id) {
            if !visited.insert(parent.id.as_str()) {
                return Err(DomainError::CycleDetected(parent.id.clone()));
            }
            trace!("ascending from {} to {}", current.id, parent.id);
            levels.push(Level {
                parent,
                siblings: self.siblings_of(current),
            });
            current = parent;
        }
        Ok(levels)
    }
}
