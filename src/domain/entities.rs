//! Domain entities: core data structures

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// A company in the ownership relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
    /// Id of the owning company, empty for a root company
    pub parent_id: String,
}

impl Company {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.into(),
        }
    }
}

/// A land parcel owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Land {
    pub id: String,
    pub company_id: String,
}

impl Land {
    pub fn new(id: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_id: company_id.into(),
        }
    }
}

/// Traversal mode for building a tree around a pivot company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pivot plus its direct children
    Expanded,
    /// Ancestor chain from the root down to the pivot, siblings included
    FromRoot,
    /// Pivot alone
    Single,
}

impl Mode {
    /// Look up a mode by its command-line name. Callers fall back to
    /// `Mode::Single` for unknown names.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "expanded" => Some(Mode::Expanded),
            "from_root" => Some(Mode::FromRoot),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Expanded => write!(f, "expanded"),
            Mode::FromRoot => write!(f, "from_root"),
            Mode::Single => write!(f, "single"),
        }
    }
}

/// Company annotated for rendering.
///
/// `owned_lands_count` is only meaningful after the node went through
/// [`LandAggregator::annotate_one`](crate::domain::LandAggregator::annotate_one).
/// An empty `items` vector means the node has no attached subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub parent_id: String,
    /// True iff this node is the pivot company
    pub found: bool,
    pub owned_lands_count: usize,
    pub items: Vec<TreeNode>,
}

impl TreeNode {
    /// Shallow node for a company: not found, no count, no items.
    pub fn from_company(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company.name.clone(),
            parent_id: company.parent_id.clone(),
            found: false,
            owned_lands_count: 0,
            items: Vec::new(),
        }
    }

    pub fn with_found(mut self, found: bool) -> Self {
        self.found = found;
        self
    }

    pub fn with_items(mut self, items: Vec<TreeNode>) -> Self {
        self.items = items;
        self
    }
}

/// Parse the company relations CSV: header row, then `id,name,parent_id`.
///
/// Blank lines are skipped. A missing `parent_id` column means a root company.
pub fn parse_companies(content: &str, file: &str) -> DomainResult<Vec<Company>> {
    let mut companies = Vec::new();
    for (idx, line) in records(content) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(DomainError::InvalidRecord {
                file: file.to_string(),
                line: idx + 1,
                reason: format!("expected id,name,parent_id but got '{}'", line),
            });
        }
        let parent_id = fields.get(2).copied().unwrap_or_default();
        companies.push(Company::new(fields[0], fields[1], parent_id));
    }
    Ok(companies)
}

/// Parse the land ownership CSV: header row, then `id,company_id`.
pub fn parse_lands(content: &str, file: &str) -> DomainResult<Vec<Land>> {
    let mut lands = Vec::new();
    for (idx, line) in records(content) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(DomainError::InvalidRecord {
                file: file.to_string(),
                line: idx + 1,
                reason: format!("expected id,company_id but got '{}'", line),
            });
        }
        lands.push(Land::new(fields[0], fields[1]));
    }
    Ok(lands)
}

/// Data lines with their zero-based line index; header and blank lines dropped.
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx, line.trim_end_matches('\r')))
        .filter(|(idx, line)| {
            if line.trim().is_empty() {
                tracing::trace!("skipping blank line {}", idx + 1);
                false
            } else {
                true
            }
        })
}
