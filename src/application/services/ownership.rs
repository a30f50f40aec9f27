//! Ownership tree service
//!
//! Loads the company and land datasets and renders trees around a pivot company.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::RenderStyle;
use crate::domain::{
    parse_companies, parse_lands, render, render_boxed, Company, Land, Mode, TreeBuilder, TreeNode,
};
use crate::infrastructure::traits::FileSystem;

/// Both datasets, as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub lands: Vec<Land>,
}

/// Service for building and rendering ownership trees.
pub struct OwnershipService {
    fs: Arc<dyn FileSystem>,
}

impl OwnershipService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load both CSV files.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, companies_path: &Path, lands_path: &Path) -> ApplicationResult<Dataset> {
        let companies = self.load_companies(companies_path)?;
        let lands = self.load_lands(lands_path)?;
        debug!(
            "load: {} companies, {} lands",
            companies.len(),
            lands.len()
        );
        Ok(Dataset { companies, lands })
    }

    pub fn load_companies(&self, path: &Path) -> ApplicationResult<Vec<Company>> {
        let content = self.read(path, "read company relations")?;
        Ok(parse_companies(&content, &path.display().to_string())?)
    }

    pub fn load_lands(&self, path: &Path) -> ApplicationResult<Vec<Land>> {
        let content = self.read(path, "read land ownership")?;
        Ok(parse_lands(&content, &path.display().to_string())?)
    }

    fn read(&self, path: &Path, action: &str) -> ApplicationResult<String> {
        // Check file exists first - give clear error message
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("not a file: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "expected a CSV file",
                )),
            });
        }
        self.fs.read_to_string(path).with_path_context(action, path)
    }

    /// Build the annotated tree for `pivot_id`.
    pub fn tree(
        &self,
        dataset: &Dataset,
        pivot_id: &str,
        mode: Mode,
    ) -> ApplicationResult<Vec<TreeNode>> {
        let builder = TreeBuilder::new(&dataset.companies, &dataset.lands);
        Ok(builder.build(pivot_id, mode)?)
    }

    /// Build and render the tree for `pivot_id`.
    #[instrument(level = "debug", skip(self, dataset))]
    pub fn render(
        &self,
        dataset: &Dataset,
        pivot_id: &str,
        mode: Mode,
        style: RenderStyle,
    ) -> ApplicationResult<String> {
        let tree = self.tree(dataset, pivot_id, mode)?;
        let output = match style {
            RenderStyle::Lines => render(&tree),
            RenderStyle::Boxed => render_boxed(&tree),
        };
        debug!("render: {} lines", output.lines().count());
        Ok(output)
    }
}
