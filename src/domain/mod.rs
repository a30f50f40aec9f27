//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod aggregator;
pub mod builder;
pub mod entities;
pub mod error;
pub mod render;

pub use aggregator::LandAggregator;
pub use builder::TreeBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use render::{format_line, format_prefix, render, render_boxed};
