//! landtree: company ownership trees annotated with land parcel counts.
//!
//! Layers, innermost first: `domain` (entities, aggregation, tree building,
//! rendering), `application` (dataset loading and use cases), `infrastructure`
//! (I/O traits and wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
