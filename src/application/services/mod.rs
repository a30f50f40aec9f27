//! Application services

pub mod ownership;

pub use ownership::{Dataset, OwnershipService};
