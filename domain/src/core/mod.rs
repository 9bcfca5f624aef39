//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: nominal model tag attached to each dispatch
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
