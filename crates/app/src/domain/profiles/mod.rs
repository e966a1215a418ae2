//! Business Profile
//!
//! The single business profile shown on invoices and the storefront.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProfilesServiceError;
pub use service::*;
