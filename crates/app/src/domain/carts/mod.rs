//! Carts
//!
//! A cart is the user's single order in the `cart` status. Carts share storage
//! with orders and become orders at checkout.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
