//! Carts
//!
//! The caller's single open cart, addressed without an id.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod items;

pub(crate) use handlers::*;
