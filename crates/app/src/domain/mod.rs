//! Ordering Domain Concerns

pub mod carts;
pub mod categories;
pub mod orders;
pub(crate) mod prices;
pub mod products;
pub mod profiles;
