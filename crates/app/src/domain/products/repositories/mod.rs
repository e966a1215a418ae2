//! Product Repositories

mod options;
mod products;

pub(crate) use options::PgProductOptionsRepository;
pub(crate) use products::PgProductsRepository;
