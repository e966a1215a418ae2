//! Profile

pub(crate) mod errors;
pub(crate) mod handlers;
mod requests;

pub(crate) use handlers::*;
