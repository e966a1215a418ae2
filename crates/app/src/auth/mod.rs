//! Authentication and authorisation against the identity provider.

mod auth0;
mod errors;
mod models;
mod service;
mod token;

pub use auth0::{Auth0Client, Auth0Config, Auth0Error};
pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
