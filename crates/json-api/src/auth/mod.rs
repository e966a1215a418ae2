//! Caller identity and authorisation.
//!
//! One identity middleware is mounted at startup: [`bearer`] verifies access
//! tokens in production, [`body`] trusts the `user` body field everywhere else.
//! Both leave anonymous callers unidentified and let handlers decide.

mod admin;
pub(crate) mod bearer;
pub(crate) mod body;

pub(crate) use admin::{require_admin, require_owner_or_admin};
