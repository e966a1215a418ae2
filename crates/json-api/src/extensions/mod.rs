//! Extension traits

mod depot;
mod path;
mod request;

pub(crate) use depot::DepotExt as _;
pub(crate) use path::PathParamExt as _;
pub(crate) use request::RequestExt as _;
