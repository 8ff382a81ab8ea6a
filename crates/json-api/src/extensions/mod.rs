//! Extension traits

mod body;
mod depot;

pub(crate) use body::RequestBodyExt as _;
pub(crate) use depot::DepotExt as _;
