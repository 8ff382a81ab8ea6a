//! Catalog

mod errors;
pub(crate) mod handlers;
mod responses;

pub(crate) use handlers::*;
