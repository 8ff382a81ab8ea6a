//! Storefront domain services, external collaborators, and persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod mail;
pub mod payments;
pub mod site;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
