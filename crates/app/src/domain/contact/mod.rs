//! Contact

pub mod errors;
pub mod models;
pub mod render;
pub mod service;

pub use errors::ContactError;
pub use service::*;
