//! Checkout

pub mod cart;
pub mod errors;
pub mod line_items;
pub mod service;

pub use errors::CheckoutError;
pub use line_items::ValidatedLineItem;
pub use service::*;
