//! Contact Handlers

pub(crate) mod create;
