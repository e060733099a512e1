//! Stats Handlers

pub(crate) mod get;
