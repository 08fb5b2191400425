//! Browser transports for the remote process.

pub mod api;
