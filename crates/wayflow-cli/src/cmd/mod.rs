//! Command handlers for the `wf` binary.

pub mod classify;
pub mod dot;
pub mod paths;
pub mod summary;
