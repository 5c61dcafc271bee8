//! depview - compare declared npm dependencies with their latest versions
//!
//! Pipeline: read package.json → look up each dependency on the registry,
//! one request at a time → render the comparison table.

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolver;
