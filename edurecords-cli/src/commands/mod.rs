//! Command implementations for edurecords CLI

pub mod serve;

pub use serve::run_serve;
