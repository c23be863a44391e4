//! Route handlers organized by resource

pub mod educations;
pub mod health;
pub mod stats;
