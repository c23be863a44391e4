//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per store operation
//! - RETURNING instead of read-after-write

pub mod educations;

pub use educations::PgRecordStore;
