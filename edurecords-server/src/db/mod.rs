//! Database layer - record store trait, backends and connection pool
//!
//! # Design Principles
//!
//! - Connection pool (default max 5 connections) - no Arc<Mutex<Connection>>
//! - Absence is a value (`Option`/`bool`), not an error
//! - Every store operation is a single statement

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryRecordStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::PgRecordStore;
pub use store::{DbError, GenderCount, RecordStore};
