//! Infrastructure layer for the invoice ROI service
//!
//! Adapters for the storage ports defined in the domain: Postgres for the
//! real deployment, in-memory for tests and local development, plus the
//! shared connection-pool wrapper.

pub mod database;
pub mod memory;
pub mod postgres;

pub use database::*;
pub use memory::*;
pub use postgres::*;
