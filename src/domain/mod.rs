//! Domain types and business logic for the invoice ROI calculator
//!
//! The core model follows type-driven development principles: every
//! calculator input is a validated newtype, the engine is a pure function,
//! and persistence is reachable only through the narrow ports in
//! [`repository`].

pub mod assumptions;
pub mod engine;
pub mod format;
pub mod inputs;
pub mod limits;
pub mod report;
pub mod repository;
pub mod scenario;

pub use engine::*;
pub use inputs::*;
pub use report::*;
pub use repository::*;
pub use scenario::*;
