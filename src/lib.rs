//! Invoice ROI - a calculator service for invoice automation savings
//!
//! Computes what switching from manual to automated invoice processing is
//! worth, keeps named what-if scenarios in Postgres, and records report
//! requests, following type-driven development principles.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
