//! Performance Score and Incentive Engine for retail branch managers.
//!
//! This crate scores five achievement percentages into marks, sums them into
//! a total score out of 110, and resolves the incentive a manager earns for
//! their designation from a fixed slab table. An HTTP API and a command line
//! front end sit on top of the pure calculation core.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
