//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder that collects state entries and
//! optionally audits them with [`lint`](crate::config::lint) before building.

pub mod machine;

pub use machine::StateMachineBuilder;
