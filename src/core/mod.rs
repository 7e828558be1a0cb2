//! Core state table types.
//!
//! This module contains the pure data model of a machine:
//! - `StateDescriptor`: one declared state, its restrictions and payload
//! - `StateTable`: all declared states in declaration order
//!
//! Nothing here performs I/O or mutates a value after it has been handed to a
//! machine.

mod descriptor;
mod table;

pub use descriptor::StateDescriptor;
pub use table::StateTable;
