//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain types with the port interfaces.
//!
//! Use cases:
//! - `executor`: one check-balance-then-submit operation
//! - `BatchRunner`: accounts x rounds x operations, with pacing
//! - `prompt`: interactive amount / repeat input

pub mod batch_runner;
pub mod executor;
pub mod prompt;

pub use batch_runner::{BatchRunner, RunSummary};
