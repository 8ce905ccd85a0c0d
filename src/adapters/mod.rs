//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (blockchain RPC, log files).
//!
//! Adapter categories:
//! - `chain`: Hemi blockchain interaction via alloy-rs
//! - `logging`: tracing subscriber with console and file sinks

pub mod chain;
pub mod logging;
