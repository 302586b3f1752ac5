//! # Unit Components
//!
//! Tests organised by crate module: shared types, configuration, the core
//! (pipeline, units, step protocol), the ISA layer, memory collaborators and
//! statistics.


/// JSON configuration parsing and defaults.
pub mod config;




/// Statistics counters.
pub mod stats;
