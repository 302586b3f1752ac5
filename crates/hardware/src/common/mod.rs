//! Common utilities and types used throughout the core.
//!
//! This module provides the building blocks shared across components:
//! 1. **Error Handling:** Trap kinds, pipeline exceptions, and top-level simulator errors.
//! 2. **Register Management:** The 32-entry general-purpose register file.

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Exception, SimError, Trap};
pub use reg::RegisterFile;
