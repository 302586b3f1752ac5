//! Configuration system for the pipeline core.
//!
//! This module defines the structures used to parameterize a [`CpuCore`](crate::CpuCore).
//! It provides:
//! 1. **Defaults:** Baseline constants (reset program counter, alignment policy).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON through [`Config::from_json`], or use
//! `Config::default()`. Every field is optional in JSON.

use serde::Deserialize;

use crate::common::SimError;
use crate::soc::traits::AlignmentPolicy;

/// Default configuration constants for the core.
mod defaults {
    use crate::soc::traits::AlignmentPolicy;

    /// Program counter at reset.
    pub const START_PC: u32 = 0;

    /// Alignment policy of the reference memory.
    pub const ALIGNMENT: AlignmentPolicy = AlignmentPolicy::Natural;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rktcpu_core::config::Config;
/// use rktcpu_core::soc::traits::AlignmentPolicy;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "start_pc": 256 },
///     "memory": { "alignment": "within_word" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x100);
/// assert_eq!(config.memory.alignment, AlignmentPolicy::WithinWord);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reference memory settings
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document is malformed or names an
    /// unknown enum variant.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every register commit at debug level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Reference memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Which misaligned data accesses the memory accepts.
    #[serde(default = "MemoryConfig::default_alignment")]
    pub alignment: AlignmentPolicy,
}

impl MemoryConfig {
    fn default_alignment() -> AlignmentPolicy {
        defaults::ALIGNMENT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            alignment: defaults::ALIGNMENT,
        }
    }
}
