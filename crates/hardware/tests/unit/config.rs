//! Configuration Tests.
//!
//! Verifies defaults, partial JSON documents and error reporting.

use pretty_assertions::assert_eq;
use rktcpu_core::common::SimError;
use rktcpu_core::config::{Config, GeneralConfig, MemoryConfig};
use rktcpu_core::soc::traits::AlignmentPolicy;

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                start_pc: 0,
            },
            memory: MemoryConfig {
                alignment: AlignmentPolicy::Natural,
            },
        }
    );
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_fill_in_defaults() {
    let config = Config::from_json(r#"{ "general": { "start_pc": 4096 } }"#).unwrap();
    assert_eq!(config.general.start_pc, 0x1000);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.alignment, AlignmentPolicy::Natural);
}

#[test]
fn alignment_policy_names() {
    for (name, policy) in [
        ("natural", AlignmentPolicy::Natural),
        ("within_word", AlignmentPolicy::WithinWord),
        ("unrestricted", AlignmentPolicy::Unrestricted),
    ] {
        let json = format!(r#"{{ "memory": {{ "alignment": "{name}" }} }}"#);
        assert_eq!(Config::from_json(&json).unwrap().memory.alignment, policy);
    }
}

#[test]
fn unknown_policy_is_config_error() {
    let err = Config::from_json(r#"{ "memory": { "alignment": "sloppy" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(SimError::Config(_))
    ));
}
