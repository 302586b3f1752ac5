/// Operand forwarding through the core.
pub mod data_forwarding;
