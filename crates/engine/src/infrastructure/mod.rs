//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod combat_log;
pub mod modifier_store;
pub mod ports;
pub mod random;
pub mod settings;
