//! Persistence Adapters - Key-value store implementations
//!
//! These implement the `KeyValueStore` port from questlog-domain.

pub mod file_system;
pub mod in_memory;
