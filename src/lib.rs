//! Dynamic Ansible inventory for a fleet of build and test machines
//!
//! Hosts are declared in YAML, grouped by role and provider, and named by
//! convention (`type-provider-os-arch-uid`). This crate validates those
//! names, normalizes per-host metadata into Ansible variables, merges in
//! optional encrypted host lists, and emits the JSON document Ansible
//! expects from a dynamic inventory script.

pub mod config;
pub mod decrypt;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod merge;
pub mod overrides;
pub mod pipeline;

// Re-export commonly used types
pub use config::InventoryConfig;
pub use decrypt::{Decryptor, GpgDecryptor};
pub use domain::{Architecture, HostIdentifier, HostType, HostVars, Provider};
pub use errors::{InventoryError, InventoryResult};
pub use inventory::{Inventory, InventoryBuilder, InventoryGroup, InventorySource};
pub use merge::{merge, MergeError};
pub use overrides::HostOverrides;
pub use pipeline::InventoryPipeline;
