// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! Value objects for the host naming convention and the per-host metadata
//! that feeds the generated inventory.
//!
//! # Closed Enumerations
//!
//! - [`HostType`] - host role, inventory group and secret access level
//! - [`Provider`] - hosting provider
//! - [`Architecture`] - CPU architecture
//!
//! # Value Objects
//!
//! - [`HostIdentifier`] - parsed `type-provider-os-arch-uid` host name
//! - [`HostVars`] - normalized per-host variables

pub mod architecture;
pub mod host_type;
pub mod hostname;
pub mod metadata;
pub mod provider;

pub use architecture::Architecture;
pub use host_type::HostType;
pub use hostname::{compose_hostname, HostIdentifier, HostnameError};
pub use metadata::{normalize, HostVars};
pub use provider::Provider;
