// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Documents and the Inventory Builder
//!
//! The YAML source groups hosts by role, then by provider:
//!
//! ```yaml
//! hosts:
//!   - test:
//!     - voxer:
//!         linux-x64-1: {ip: 10.0.0.1, port: 22, user: build}
//!     - softlayer:
//!         benchmark-ubuntu1604-x64-1: {ip: 10.0.0.2}
//! ```
//!
//! The builder turns that into the Ansible dynamic inventory shape:
//!
//! ```text
//! {
//!   "_meta": { "hostvars": { "<hostname>": { ... } } },
//!   "<role>": { "hosts": [...], "vars": { "ansible_ssh_private_key_file": ... } }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::domain::{compose_hostname, normalize, HostIdentifier, HostVars};
use crate::errors::{InventoryError, InventoryResult};
use crate::overrides::HostOverrides;

/// Host key → metadata, for one provider
pub type ProviderHosts = BTreeMap<String, Option<HostVars>>;

/// Provider name → hosts, for one provider block
pub type ProviderBlock = BTreeMap<String, ProviderHosts>;

/// Role name → provider blocks
pub type RoleBlock = BTreeMap<String, Vec<ProviderBlock>>;

/// Parsed YAML inventory source
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InventorySource {
    pub hosts: Vec<RoleBlock>,
}

impl InventorySource {
    /// Parse a YAML document
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_slice(bytes)
    }

    /// Load the public inventory file
    pub fn from_file<P: AsRef<Path>>(path: P) -> InventoryResult<Self> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| InventoryError::SourceUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_slice(&bytes).map_err(|e| InventoryError::SourceUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Number of host entries across all roles and providers
    pub fn host_count(&self) -> usize {
        self.hosts
            .iter()
            .flat_map(|role| role.values())
            .flatten()
            .flat_map(|provider| provider.values())
            .map(|hosts| hosts.len())
            .sum()
    }
}

/// Variables shared by every host of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVars {
    pub ansible_ssh_private_key_file: String,
}

/// Hosts sharing a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryGroup {
    /// Sorted, deduplicated host names
    pub hosts: Vec<String>,
    pub vars: GroupVars,
}

/// A fully assembled host
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    pub hostname: String,
    pub vars: HostVars,
}

/// Inventory document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    /// Hostname → variables, emitted as `_meta.hostvars`
    pub hostvars: BTreeMap<String, HostVars>,
    /// Group name → group
    pub groups: BTreeMap<String, InventoryGroup>,
}

impl Inventory {
    /// Variables of a single host
    pub fn host(&self, hostname: &str) -> Option<&HostVars> {
        self.hostvars.get(hostname)
    }

    /// Convert to a JSON value for merging and output
    pub fn to_value(&self) -> InventoryResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Meta<'a> {
            hostvars: &'a BTreeMap<String, HostVars>,
        }

        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        map.serialize_entry(
            "_meta",
            &Meta {
                hostvars: &self.hostvars,
            },
        )?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}

/// Builds inventory documents from YAML sources
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    private_key_prefix: String,
    overrides: HostOverrides,
}

impl InventoryBuilder {
    /// Create a builder
    ///
    /// Each group's key file is `private_key_prefix` followed by the group name.
    pub fn new(private_key_prefix: impl Into<String>, overrides: HostOverrides) -> Self {
        Self {
            private_key_prefix: private_key_prefix.into(),
            overrides,
        }
    }

    /// Build an inventory document
    ///
    /// Fails on the first malformed host; no partial inventory is returned.
    pub fn build(&self, source: InventorySource) -> InventoryResult<Inventory> {
        let mut inventory = Inventory::default();

        for role_block in source.hosts {
            for (role, providers) in role_block {
                let group = inventory
                    .groups
                    .entry(role.clone())
                    .or_insert_with(|| InventoryGroup {
                        hosts: Vec::new(),
                        vars: GroupVars {
                            ansible_ssh_private_key_file: format!(
                                "{}{}",
                                self.private_key_prefix, role
                            ),
                        },
                    });

                for (provider, hosts) in providers.into_iter().flatten() {
                    for (host_key, metadata) in hosts {
                        let record =
                            self.build_host(&role, &provider, &host_key, metadata.unwrap_or_default())?;
                        group.hosts.push(record.hostname.clone());
                        inventory.hostvars.insert(record.hostname, record.vars);
                    }
                }

                group.hosts.sort();
                group.hosts.dedup();
            }
        }

        debug!(
            groups = inventory.groups.len(),
            hosts = inventory.hostvars.len(),
            "Built inventory"
        );

        Ok(inventory)
    }

    /// Assemble one host
    ///
    /// Variables are layered: identifier fields, connection variables,
    /// remaining metadata, then config overrides.
    pub fn build_host(
        &self,
        role: &str,
        provider: &str,
        host_key: &str,
        metadata: HostVars,
    ) -> InventoryResult<HostRecord> {
        let hostname = compose_hostname(role, provider, host_key);

        let identifier =
            HostIdentifier::parse(&hostname).map_err(|source| InventoryError::HostBuildFailed {
                hostname: hostname.clone(),
                source,
            })?;

        let mut vars = identifier.to_vars();
        vars.extend(normalize(metadata));
        self.overrides.apply(&hostname, &mut vars);

        Ok(HostRecord {
            hostname,
            vars,
        })
    }
}
