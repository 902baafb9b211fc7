// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Identifier Value Object with Naming Convention Invariants
//!
//! Every host in the inventory is named `type-provider-os-arch-uid`.
//! This module owns both directions of that convention: composing a name
//! from the YAML structure and decomposing it back into typed fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{Architecture, HostType, HostVars, Provider};

/// Separator between host name segments
pub const SEGMENT_DELIMITER: char = '-';

/// Separator between a segment's key and its descriptive metadata
pub const METADATA_DELIMITER: char = '_';

/// Number of segments in a well-formed host name
pub const SEGMENT_COUNT: usize = 5;

/// Host name validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostnameError {
    #[error("Host format is invalid: {hostname} ({segments} segments, expected {})", SEGMENT_COUNT)]
    Malformed { hostname: String, segments: usize },

    #[error("Invalid {field}: {value}")]
    InvalidFieldValue { field: &'static str, value: String },
}

/// Compose a host name from its role, provider and per-provider host key
///
/// Host keys with exactly three hyphens carry metadata on the provider
/// segment (`softlayer_benchmark-ubuntu1604-x64-1`), so they are joined
/// with `_` to keep the result at five `-`-separated segments.
pub fn compose_hostname(host_type: &str, provider: &str, host_key: &str) -> String {
    let delimiter = if host_key.matches(SEGMENT_DELIMITER).count() == 3 {
        METADATA_DELIMITER
    } else {
        SEGMENT_DELIMITER
    };
    format!("{host_type}{SEGMENT_DELIMITER}{provider}{delimiter}{host_key}")
}

/// Strip descriptive metadata from a segment, keeping only the key
fn segment_key(segment: &str) -> &str {
    match segment.split_once(METADATA_DELIMITER) {
        Some((key, metadata)) if !metadata.is_empty() => key,
        _ => segment,
    }
}

/// Parsed host name
///
/// # Examples
///
/// ```rust
/// use fleet_inventory::domain::{Architecture, HostIdentifier, HostType};
///
/// let id = HostIdentifier::parse("test-voxer-linux-x64-1").unwrap();
/// assert_eq!(id.host_type, HostType::Test);
/// assert_eq!(id.architecture, Architecture::X64);
/// assert_eq!(id.to_string(), "test-voxer-linux-x64-1");
///
/// assert!(HostIdentifier::parse("a-b-c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostIdentifier {
    /// Role, also the inventory group
    #[serde(rename = "type")]
    pub host_type: HostType,
    pub provider: Provider,
    pub os: String,
    #[serde(rename = "arch")]
    pub architecture: Architecture,
    pub uid: String,
}

impl HostIdentifier {
    /// Parse and validate a host name against the naming convention
    ///
    /// # Invariants
    /// - Exactly five `-`-separated segments
    /// - `type`, `provider` and `arch` belong to their enumerations
    pub fn parse(hostname: &str) -> Result<Self, HostnameError> {
        let segments: Vec<&str> = hostname.split(SEGMENT_DELIMITER).collect();

        let [host_type, provider, os, arch, uid] = segments.as_slice() else {
            return Err(HostnameError::Malformed {
                hostname: hostname.to_string(),
                segments: segments.len(),
            });
        };

        Ok(Self {
            host_type: segment_key(host_type).parse()?,
            provider: segment_key(provider).parse()?,
            os: segment_key(os).to_string(),
            architecture: segment_key(arch).parse()?,
            uid: segment_key(uid).to_string(),
        })
    }

    /// Host variables describing the identifier fields
    pub fn to_vars(&self) -> HostVars {
        let mut vars = HostVars::new();
        vars.insert("type".into(), Value::from(self.host_type.as_str()));
        vars.insert("provider".into(), Value::from(self.provider.as_str()));
        vars.insert("os".into(), Value::from(self.os.as_str()));
        vars.insert("arch".into(), Value::from(self.architecture.as_str()));
        vars.insert("uid".into(), Value::from(self.uid.as_str()));
        vars
    }
}

impl fmt::Display for HostIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.host_type, self.provider, self.os, self.architecture, self.uid
        )
    }
}

impl FromStr for HostIdentifier {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HostIdentifier {
    type Error = HostnameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
