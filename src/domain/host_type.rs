// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Role Domain Model
//!
//! The role segment of a host name decides which inventory group a host
//! lands in. The same closed set doubles as the list of secret access
//! levels, each of which may carry its own encrypted host list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HostnameError;

/// Host role taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostType {
    /// Infrastructure hosts (CI servers, proxies, backups)
    Infra,
    /// Release build hosts
    Release,
    /// Test runners
    Test,
}

impl HostType {
    /// Every role, in access-level processing order
    pub const ALL: [HostType; 3] = [Self::Infra, Self::Release, Self::Test];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infra => "infra",
            Self::Release => "release",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostType {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HostnameError::InvalidFieldValue {
                field: "type",
                value: s.to_string(),
            })
    }
}
