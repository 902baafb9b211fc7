// Copyright (c) 2025 - Cowboy AI, Inc.
//! CPU Architecture Domain Model
//!
//! Mirrors the architecture names accepted by the Node.js `configure`
//! script, which is where the host naming convention borrows them from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HostnameError;

/// CPU architecture of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Armv6l,
    Armv7l,
    Arm64,
    Ia32,
    Mips,
    Mipsel,
    Ppc,
    Ppc64,
    X32,
    X64,
    X86,
    S390,
    S390x,
}

impl Architecture {
    /// Every accepted architecture
    pub const ALL: [Architecture; 13] = [
        Self::Armv6l,
        Self::Armv7l,
        Self::Arm64,
        Self::Ia32,
        Self::Mips,
        Self::Mipsel,
        Self::Ppc,
        Self::Ppc64,
        Self::X32,
        Self::X64,
        Self::X86,
        Self::S390,
        Self::S390x,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armv6l => "armv6l",
            Self::Armv7l => "armv7l",
            Self::Arm64 => "arm64",
            Self::Ia32 => "ia32",
            Self::Mips => "mips",
            Self::Mipsel => "mipsel",
            Self::Ppc => "ppc",
            Self::Ppc64 => "ppc64",
            Self::X32 => "x32",
            Self::X64 => "x64",
            Self::X86 => "x86",
            Self::S390 => "s390",
            Self::S390x => "s390x",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| HostnameError::InvalidFieldValue {
                field: "arch",
                value: s.to_string(),
            })
    }
}
