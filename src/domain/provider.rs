// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hosting Provider Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HostnameError;

/// Organisation hosting a machine
///
/// Validated for consistency only; nothing here talks to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Azure,
    DigitalOcean,
    Joyent,
    Ibm,
    LinuxOneCc,
    MacStadium,
    Marist,
    MiniNodes,
    Msft,
    Osuosl,
    Rackspace,
    RequireIo,
    Scaleway,
    Softlayer,
    Voxer,
    PacketNet,
    NearForm,
}

impl Provider {
    /// Every known provider
    pub const ALL: [Provider; 17] = [
        Self::Azure,
        Self::DigitalOcean,
        Self::Joyent,
        Self::Ibm,
        Self::LinuxOneCc,
        Self::MacStadium,
        Self::Marist,
        Self::MiniNodes,
        Self::Msft,
        Self::Osuosl,
        Self::Rackspace,
        Self::RequireIo,
        Self::Scaleway,
        Self::Softlayer,
        Self::Voxer,
        Self::PacketNet,
        Self::NearForm,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::DigitalOcean => "digitalocean",
            Self::Joyent => "joyent",
            Self::Ibm => "ibm",
            Self::LinuxOneCc => "linuxonecc",
            Self::MacStadium => "macstadium",
            Self::Marist => "marist",
            Self::MiniNodes => "mininodes",
            Self::Msft => "msft",
            Self::Osuosl => "osuosl",
            Self::Rackspace => "rackspace",
            Self::RequireIo => "requireio",
            Self::Scaleway => "scaleway",
            Self::Softlayer => "softlayer",
            Self::Voxer => "voxer",
            Self::PacketNet => "packetnet",
            Self::NearForm => "nearform",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| HostnameError::InvalidFieldValue {
                field: "provider",
                value: s.to_string(),
            })
    }
}
