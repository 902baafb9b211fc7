// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for fleet-inventory
//!
//! Provides deterministic inventory sources and a stand-in decryptor.
//!
//! # Design Principles
//! - Every test gets its own temporary working directory
//! - "Encrypted" secret files hold plaintext YAML; the fake decryptor
//!   returns them as-is unless they start with [`CORRUPT_MARKER`]
//! - No test depends on a real GnuPG installation

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fleet_inventory::{Decryptor, InventoryConfig, InventoryError, InventoryResult};
use tempfile::TempDir;

/// Files starting with this fail to "decrypt"
pub const CORRUPT_MARKER: &str = "-----CORRUPT-----";

/// Public inventory with one test host
pub const PUBLIC_INVENTORY: &str = r#"
hosts:
  - test:
    - voxer:
        linux-x64-abc123def0: {ip: 10.0.0.1, port: 22, user: build}
"#;

/// Public inventory spanning several roles and providers
pub const FLEET_INVENTORY: &str = r#"
hosts:
  - infra:
    - digitalocean:
        ubuntu1604-x64-1: {ip: 192.0.2.10, alias: jenkins}
  - release:
    - osuosl:
        centos7-ppc64_le-1: {ip: 192.0.2.20, port: 2222}
    - azure:
        win2016-x64-1: {ip: 192.0.2.21, user: Administrator}
  - test:
    - softlayer:
        benchmark-ubuntu1604-x64-1: {ip: 192.0.2.30}
    - joyent:
        smartos15-x64-1: {ip: 192.0.2.31, labels: [smartos, x64]}
"#;

/// Secret test-tier hosts, disjoint from the public inventory
pub const SECRET_TEST_INVENTORY: &str = r#"
hosts:
  - test:
    - voxer:
        linux-x64-secret01: {ip: 10.0.1.1, user: root}
"#;

/// Secret infra-tier hosts
pub const SECRET_INFRA_INVENTORY: &str = r#"
hosts:
  - infra:
    - ibm:
        rhel7-s390x-1: {ip: 10.0.2.1}
"#;

/// Secret host redefining a public host with a different address
pub const CONFLICTING_INVENTORY: &str = r#"
hosts:
  - test:
    - voxer:
        linux-x64-abc123def0: {ip: 10.9.9.9}
"#;

/// Secret host that breaks the naming convention
pub const MALFORMED_INVENTORY: &str = r#"
hosts:
  - test:
    - voxer:
        not-a-valid-host-name-at-all: {}
"#;

/// Overrides file with two sections matching the same host
pub const ANSIBLE_CFG: &str = r#"
[defaults]
inventory = plugins/inventory/fleet-inventory

[hosts:voxer]
ansible_port = 2200
ansible_python_interpreter = /usr/bin/python3

[hosts:linux-x64]
ansible_port = 2201
"#;

/// Temporary working directory laid out like an ansible checkout
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(public_inventory: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("inventory.yml"), public_inventory)
            .expect("Failed to write inventory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.path().join("ansible.cfg"), contents).expect("Failed to write config");
    }

    /// Root under which `<level>/inventory.yml` secrets live
    pub fn secrets_root(&self) -> PathBuf {
        self.path().join("secrets")
    }

    pub fn write_secret(&self, access_level: &str, contents: &str) {
        let dir = self.secrets_root().join(access_level);
        fs::create_dir_all(&dir).expect("Failed to create secrets dir");
        fs::write(dir.join("inventory.yml"), contents).expect("Failed to write secret");
    }

    /// Config rooted at the workspace, with secrets under `secrets/`
    pub fn config(&self) -> InventoryConfig {
        InventoryConfig::default()
            .with_base_dir(self.path())
            .with_secrets_root(Some(self.secrets_root()))
    }
}

/// Decryptor returning file contents verbatim
#[derive(Debug, Default)]
pub struct PlaintextDecryptor {
    pub available: bool,
}

impl PlaintextDecryptor {
    pub fn available() -> Self {
        Self { available: true }
    }

    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl Decryptor for PlaintextDecryptor {
    fn probe(&self) -> InventoryResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(InventoryError::DecryptUnavailable {
                tool: "gpg".to_string(),
                reason: "not installed".to_string(),
            })
        }
    }

    fn decrypt(&self, path: &Path) -> InventoryResult<Vec<u8>> {
        let bytes = fs::read(path).map_err(|e| InventoryError::DecryptFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if bytes.starts_with(CORRUPT_MARKER.as_bytes()) {
            return Err(InventoryError::DecryptFailed {
                path: path.to_path_buf(),
                message: "decryption failed: bad session key".to_string(),
            });
        }

        Ok(bytes)
    }
}
