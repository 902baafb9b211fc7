// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory generator configuration
//!
//! Everything the pipeline would otherwise read from the process
//! environment lives here, so tests can build an inventory without
//! touching environment variables or the working directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the secrets root directory
pub const SECRETS_ENV_VAR: &str = "NODE_BUILD_SECRETS";

/// Configuration for one inventory run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Public inventory file
    pub inventory_path: PathBuf,
    /// Config file carrying `[hosts:...]` overrides
    pub overrides_path: PathBuf,
    /// Section name prefix marking host overrides
    pub override_prefix: String,
    /// Decrypt tool executable
    pub decrypt_tool: String,
    /// Explicit secrets root; disables the candidate search when set
    pub secrets_root: Option<PathBuf>,
    /// Secrets root candidates, tried in order, relative to `base_dir`
    pub secrets_candidates: Vec<PathBuf>,
    /// Directory relative paths are resolved against
    pub base_dir: PathBuf,
    /// Group key file path prefix; the group name is appended
    pub private_key_prefix: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.yml"),
            overrides_path: PathBuf::from("ansible.cfg"),
            override_prefix: "hosts:".to_string(),
            decrypt_tool: "gpg".to_string(),
            secrets_root: None,
            secrets_candidates: vec![
                PathBuf::from("../../secrets/build/"),
                PathBuf::from("../../nodejs-private/secrets/build/"),
                PathBuf::from("../../../nodejs-private/secrets/build/"),
            ],
            base_dir: PathBuf::from("."),
            private_key_prefix: "~/.ssh/nodejs_build_".to_string(),
        }
    }
}

impl InventoryConfig {
    pub fn with_inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inventory_path = path.into();
        self
    }

    pub fn with_overrides_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides_path = path.into();
        self
    }

    pub fn with_decrypt_tool(mut self, tool: impl Into<String>) -> Self {
        self.decrypt_tool = tool.into();
        self
    }

    pub fn with_secrets_root(mut self, root: Option<PathBuf>) -> Self {
        self.secrets_root = root;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Name of the inventory file, reused for every secret access level
    pub fn inventory_filename(&self) -> &Path {
        self.inventory_path
            .file_name()
            .map(Path::new)
            .unwrap_or(self.inventory_path.as_path())
    }

    /// Resolve a path against `base_dir` unless it is absolute
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
