// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Pipeline
//!
//! ```text
//! inventory.yml ──build──┐
//!                        ├──merge──> JSON
//! secrets/<level>/ ──decrypt──build──┘   (per access level, optional)
//! ```
//!
//! The public inventory is required and any failure building it is fatal.
//! Secrets are optional: an unusable decrypt tool, a missing secrets root,
//! or a tier that cannot be decrypted only produce warnings. A secret host
//! that is malformed or conflicts with the public inventory is still fatal.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{InventoryConfig, SECRETS_ENV_VAR};
use crate::decrypt::Decryptor;
use crate::domain::HostType;
use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::{InventoryBuilder, InventorySource};
use crate::merge::merge;
use crate::overrides::HostOverrides;

/// Drives one full inventory build
pub struct InventoryPipeline<D> {
    config: InventoryConfig,
    decryptor: D,
}

impl<D: Decryptor> InventoryPipeline<D> {
    pub fn new(config: InventoryConfig, decryptor: D) -> Self {
        Self { config, decryptor }
    }

    /// Build the public inventory and merge in every readable secret tier
    pub fn run(&self) -> InventoryResult<Value> {
        let overrides = HostOverrides::from_file(
            self.config.resolve(&self.config.overrides_path),
            &self.config.override_prefix,
        )?;
        let builder = InventoryBuilder::new(self.config.private_key_prefix.clone(), overrides);

        let public_path = self.config.resolve(&self.config.inventory_path);
        let public = InventorySource::from_file(&public_path)?;
        info!(
            path = %public_path.display(),
            hosts = public.host_count(),
            "Loaded public inventory"
        );

        let mut export = builder.build(public)?.to_value()?;

        if let Err(e) = self.decryptor.probe() {
            warn!(error = %e, "Decrypt tool unavailable, skipping secret inventories");
            return Ok(export);
        }

        let secrets_root = match self.locate_secrets_root() {
            Ok(root) => root,
            Err(e) => {
                warn!(error = %e, "Skipping secret inventories");
                return Ok(export);
            }
        };

        for access_level in HostType::ALL {
            let path = secrets_root
                .join(access_level.as_str())
                .join(self.config.inventory_filename());

            match self.load_secrets(&path) {
                Ok(source) => {
                    let secrets = builder.build(source)?;
                    merge(&mut export, secrets.to_value()?)?;
                    info!(
                        access_level = %access_level,
                        hosts = secrets.hostvars.len(),
                        "Merged secret inventory"
                    );
                }
                Err(e) if e.is_tier_local() => {
                    warn!(access_level = %access_level, error = %e, "Skipping secret inventory");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(export)
    }

    /// Find the secrets root directory
    ///
    /// An explicit root wins and is never second-guessed: if it is not a
    /// directory, secrets are skipped. Otherwise the first existing
    /// candidate is used.
    pub fn locate_secrets_root(&self) -> InventoryResult<PathBuf> {
        if let Some(root) = &self.config.secrets_root {
            let root = self.config.resolve(root);
            return if root.is_dir() {
                Ok(canonical(root))
            } else {
                Err(InventoryError::SecretsRootNotFound {
                    message: format!(
                        "{SECRETS_ENV_VAR} defined but {} is not a directory",
                        root.display()
                    ),
                })
            };
        }

        self.config
            .secrets_candidates
            .iter()
            .map(|candidate| self.config.resolve(candidate))
            .find(|candidate| candidate.is_dir())
            .map(canonical)
            .ok_or_else(|| InventoryError::SecretsRootNotFound {
                message: format!("could not find secrets, please define {SECRETS_ENV_VAR}"),
            })
    }

    fn load_secrets(&self, path: &Path) -> InventoryResult<InventorySource> {
        if !path.is_file() {
            return Err(InventoryError::DecryptFailed {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }

        let plaintext = self.decryptor.decrypt(path)?;
        debug!(path = %path.display(), "Parsing decrypted inventory");

        InventorySource::from_slice(&plaintext).map_err(|e| InventoryError::DecryptFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn canonical(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}

/// Variables of one host from a built inventory, `{}` if unknown
pub fn select_host(export: &Value, hostname: &str) -> Value {
    export
        .get("_meta")
        .and_then(|meta| meta.get("hostvars"))
        .and_then(|hostvars| hostvars.get(hostname))
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

/// Render an inventory as two-space indented JSON
pub fn render(export: &Value) -> InventoryResult<String> {
    Ok(serde_json::to_string_pretty(export)?)
}
