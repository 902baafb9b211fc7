// Copyright (c) 2025 - Cowboy AI, Inc.
//! Decryption of secret inventories
//!
//! Secret host lists are stored encrypted. Decryption is delegated to an
//! external tool (GnuPG by default) run as a blocking child process; each
//! invocation waits for the child to exit before returning.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::errors::{InventoryError, InventoryResult};

/// Something that can turn an encrypted file into plaintext
pub trait Decryptor {
    /// Check that decryption is possible at all
    fn probe(&self) -> InventoryResult<()>;

    /// Decrypt a file, returning the plaintext bytes
    fn decrypt(&self, path: &Path) -> InventoryResult<Vec<u8>>;
}

/// Decrypts with a GnuPG-compatible command line tool
///
/// Runs `<tool> --version` to probe and `<tool> -q --decrypt <path>` to
/// decrypt.
#[derive(Debug, Clone)]
pub struct GpgDecryptor {
    tool: String,
}

impl GpgDecryptor {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }
}

impl Default for GpgDecryptor {
    fn default() -> Self {
        Self::new("gpg")
    }
}

impl Decryptor for GpgDecryptor {
    fn probe(&self) -> InventoryResult<()> {
        let output = Command::new(&self.tool)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| InventoryError::DecryptUnavailable {
                tool: self.tool.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let mut reason = String::from_utf8_lossy(&output.stdout).into_owned();
            reason.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(InventoryError::DecryptUnavailable {
                tool: self.tool.clone(),
                reason: format!("{}: {}", output.status, reason.trim()),
            });
        }

        debug!(tool = %self.tool, "Decrypt tool available");
        Ok(())
    }

    fn decrypt(&self, path: &Path) -> InventoryResult<Vec<u8>> {
        let output = Command::new(&self.tool)
            .arg("-q")
            .arg("--decrypt")
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| InventoryError::DecryptFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(InventoryError::DecryptFailed {
                path: path.to_path_buf(),
                message: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        debug!(path = %path.display(), bytes = output.stdout.len(), "Decrypted secrets");
        Ok(output.stdout)
    }
}
