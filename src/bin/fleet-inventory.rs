// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ansible dynamic inventory entry point
//!
//! Prints the full inventory as JSON on stdout. Logs and warnings go to
//! stderr so Ansible only ever sees the document.
//!
//! Run with: ansible-playbook -i fleet-inventory playbook.yml

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleet_inventory::pipeline::{render, select_host};
use fleet_inventory::{GpgDecryptor, InventoryConfig, InventoryPipeline};

/// Dynamic inventory built from declarative YAML host lists
#[derive(Parser, Debug)]
#[command(name = "fleet-inventory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the whole inventory (the default)
    #[arg(long, conflicts_with = "host")]
    list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Public inventory file
    #[arg(long, default_value = "inventory.yml")]
    inventory: PathBuf,

    /// Config file with [hosts:...] override sections
    #[arg(long, default_value = "ansible.cfg")]
    config: PathBuf,

    /// Tool used to decrypt secret inventories
    #[arg(long, default_value = "gpg")]
    decrypt_tool: String,

    /// Secrets root directory
    #[arg(long, env = "NODE_BUILD_SECRETS")]
    secrets: Option<PathBuf>,
}

impl Cli {
    fn inventory_config(&self) -> InventoryConfig {
        InventoryConfig::default()
            .with_inventory_path(&self.inventory)
            .with_overrides_path(&self.config)
            .with_decrypt_tool(&self.decrypt_tool)
            .with_secrets_root(self.secrets.clone())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.inventory_config();
    let decryptor = GpgDecryptor::new(config.decrypt_tool.clone());

    let export = InventoryPipeline::new(config, decryptor)
        .run()
        .with_context(|| format!("Failed to build inventory from {}", cli.inventory.display()))?;

    let output = match &cli.host {
        Some(host) => {
            info!(host = %host, "Selecting single host");
            select_host(&export, host)
        }
        None => export,
    };

    println!("{}", render(&output)?);
    Ok(())
}
