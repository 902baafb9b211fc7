// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Metadata Normalization
//!
//! Translates the well-known metadata keys of a host entry into the
//! connection variables Ansible understands. Everything else is passed
//! through untouched (`alias`, `labels`, custom settings).

use serde_json::{Map, Value};

/// Per-host variables, as emitted under `_meta.hostvars`
pub type HostVars = Map<String, Value>;

/// Network address variable
pub const ANSIBLE_HOST: &str = "ansible_host";
/// SSH port variable, always a string
pub const ANSIBLE_PORT: &str = "ansible_port";
/// Login user variable
pub const ANSIBLE_USER: &str = "ansible_user";
/// Privilege escalation flag, set whenever a user is given
pub const ANSIBLE_BECOME: &str = "ansible_become";

/// Convert raw host metadata into Ansible variables
///
/// `ip`, `port` and `user` are consumed; the remaining keys follow the
/// derived variables so they can still override them.
pub fn normalize(mut metadata: HostVars) -> HostVars {
    let mut vars = HostVars::new();

    if let Some(ip) = metadata.remove("ip") {
        vars.insert(ANSIBLE_HOST.into(), ip);
    }

    if let Some(port) = metadata.remove("port") {
        vars.insert(ANSIBLE_PORT.into(), Value::String(scalar_to_string(port)));
    }

    if let Some(user) = metadata.remove("user") {
        vars.insert(ANSIBLE_USER.into(), user);
        vars.insert(ANSIBLE_BECOME.into(), Value::Bool(true));
    }

    vars.extend(metadata);
    vars
}

/// Ports are numbers or strings in practice; other kinds fall back to
/// their JSON text (`true`, `null`).
fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
