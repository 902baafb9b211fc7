// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-host variable overrides from the local Ansible config
//!
//! The overrides live in `ansible.cfg` next to the inventory, as INI
//! sections whose name starts with `hosts:`. The rest of the section name
//! is matched as a substring of each host name:
//!
//! ```ini
//! [hosts:freebsd]
//! ansible_python_interpreter = /usr/local/bin/python
//!
//! [hosts:smartos]
//! ansible_python_interpreter = /opt/local/bin/python
//! ```
//!
//! Only the subset of INI understood by Python's `configparser` that the
//! inventory needs is supported: `key = value` / `key: value` pairs,
//! `#` and `;` comment lines, lower-cased keys, indented continuation
//! lines, and a `[DEFAULT]` section inherited by every other section.
//! Repeating a section, or an option within one section, is an error.

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::domain::HostVars;
use crate::errors::{InventoryError, InventoryResult};

/// Section holding values inherited by every other section
const DEFAULT_SECTION: &str = "DEFAULT";

/// One `[hosts:<pattern>]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSection {
    /// Substring a host name must contain for the section to apply
    pub pattern: String,
    /// Variables in declaration order, `[DEFAULT]` values first
    pub vars: Vec<(String, String)>,
}

/// Host overrides in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostOverrides {
    sections: Vec<OverrideSection>,
}

struct RawSection {
    name: String,
    pairs: Vec<(String, String)>,
}

impl HostOverrides {
    /// Load overrides from a config file
    ///
    /// A missing file is not an error and yields no overrides.
    pub fn from_file<P: AsRef<Path>>(path: P, prefix: &str) -> InventoryResult<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            debug!(path = %path.display(), "No overrides file");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| InventoryError::OverridesInvalid {
            path: path.to_path_buf(),
            line: 0,
            message: e.to_string(),
        })?;

        Self::parse(&contents, prefix).map_err(|(line, message)| InventoryError::OverridesInvalid {
            path: path.to_path_buf(),
            line,
            message,
        })
    }

    /// Parse INI content, keeping sections whose name starts with `prefix`
    ///
    /// A line indented deeper than the key it follows continues that key's
    /// value, joined with a newline. Errors carry the 1-based line number
    /// and a message.
    pub fn parse(contents: &str, prefix: &str) -> Result<Self, (usize, String)> {
        let mut defaults: Vec<(String, String)> = Vec::new();
        let mut sections: Vec<RawSection> = Vec::new();
        let mut seen = HashSet::new();
        let mut in_default = false;
        // Indent and key of the last pair, while continuation lines may follow
        let mut open_value: Option<(usize, String)> = None;

        for (index, raw_line) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            if let Some((key_indent, key)) = &open_value {
                if indent > *key_indent {
                    if let Some(pairs) = current_pairs(in_default, &mut defaults, &mut sections) {
                        if let Some((_, value)) = pairs.iter_mut().find(|(k, _)| k == key) {
                            value.push('\n');
                            value.push_str(line);
                        }
                    }
                    continue;
                }
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_string();
                if !seen.insert(name.clone()) {
                    return Err((line_no, format!("section '{name}' already exists")));
                }
                in_default = name == DEFAULT_SECTION;
                if !in_default {
                    sections.push(RawSection {
                        name,
                        pairs: Vec::new(),
                    });
                }
                open_value = None;
                continue;
            }

            let Some((key, value)) = split_pair(line) else {
                return Err((line_no, format!("expected 'key = value', found '{line}'")));
            };

            let Some(pairs) = current_pairs(in_default, &mut defaults, &mut sections) else {
                return Err((line_no, "no section header before first entry".to_string()));
            };
            if pairs.iter().any(|(k, _)| *k == key) {
                return Err((line_no, format!("option '{key}' already exists in section")));
            }
            pairs.push((key.clone(), value));
            open_value = Some((indent, key));
        }

        let sections = sections
            .into_iter()
            .filter_map(|section| {
                let pattern = section.name.strip_prefix(prefix)?.to_string();
                let mut vars = defaults.clone();
                for (key, value) in section.pairs {
                    set_pair(&mut vars, key, value);
                }
                Some(OverrideSection { pattern, vars })
            })
            .collect();

        Ok(Self { sections })
    }

    /// Sections in declaration order
    pub fn sections(&self) -> &[OverrideSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Apply every section matching `hostname`, later sections winning
    pub fn apply(&self, hostname: &str, vars: &mut HostVars) {
        for section in self.sections.iter().filter(|s| hostname.contains(&s.pattern)) {
            debug!(hostname, pattern = %section.pattern, "Applying host overrides");
            for (key, value) in &section.vars {
                vars.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }
}

fn split_pair(line: &str) -> Option<(String, String)> {
    let index = line.find(|c: char| c == '=' || c == ':')?;
    let key = line[..index].trim();
    if key.is_empty() {
        return None;
    }
    let value = line[index + 1..].trim();
    Some((key.to_lowercase(), value.to_string()))
}

fn current_pairs<'a>(
    in_default: bool,
    defaults: &'a mut Vec<(String, String)>,
    sections: &'a mut [RawSection],
) -> Option<&'a mut Vec<(String, String)>> {
    if in_default {
        Some(defaults)
    } else {
        sections.last_mut().map(|section| &mut section.pairs)
    }
}

/// Insert or replace, keeping the original position of an existing key
fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(existing) => existing.1 = value,
        None => pairs.push((key, value)),
    }
}
