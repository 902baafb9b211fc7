// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deterministic Inventory Merge
//!
//! Folds an overlay document into a base document:
//!
//! ```text
//! mapping  + mapping   → merged recursively
//! sequence + sequence  → sorted union, duplicates removed
//! scalar   + scalar    → must be equal
//! key on one side only → carried over unchanged
//! ```
//!
//! Anything else is a conflict. Conflicts abort the merge; there is no
//! "last writer wins" fallback.

use serde_json::Value;
use std::cmp::Ordering;
use thiserror::Error;

/// Merge failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Both sides define the same key with different values
    #[error("Conflict at {path}")]
    Conflict { path: String },
}

/// Merge `overlay` into `base`
///
/// On error `base` may already contain keys merged before the conflict was
/// found; callers treat a conflict as fatal and discard it.
pub fn merge(base: &mut Value, overlay: Value) -> Result<(), MergeError> {
    let mut path = Vec::new();
    merge_at(base, overlay, &mut path)
}

fn merge_at(base: &mut Value, overlay: Value, path: &mut Vec<String>) -> Result<(), MergeError> {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => {
                        path.push(key);
                        merge_at(existing, value, path)?;
                        path.pop();
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Ok(())
        }
        (Value::Array(base), Value::Array(overlay)) => {
            base.extend(overlay);
            base.sort_by(compare_values);
            base.dedup();
            Ok(())
        }
        (base, overlay) if *base == overlay => Ok(()),
        _ => Err(MergeError::Conflict {
            path: path.join("."),
        }),
    }
}

/// Total order used for sequence unions
///
/// Strings sort lexicographically and numbers numerically; anything else
/// (and mixed kinds) falls back to comparing the JSON text.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => a.to_string().cmp(&b.to_string()),
        },
        _ => a.to_string().cmp(&b.to_string()),
    }
}
