// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Inventory Merge

use fleet_inventory::merge;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

fn hostname() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Inventory-shaped document: one group with a host list plus hostvars
fn document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(hostname(), "[a-z0-9.]{1,8}", 0..8).prop_map(|hosts| {
        let mut hostvars = Map::new();
        for (name, address) in &hosts {
            hostvars.insert(name.clone(), json!({ "ansible_host": address }));
        }
        json!({
            "_meta": { "hostvars": hostvars },
            "test": { "hosts": hosts.keys().collect::<Vec<_>>() },
        })
    })
}

/// Two documents that never disagree on a scalar
fn non_conflicting_pair() -> impl Strategy<Value = (Value, Value)> {
    (document(), document()).prop_map(|(a, mut b)| {
        let base_vars = a["_meta"]["hostvars"].as_object().cloned().unwrap_or_default();
        if let Some(overlay_vars) = b["_meta"]["hostvars"].as_object_mut() {
            for (name, vars) in overlay_vars.iter_mut() {
                if let Some(existing) = base_vars.get(name) {
                    *vars = existing.clone();
                }
            }
        }
        (a, b)
    })
}

fn sorted_unique(values: &Value) -> bool {
    values
        .as_array()
        .map(|items| items.windows(2).all(|w| w[0].as_str() < w[1].as_str()))
        .unwrap_or(false)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: merge is idempotent, merge(merge(A, B), B) == merge(A, B)
    #[test]
    fn prop_merge_idempotent((a, b) in non_conflicting_pair()) {
        let mut once = a.clone();
        merge(&mut once, b.clone()).unwrap();

        let mut twice = once.clone();
        merge(&mut twice, b).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// Property: merged host lists are sorted and free of duplicates
    #[test]
    fn prop_host_lists_sorted_unique((a, b) in non_conflicting_pair()) {
        let mut merged = a;
        merge(&mut merged, b).unwrap();
        prop_assert!(sorted_unique(&merged["test"]["hosts"]));
    }

    /// Property: merging with an empty document changes nothing
    #[test]
    fn prop_empty_overlay_is_identity(a in document()) {
        let mut merged = a.clone();
        merge(&mut merged, json!({})).unwrap();
        prop_assert_eq!(merged, a);
    }

    /// Property: every host of either side survives the merge
    #[test]
    fn prop_merge_keeps_all_hosts((a, b) in non_conflicting_pair()) {
        let mut merged = a.clone();
        merge(&mut merged, b.clone()).unwrap();

        for side in [&a, &b] {
            for name in side["_meta"]["hostvars"].as_object().into_iter().flat_map(|m| m.keys()) {
                prop_assert!(merged["_meta"]["hostvars"].get(name).is_some());
            }
        }
    }

    /// Property: differing scalars always conflict
    #[test]
    fn prop_scalar_mismatch_conflicts(x in any::<i64>(), y in any::<i64>()) {
        prop_assume!(x != y);
        let mut base = json!({ "x": x });
        let overlay = json!({ "x": y });
        prop_assert!(merge(&mut base, overlay).is_err());
    }
}
