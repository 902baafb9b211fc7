// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Host Name Parsing

use fleet_inventory::domain::hostname::HostnameError;
use fleet_inventory::domain::{compose_hostname, Architecture, HostIdentifier, HostType, Provider};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn host_type() -> impl Strategy<Value = HostType> {
    prop::sample::select(HostType::ALL.to_vec())
}

fn provider() -> impl Strategy<Value = Provider> {
    prop::sample::select(Provider::ALL.to_vec())
}

fn architecture() -> impl Strategy<Value = Architecture> {
    prop::sample::select(Architecture::ALL.to_vec())
}

/// Free-form segment without delimiters
fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: parsing a composed name recovers every field and the
    /// original string
    #[test]
    fn prop_parse_round_trips(
        host_type in host_type(),
        provider in provider(),
        os in segment(),
        arch in architecture(),
        uid in segment(),
    ) {
        let name = format!("{host_type}-{provider}-{os}-{arch}-{uid}");
        let id = HostIdentifier::parse(&name).unwrap();

        prop_assert_eq!(id.host_type, host_type);
        prop_assert_eq!(id.provider, provider);
        prop_assert_eq!(&id.os, &os);
        prop_assert_eq!(id.architecture, arch);
        prop_assert_eq!(&id.uid, &uid);
        prop_assert_eq!(id.to_string(), name);
    }

    /// Property: any segment count other than five is malformed
    #[test]
    fn prop_wrong_segment_count_is_malformed(
        segments in prop::collection::vec(segment(), 1..10)
            .prop_filter("five segments are well-formed", |s| s.len() != 5)
    ) {
        let name = segments.join("-");
        let err = HostIdentifier::parse(&name).unwrap_err();
        prop_assert_eq!(
            err,
            HostnameError::Malformed { hostname: name, segments: segments.len() }
        );
    }

    /// Property: composing from a host key with two or three hyphens always
    /// yields a parseable name carrying the composing role and provider
    #[test]
    fn prop_compose_then_parse(
        host_type in host_type(),
        provider in provider(),
        prefix in prop::option::of(segment()),
        os in segment(),
        arch in architecture(),
        uid in segment(),
    ) {
        let host_key = match &prefix {
            Some(prefix) => format!("{prefix}-{os}-{arch}-{uid}"),
            None => format!("{os}-{arch}-{uid}"),
        };
        let name = compose_hostname(host_type.as_str(), provider.as_str(), &host_key);
        let id = HostIdentifier::parse(&name).unwrap();

        prop_assert_eq!(id.host_type, host_type);
        prop_assert_eq!(id.provider, provider);
        prop_assert_eq!(id.architecture, arch);
        prop_assert_eq!(&id.uid, &uid);
    }

    /// Property: parsing never panics
    #[test]
    fn prop_parse_total(name in ".{0,64}") {
        let _ = HostIdentifier::parse(&name);
    }
}
