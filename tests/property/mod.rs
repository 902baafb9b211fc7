// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Host name parsing and inventory merge properties.

mod hostname_properties;
mod merge_properties;
