//! Integration tests for CRT-RS crates.
//!
//! End-to-end checks that run presets through the geometry chain and into
//! ST maps.
