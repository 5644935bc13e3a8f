//! Test-only library interface for isomon.
//!
//! This module exposes the pure logic modules that can be tested on
//! the host (no embedded hardware required): the mode state machine,
//! debouncing, long-press detection, analog mapping and the feedback
//! controller.
//!
//! Usage: `cargo test` or `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod config;
pub mod debounce;
pub mod feedback;
pub mod longpress;
pub mod state;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
