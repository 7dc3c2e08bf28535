//! Shared utility functions for SmartCryptoLab.
//!
//! This module provides the hashing helpers and the content transform used by
//! the default processor.

pub mod checksum;

pub use checksum::{checksum_line, sha256_hex, transform, STDIN_NAME};
