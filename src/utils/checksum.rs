//! SHA-256 helpers and the content transform applied by the default processor.

use sha2::{Digest, Sha256};

/// Name used in checksum lines when the content came from stdin.
pub const STDIN_NAME: &str = "-";

/// Returns the lowercase hex SHA-256 digest of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Formats a `sha256sum`-compatible line: `<digest>  <name>\n`.
pub fn checksum_line(digest: &str, name: &str) -> String {
    format!("{digest}  {name}\n")
}

/// Renders `content` as a checksum line for `name`.
pub fn transform(content: &[u8], name: &str) -> String {
    checksum_line(&sha256_hex(content), name)
}
