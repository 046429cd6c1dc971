//! Checksum calculation identifying a dataset revision.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of the dataset sources.
///
/// The sources are hashed in the given order, each followed by a NUL
/// separator so that moving bytes between files changes the checksum.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(sources: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for source in sources {
        hasher.update(source.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
