//! Streaming content digests.
//!
//! A node's entire byte range is consumed in fixed-size chunks and fed into
//! a running MD5, so peak memory stays at one chunk buffer no matter how
//! large the node is. MD5 is chosen for speed: the digest guards the dump
//! against engine regressions, it is not a security boundary.

use crate::error::ReadError;
use crate::model::ContentNode;
use digest::Digest as _;
use md5::Md5;
use std::fmt;

/// Chunk size for ranged reads while digesting, in bytes.
pub const READ_CHUNK_SIZE: u64 = 8192;

/// A finalized content digest: 16 bytes of MD5.
///
/// Displays as 32 lowercase hexadecimal characters, two per byte,
/// most-significant nibble first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; 16]);

impl ContentDigest {
    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Digests a node's full byte range `[0, size)`.
///
/// Reads proceed chunk by chunk with an explicit offset cursor; the final
/// chunk is `min(remaining, READ_CHUNK_SIZE)`. A node of size zero makes no
/// read calls and yields the digest of empty input. If any chunk read
/// fails, the error is returned immediately; a partial byte sequence is
/// never finalized as if it were complete.
pub fn content_digest(node: &ContentNode) -> Result<ContentDigest, ReadError> {
    let size = node.size();
    let mut hasher = Md5::new();

    let mut offset = 0;
    while offset < size {
        let length = READ_CHUNK_SIZE.min(size - offset);
        let chunk = node.read(offset, length)?;
        hasher.update(&chunk);
        offset += length;
    }

    Ok(ContentDigest(hasher.finalize().into()))
}
