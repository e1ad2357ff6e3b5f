//! Deterministic diagnostic dumps of hierarchical forensic content trees.
//!
//! This crate serializes a content hierarchy (disk image → volume system →
//! volume → file system → directory/file), as produced by an external
//! forensic analysis engine, into a line-oriented, tab-indented textual
//! dump. Every node contributes its attributes and a streaming MD5 digest
//! of its full byte range, so two dumps of the same evidence compare
//! bit-for-bit and engine regressions show up as textual diffs.
//!
//! # Quick Start
//!
//! ```rust
//! use contentdump::{dump_to_string, BufferReader, ContentNode, FsContent, shared_reader};
//!
//! let data = b"hello".to_vec();
//! let root = ContentNode::File(FsContent {
//!     object_id: 1,
//!     name: "hello.txt".to_string(),
//!     size: data.len() as u64,
//!     reader: shared_reader(BufferReader::new(data)),
//!     ..Default::default()
//! });
//!
//! let text = dump_to_string(&root).unwrap();
//! assert!(text.starts_with("File >"));
//! assert!(text.contains("read: md5="));
//! ```
//!
//! # Failure Semantics
//!
//! A node whose content cannot be read is recorded inline and the dump
//! continues; the snapshot is best-effort over unreadable evidence. A
//! rejected sink write or a cycle in the (externally supplied, possibly
//! corrupted) tree aborts the dump with an error.
//!
//! # Module Structure
//!
//! - [`model`] - the content-node union and its byte-backing seam
//! - [`digest`] - chunked streaming content digests
//! - [`render`] - per-variant attribute lines
//! - [`walker`] - the depth-first dump itself
//! - [`error`] - error types

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod digest;
pub mod error;
pub mod model;
pub mod render;
pub mod walker;

// Re-export commonly used types at the crate root
pub use digest::{content_digest, ContentDigest, READ_CHUNK_SIZE};
pub use error::{DumpError, ReadError};
pub use model::{
    shared_reader, BufferReader, ContentNode, ContentReader, EmptyContent, FileSystem, FsContent,
    Image, Volume, VolumeSystem,
};
pub use walker::{dump, dump_to_string};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
