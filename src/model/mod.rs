//! The content model consumed by the dump serializer.
//!
//! A content tree is a hierarchy of heterogeneous nodes, disk image down to
//! individual files, produced by an external forensic analysis engine. The
//! serializer borrows the tree for the duration of one dump and never
//! mutates or retains it.
//!
//! - [`ContentNode`] - the closed union of hierarchy variants
//! - [`ContentReader`] - the byte-backing seam toward the engine
//! - [`FsContent`], [`Image`], [`Volume`], [`VolumeSystem`], [`FileSystem`] -
//!   per-variant metadata payloads

mod common;
mod fscontent;
mod node;
mod volume;

pub use common::{
    dir_flags_string, format_epoch, meta_flags_string, mode_string, volume_flags_string, DirType,
    MetaType,
};
pub use fscontent::FsContent;
pub use node::{shared_reader, BufferReader, ContentNode, ContentReader, EmptyContent};
pub use volume::{FileSystem, Image, Volume, VolumeSystem};
