//! ContentNode - the closed union of content hierarchy variants.
//!
//! The serializer consumes the content model exclusively through this type.
//! Variant-specific behavior is dispatched with exhaustive matching, so
//! adding or removing a variant is a compile-time-checked, total change.

use crate::error::ReadError;
use crate::model::fscontent::FsContent;
use crate::model::volume::{FileSystem, Image, Volume, VolumeSystem};
use std::fmt;
use std::sync::Arc;

/// Byte backing for a node's content.
///
/// The analysis engine owns the actual storage; implementations of this
/// trait resolve ranged reads against it. The range is validated against
/// the node's size before it reaches the reader, so implementations only
/// see requests within `[0, size)`.
pub trait ContentReader: fmt::Debug {
    /// Reads `length` bytes starting at `offset`.
    fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>, ReadError>;
}

/// In-memory byte backing.
#[derive(Debug, Clone, Default)]
pub struct BufferReader {
    data: Vec<u8>,
}

impl BufferReader {
    /// Creates a reader over the given bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns the backing length in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns true if the backing is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ContentReader for BufferReader {
    fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>, ReadError> {
        let end = offset.checked_add(length).ok_or(ReadError::OutOfRange {
            offset,
            length,
            size: self.len(),
        })?;
        if end > self.len() {
            return Err(ReadError::OutOfRange {
                offset,
                length,
                size: self.len(),
            });
        }
        Ok(self.data[offset as usize..end as usize].to_vec())
    }
}

/// Zero-length byte backing, the default for nodes without content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContent;

impl ContentReader for EmptyContent {
    fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>, ReadError> {
        if length == 0 {
            return Ok(Vec::new());
        }
        Err(ReadError::OutOfRange {
            offset,
            length,
            size: 0,
        })
    }
}

/// One node of the content hierarchy.
///
/// Directory and File carry the same payload ([`FsContent`]); the tag alone
/// distinguishes them, matching how the engine reports them.
#[derive(Debug, Clone)]
pub enum ContentNode {
    /// A disk image
    Image(Image),
    /// A volume system (partition table)
    VolumeSystem(VolumeSystem),
    /// A single volume (partition)
    Volume(Volume),
    /// A file system
    FileSystem(FileSystem),
    /// A directory within a file system
    Directory(FsContent),
    /// A file within a file system
    File(FsContent),
}

impl ContentNode {
    /// Returns the variant name, used verbatim as the dump title line.
    pub fn variant_name(&self) -> &'static str {
        match self {
            ContentNode::Image(_) => "Image",
            ContentNode::VolumeSystem(_) => "VolumeSystem",
            ContentNode::Volume(_) => "Volume",
            ContentNode::FileSystem(_) => "FileSystem",
            ContentNode::Directory(_) => "Directory",
            ContentNode::File(_) => "File",
        }
    }

    /// Returns the engine-assigned identity of this node.
    pub fn object_id(&self) -> u64 {
        match self {
            ContentNode::Image(img) => img.object_id,
            ContentNode::VolumeSystem(vs) => vs.object_id,
            ContentNode::Volume(vol) => vol.object_id,
            ContentNode::FileSystem(fs) => fs.object_id,
            ContentNode::Directory(fsc) | ContentNode::File(fsc) => fsc.object_id,
        }
    }

    /// Returns the node's content size in bytes.
    pub fn size(&self) -> u64 {
        match self {
            ContentNode::Image(img) => img.size,
            ContentNode::VolumeSystem(vs) => vs.size,
            ContentNode::Volume(vol) => vol.size,
            ContentNode::FileSystem(fs) => fs.size,
            ContentNode::Directory(fsc) | ContentNode::File(fsc) => fsc.size,
        }
    }

    /// Returns the node's children in engine order. Empty for leaves.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Image(img) => &img.children,
            ContentNode::VolumeSystem(vs) => &vs.children,
            ContentNode::Volume(vol) => &vol.children,
            ContentNode::FileSystem(fs) => &fs.children,
            ContentNode::Directory(fsc) | ContentNode::File(fsc) => &fsc.children,
        }
    }

    /// Reads `length` bytes of content starting at `offset`.
    ///
    /// The range must satisfy `offset + length <= size()`; out-of-range
    /// requests fail without touching the backing reader.
    pub fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>, ReadError> {
        let size = self.size();
        match offset.checked_add(length) {
            Some(end) if end <= size => self.reader().read(offset, length),
            _ => Err(ReadError::OutOfRange {
                offset,
                length,
                size,
            }),
        }
    }

    fn reader(&self) -> &dyn ContentReader {
        match self {
            ContentNode::Image(img) => img.reader.as_ref(),
            ContentNode::VolumeSystem(vs) => vs.reader.as_ref(),
            ContentNode::Volume(vol) => vol.reader.as_ref(),
            ContentNode::FileSystem(fs) => fs.reader.as_ref(),
            ContentNode::Directory(fsc) | ContentNode::File(fsc) => fsc.reader.as_ref(),
        }
    }
}

/// Convenience for sharing a reader across nodes.
pub fn shared_reader<R: ContentReader + 'static>(reader: R) -> Arc<dyn ContentReader> {
    Arc::new(reader)
}
