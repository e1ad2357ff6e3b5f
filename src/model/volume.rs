//! Container payloads: disk images, volume systems, volumes, file systems.
//!
//! These are the non-leaf layers of the content hierarchy. Each holds the
//! metadata the engine reports for that layer plus its child nodes in the
//! order the engine produced them. Opaque native handles the engine also
//! exposes are deliberately absent: handle values are not stable across
//! runs and would make dumps non-deterministic.

use crate::model::node::{ContentNode, ContentReader, EmptyContent};
use std::sync::Arc;

/// A disk image, the root layer of the hierarchy.
#[derive(Debug, Clone)]
pub struct Image {
    /// Engine-assigned identity
    pub object_id: u64,
    /// Image name
    pub name: String,
    /// Storage paths backing the image (one or more segments)
    pub paths: Vec<String>,
    /// Total image size in bytes
    pub size: u64,
    /// Sector size in bytes
    pub sector_size: u64,
    /// Image format type code
    pub image_type: u32,
    /// Child nodes, in engine order
    pub children: Vec<ContentNode>,
    /// Byte backing for ranged reads
    pub reader: Arc<dyn ContentReader>,
}

impl Image {
    /// Creates an Image with a name and otherwise zeroed metadata.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Self {
            object_id: 0,
            name: String::new(),
            paths: Vec::new(),
            size: 0,
            sector_size: 0,
            image_type: 0,
            children: Vec::new(),
            reader: Arc::new(EmptyContent),
        }
    }
}

/// A volume system (partition table) within a disk image.
#[derive(Debug, Clone)]
pub struct VolumeSystem {
    /// Engine-assigned identity
    pub object_id: u64,
    /// Block size in bytes
    pub block_size: u64,
    /// Offset of the volume system within the image, in bytes
    pub offset: u64,
    /// Size in bytes
    pub size: u64,
    /// Volume system type code
    pub vs_type: u32,
    /// Child nodes, in engine order
    pub children: Vec<ContentNode>,
    /// Byte backing for ranged reads
    pub reader: Arc<dyn ContentReader>,
}

impl Default for VolumeSystem {
    fn default() -> Self {
        Self {
            object_id: 0,
            block_size: 0,
            offset: 0,
            size: 0,
            vs_type: 0,
            children: Vec::new(),
            reader: Arc::new(EmptyContent),
        }
    }
}

/// A single volume (partition) within a volume system.
#[derive(Debug, Clone)]
pub struct Volume {
    /// Engine-assigned identity
    pub object_id: u64,
    /// Human-readable partition description
    pub description: String,
    /// Partition flags bitmask
    pub flags: u32,
    /// Length in sectors
    pub length: u64,
    /// Size in bytes
    pub size: u64,
    /// Starting sector
    pub start: u64,
    /// Volume id within the volume system
    pub vol_id: u64,
    /// Child nodes, in engine order
    pub children: Vec<ContentNode>,
    /// Byte backing for ranged reads
    pub reader: Arc<dyn ContentReader>,
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            object_id: 0,
            description: String::new(),
            flags: 0,
            length: 0,
            size: 0,
            start: 0,
            vol_id: 0,
            children: Vec::new(),
            reader: Arc::new(EmptyContent),
        }
    }
}

/// A file system within a volume (or directly within an image).
#[derive(Debug, Clone)]
pub struct FileSystem {
    /// Engine-assigned identity
    pub object_id: u64,
    /// Total number of blocks
    pub block_count: u64,
    /// Block size in bytes
    pub block_size: u64,
    /// First inode number
    pub first_inum: u64,
    /// File system id
    pub fs_id: u64,
    /// File system type code
    pub fs_type: u32,
    /// Offset of the file system within the image, in bytes
    pub img_offset: u64,
    /// Last inode number
    pub last_inum: u64,
    /// Root directory inode number
    pub root_inum: u64,
    /// Size in bytes
    pub size: u64,
    /// Containing volume id
    pub vol_id: u64,
    /// Child nodes, in engine order
    pub children: Vec<ContentNode>,
    /// Byte backing for ranged reads
    pub reader: Arc<dyn ContentReader>,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self {
            object_id: 0,
            block_count: 0,
            block_size: 0,
            first_inum: 0,
            fs_id: 0,
            fs_type: 0,
            img_offset: 0,
            last_inum: 0,
            root_inum: 0,
            size: 0,
            vol_id: 0,
            children: Vec::new(),
            reader: Arc::new(EmptyContent),
        }
    }
}
