//! FsContent - metadata payload shared by File and Directory nodes.
//!
//! Files and directories expose the same attribute set in the engine's
//! data model; the two variants differ only in their tag.

use crate::model::node::{ContentNode, ContentReader, EmptyContent};
use std::sync::Arc;

/// Metadata for a file or directory inside a file system.
///
/// Raw integer codes (types, flags, mode) are kept as the engine reports
/// them; canonical string forms are derived at render time so a dump always
/// shows both.
#[derive(Debug, Clone)]
pub struct FsContent {
    /// Engine-assigned identity, unique per node in a well-formed tree
    pub object_id: u64,

    // === Timestamps (raw epoch seconds) ===
    /// Last access time
    pub atime: i64,
    /// Creation time
    pub crtime: i64,
    /// Metadata change time
    pub ctime: i64,
    /// Last modification time
    pub mtime: i64,

    // === Attribute identification ===
    /// Attribute id within the inode
    pub attr_id: u32,
    /// Attribute type code
    pub attr_type: u32,

    // === Types and flags (engine codes) ===
    /// Directory-entry flags bitmask
    pub dir_flags: u32,
    /// Directory-entry type code
    pub dir_type: u32,
    /// Inode flags bitmask
    pub meta_flags: u32,
    /// Inode type code
    pub meta_type: u32,
    /// Unix mode bits
    pub mode: u32,

    // === Identifiers ===
    /// File id within the file system
    pub file_id: u64,
    /// Owning file system id
    pub fs_id: u64,
    /// Parent file id
    pub parent_file_id: u64,

    // === Ownership ===
    /// Owner user id
    pub uid: u32,
    /// Owner group id
    pub gid: u32,

    /// Entry name
    pub name: String,
    /// Content size in bytes
    pub size: u64,

    /// Child nodes, in engine order
    pub children: Vec<ContentNode>,
    /// Byte backing for ranged reads
    pub reader: Arc<dyn ContentReader>,
}

impl FsContent {
    /// Creates an FsContent with a name and otherwise zeroed metadata.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Default for FsContent {
    fn default() -> Self {
        Self {
            object_id: 0,
            atime: 0,
            crtime: 0,
            ctime: 0,
            mtime: 0,
            attr_id: 0,
            attr_type: 0,
            dir_flags: 0,
            dir_type: 0,
            meta_flags: 0,
            meta_type: 0,
            mode: 0,
            file_id: 0,
            fs_id: 0,
            parent_file_id: 0,
            uid: 0,
            gid: 0,
            name: String::new(),
            size: 0,
            children: Vec::new(),
            reader: Arc::new(EmptyContent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_content_with_name() {
        let fsc = FsContent::with_name("report.txt");
        assert_eq!(fsc.name, "report.txt");
        assert_eq!(fsc.size, 0);
        assert!(fsc.children.is_empty());
    }

    #[test]
    fn test_fs_content_default_reader_is_empty() {
        let fsc = FsContent::default();
        assert!(fsc.reader.read(0, 0).is_ok());
        assert!(fsc.reader.read(0, 1).is_err());
    }
}
