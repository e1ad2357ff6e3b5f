//! Per-variant attribute rendering.
//!
//! Each variant has a fixed, ordered list of attributes that appear in the
//! dump as `name: value` lines. Dispatch is an exhaustive match over the
//! node union, so a new variant cannot compile without a rendering arm.
//!
//! Formatting rules:
//! - integers render in base-10 decimal
//! - raw epoch timestamps are paired with a fixed UTC calendar rendering
//! - flag/type codes render as two lines, raw integer and canonical string
//! - string arrays render as a bracketed, comma-separated list

use crate::model::{
    dir_flags_string, format_epoch, meta_flags_string, mode_string, volume_flags_string,
    ContentNode, DirType, FileSystem, FsContent, Image, MetaType, Volume, VolumeSystem,
};

/// An ordered list of `(name, value)` attribute lines.
pub type AttributeLines = Vec<(&'static str, String)>;

/// Renders a node's own attributes, in the variant's fixed order.
pub fn attributes(node: &ContentNode) -> AttributeLines {
    match node {
        ContentNode::Image(img) => image_attributes(img),
        ContentNode::VolumeSystem(vs) => volume_system_attributes(vs),
        ContentNode::Volume(vol) => volume_attributes(vol),
        ContentNode::FileSystem(fs) => file_system_attributes(fs),
        ContentNode::Directory(fsc) | ContentNode::File(fsc) => fs_content_attributes(fsc),
    }
}

/// Renders a string array as `[a, b, c]`.
fn string_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

// Files and directories share one attribute set.
fn fs_content_attributes(fsc: &FsContent) -> AttributeLines {
    let meta_type = MetaType::from_code(fsc.meta_type);
    vec![
        ("atime", fsc.atime.to_string()),
        ("atime_as_date", format_epoch(fsc.atime)),
        ("attr_id", fsc.attr_id.to_string()),
        ("attr_type", fsc.attr_type.to_string()),
        ("crtime", fsc.crtime.to_string()),
        ("crtime_as_date", format_epoch(fsc.crtime)),
        ("ctime", fsc.ctime.to_string()),
        ("ctime_as_date", format_epoch(fsc.ctime)),
        ("dir_flags_as_string", dir_flags_string(fsc.dir_flags)),
        (
            "dir_type_as_string",
            DirType::from_code(fsc.dir_type).as_str().to_string(),
        ),
        ("dir_flags", fsc.dir_flags.to_string()),
        ("dir_type", fsc.dir_type.to_string()),
        ("file_id", fsc.file_id.to_string()),
        ("fs_id", fsc.fs_id.to_string()),
        ("gid", fsc.gid.to_string()),
        ("meta_flags_as_string", meta_flags_string(fsc.meta_flags)),
        ("meta_type_as_string", meta_type.as_str().to_string()),
        ("meta_flags", fsc.meta_flags.to_string()),
        ("meta_type", fsc.meta_type.to_string()),
        ("mode", fsc.mode.to_string()),
        ("mode_as_string", mode_string(fsc.mode, meta_type)),
        ("mtime", fsc.mtime.to_string()),
        ("mtime_as_date", format_epoch(fsc.mtime)),
        ("name", fsc.name.clone()),
        ("parent_file_id", fsc.parent_file_id.to_string()),
        ("size", fsc.size.to_string()),
        ("uid", fsc.uid.to_string()),
    ]
}

fn file_system_attributes(fs: &FileSystem) -> AttributeLines {
    vec![
        ("block_count", fs.block_count.to_string()),
        ("block_size", fs.block_size.to_string()),
        ("first_inum", fs.first_inum.to_string()),
        ("fs_id", fs.fs_id.to_string()),
        ("fs_type", fs.fs_type.to_string()),
        ("img_offset", fs.img_offset.to_string()),
        ("last_inum", fs.last_inum.to_string()),
        ("root_inum", fs.root_inum.to_string()),
        ("size", fs.size.to_string()),
        ("vol_id", fs.vol_id.to_string()),
    ]
}

fn image_attributes(img: &Image) -> AttributeLines {
    vec![
        ("name", img.name.clone()),
        ("paths", string_list(&img.paths)),
        ("size", img.size.to_string()),
        ("sector_size", img.sector_size.to_string()),
        ("image_type", img.image_type.to_string()),
    ]
}

fn volume_attributes(vol: &Volume) -> AttributeLines {
    vec![
        ("description", vol.description.clone()),
        ("flags", vol.flags.to_string()),
        ("flags_as_string", volume_flags_string(vol.flags)),
        ("length", vol.length.to_string()),
        ("size", vol.size.to_string()),
        ("start", vol.start.to_string()),
        ("vol_id", vol.vol_id.to_string()),
    ]
}

fn volume_system_attributes(vs: &VolumeSystem) -> AttributeLines {
    vec![
        ("block_size", vs.block_size.to_string()),
        ("offset", vs.offset.to_string()),
        ("size", vs.size.to_string()),
        ("vs_type", vs.vs_type.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(lines: &AttributeLines) -> Vec<&'static str> {
        lines.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_fs_content_attribute_order() {
        let node = ContentNode::File(FsContent::default());
        assert_eq!(
            names(&attributes(&node)),
            vec![
                "atime",
                "atime_as_date",
                "attr_id",
                "attr_type",
                "crtime",
                "crtime_as_date",
                "ctime",
                "ctime_as_date",
                "dir_flags_as_string",
                "dir_type_as_string",
                "dir_flags",
                "dir_type",
                "file_id",
                "fs_id",
                "gid",
                "meta_flags_as_string",
                "meta_type_as_string",
                "meta_flags",
                "meta_type",
                "mode",
                "mode_as_string",
                "mtime",
                "mtime_as_date",
                "name",
                "parent_file_id",
                "size",
                "uid",
            ]
        );
    }

    #[test]
    fn test_directory_and_file_share_attributes() {
        let fsc = FsContent::with_name("evidence");
        let as_dir = attributes(&ContentNode::Directory(fsc.clone()));
        let as_file = attributes(&ContentNode::File(fsc));
        assert_eq!(as_dir, as_file);
    }

    #[test]
    fn test_fs_content_values() {
        let fsc = FsContent {
            mtime: 1267437600,
            dir_flags: 0x01,
            dir_type: 5,
            meta_flags: 0x05,
            meta_type: 1,
            mode: 0o644,
            name: "notes.txt".to_string(),
            size: 2048,
            uid: 1000,
            ..Default::default()
        };
        let lines = attributes(&ContentNode::File(fsc));
        let get = |name: &str| {
            lines
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("mtime"), "1267437600");
        assert_eq!(get("mtime_as_date"), "2010-03-01 10:00:00 UTC");
        assert_eq!(get("dir_flags_as_string"), "Allocated");
        assert_eq!(get("dir_type_as_string"), "r");
        assert_eq!(get("meta_flags_as_string"), "Allocated, Used");
        assert_eq!(get("mode_as_string"), "-rw-r--r--");
        assert_eq!(get("name"), "notes.txt");
        assert_eq!(get("size"), "2048");
    }

    #[test]
    fn test_file_system_attribute_order() {
        let node = ContentNode::FileSystem(FileSystem::default());
        assert_eq!(
            names(&attributes(&node)),
            vec![
                "block_count",
                "block_size",
                "first_inum",
                "fs_id",
                "fs_type",
                "img_offset",
                "last_inum",
                "root_inum",
                "size",
                "vol_id",
            ]
        );
    }

    #[test]
    fn test_image_attributes() {
        let img = Image {
            name: "evidence.E01".to_string(),
            paths: vec!["evidence.E01".to_string(), "evidence.E02".to_string()],
            size: 1_048_576,
            sector_size: 512,
            image_type: 3,
            ..Default::default()
        };
        let lines = attributes(&ContentNode::Image(img));
        assert_eq!(
            lines,
            vec![
                ("name", "evidence.E01".to_string()),
                ("paths", "[evidence.E01, evidence.E02]".to_string()),
                ("size", "1048576".to_string()),
                ("sector_size", "512".to_string()),
                ("image_type", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_volume_attributes() {
        let vol = Volume {
            description: "NTFS (0x07)".to_string(),
            flags: 0x01,
            length: 204800,
            size: 104857600,
            start: 2048,
            vol_id: 2,
            ..Default::default()
        };
        let lines = attributes(&ContentNode::Volume(vol));
        assert_eq!(
            lines,
            vec![
                ("description", "NTFS (0x07)".to_string()),
                ("flags", "1".to_string()),
                ("flags_as_string", "Allocated".to_string()),
                ("length", "204800".to_string()),
                ("size", "104857600".to_string()),
                ("start", "2048".to_string()),
                ("vol_id", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_volume_system_attribute_order() {
        let node = ContentNode::VolumeSystem(VolumeSystem::default());
        assert_eq!(
            names(&attributes(&node)),
            vec!["block_size", "offset", "size", "vs_type"]
        );
    }
}
