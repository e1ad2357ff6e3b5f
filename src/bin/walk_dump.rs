//! walk_dump - Map a live directory tree into the content model and dump it.
//!
//! This tool builds a Directory/File content tree from a directory on the
//! local file system, backing each file's content with ranged reads, then
//! writes the deterministic dump to stdout. Useful for exercising the dump
//! format end-to-end without a forensic image.
//!
//! # Usage
//!
//! ```bash
//! walk_dump [PATH] > snapshot.txt
//! RUST_LOG=contentdump=trace walk_dump /evidence/export > snapshot.txt
//! ```

use std::fs::{self, File, Metadata};
use std::io::{self, Write};
use std::os::unix::fs::{FileExt, MetadataExt};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use contentdump::{dump, shared_reader, ContentNode, ContentReader, FsContent, ReadError};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Map a directory tree into the content model and dump it to stdout.
#[derive(Parser, Debug)]
#[command(name = "walk_dump")]
#[command(version = VERSION)]
#[command(about = "Dump a directory tree as a deterministic content snapshot")]
struct Args {
    /// Directory to walk (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,
}

/// File-backed content, read at absolute offsets.
#[derive(Debug)]
struct FileContent {
    file: File,
}

impl ContentReader for FileContent {
    fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>, ReadError> {
        let mut buf = vec![0u8; length as usize];
        self.file.read_exact_at(&mut buf, offset)?;
        Ok(buf)
    }
}

/// Content that reports a fixed failure on every read.
///
/// Used for files that exist in the tree but could not be opened, so the
/// dump records the failure inline instead of dropping the node.
#[derive(Debug)]
struct UnreadableContent {
    message: String,
}

impl ContentReader for UnreadableContent {
    fn read(&self, _offset: u64, _length: u64) -> Result<Vec<u8>, ReadError> {
        Err(ReadError::Engine(self.message.clone()))
    }
}

/// Engine type codes for directory entries and inodes.
mod codes {
    pub const DIR_TYPE_REGULAR: u32 = 5;
    pub const DIR_TYPE_DIRECTORY: u32 = 3;
    pub const META_TYPE_REGULAR: u32 = 1;
    pub const META_TYPE_DIRECTORY: u32 = 2;
    pub const DIR_FLAG_ALLOCATED: u32 = 0x01;
    pub const META_FLAGS_ALLOCATED_USED: u32 = 0x05;
}

/// Sequential object-id assignment for one walk.
struct IdCounter(u64);

impl IdCounter {
    fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

fn metadata_into(fsc: &mut FsContent, metadata: &Metadata, parent_ino: u64) {
    fsc.atime = metadata.atime();
    fsc.ctime = metadata.ctime();
    fsc.mtime = metadata.mtime();
    // Creation time is not available on every file system; leave it zero
    // rather than guessing.
    if let Ok(created) = metadata.created() {
        if let Ok(since_epoch) = created.duration_since(std::time::UNIX_EPOCH) {
            fsc.crtime = since_epoch.as_secs() as i64;
        }
    }
    fsc.mode = metadata.mode() & 0o7777;
    fsc.uid = metadata.uid();
    fsc.gid = metadata.gid();
    fsc.file_id = metadata.ino();
    fsc.parent_file_id = parent_ino;
}

fn file_node(path: &Path, metadata: &Metadata, parent_ino: u64, ids: &mut IdCounter) -> ContentNode {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut fsc = FsContent::with_name(name);
    fsc.object_id = ids.next();
    fsc.dir_type = codes::DIR_TYPE_REGULAR;
    fsc.meta_type = codes::META_TYPE_REGULAR;
    fsc.dir_flags = codes::DIR_FLAG_ALLOCATED;
    fsc.meta_flags = codes::META_FLAGS_ALLOCATED_USED;
    fsc.size = metadata.len();
    metadata_into(&mut fsc, metadata, parent_ino);

    fsc.reader = match File::open(path) {
        Ok(file) => shared_reader(FileContent { file }),
        Err(err) => {
            warn!(path = %path.display(), %err, "file not readable");
            shared_reader(UnreadableContent {
                message: format!("cannot open {}: {}", path.display(), err),
            })
        }
    };

    ContentNode::File(fsc)
}

fn directory_node(
    path: &Path,
    metadata: &Metadata,
    parent_ino: u64,
    ids: &mut IdCounter,
) -> io::Result<ContentNode> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let mut fsc = FsContent::with_name(name);
    fsc.object_id = ids.next();
    fsc.dir_type = codes::DIR_TYPE_DIRECTORY;
    fsc.meta_type = codes::META_TYPE_DIRECTORY;
    fsc.dir_flags = codes::DIR_FLAG_ALLOCATED;
    fsc.meta_flags = codes::META_FLAGS_ALLOCATED_USED;
    metadata_into(&mut fsc, metadata, parent_ino);

    // Children in stable name order so dumps of the same tree compare
    // bit-for-bit across runs.
    let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let child_path = entry.path();
        let child_metadata = match fs::symlink_metadata(&child_path) {
            Ok(m) => m,
            Err(err) => {
                warn!(path = %child_path.display(), %err, "skipping entry without metadata");
                continue;
            }
        };

        if child_metadata.is_dir() {
            match directory_node(&child_path, &child_metadata, metadata.ino(), ids) {
                Ok(child) => fsc.children.push(child),
                Err(err) => {
                    warn!(path = %child_path.display(), %err, "skipping unreadable directory")
                }
            }
        } else if child_metadata.is_file() {
            fsc.children
                .push(file_node(&child_path, &child_metadata, metadata.ino(), ids));
        } else {
            // Symlinks, devices, sockets: not part of this mapping.
            debug!(path = %child_path.display(), "skipping special entry");
        }
    }

    Ok(ContentNode::Directory(fsc))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contentdump=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let metadata = fs::metadata(&args.path)?;
    if !metadata.is_dir() {
        return Err(format!("{} is not a directory", args.path.display()).into());
    }

    let mut ids = IdCounter(0);
    let root = directory_node(&args.path, &metadata, metadata.ino(), &mut ids)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dump(&root, &mut handle)?;
    handle.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentdump::dump_to_string;

    #[test]
    fn test_walk_maps_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let mut f = File::create(dir.path().join("a.txt")).unwrap();
        f.write_all(b"alpha").unwrap();
        File::create(sub.join("b.txt")).unwrap();

        let metadata = fs::metadata(dir.path()).unwrap();
        let mut ids = IdCounter(0);
        let root = directory_node(dir.path(), &metadata, metadata.ino(), &mut ids).unwrap();

        let children = root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].variant_name(), "File");
        assert_eq!(children[1].variant_name(), "Directory");
        assert_eq!(children[1].children().len(), 1);

        // Every node got a distinct object id.
        assert_eq!(root.object_id(), 1);
        assert_ne!(children[0].object_id(), children[1].object_id());
    }

    #[test]
    fn test_walked_tree_dumps_with_content_digests() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("hello.txt")).unwrap();
        f.write_all(b"hello world").unwrap();

        let metadata = fs::metadata(dir.path()).unwrap();
        let mut ids = IdCounter(0);
        let root = directory_node(dir.path(), &metadata, metadata.ino(), &mut ids).unwrap();

        let output = dump_to_string(&root).unwrap();
        // md5("hello world")
        assert!(output.contains("read: md5=5eb63bbbe01eeed093cb22bb8f5acdc3"));
        assert!(output.contains("name: hello.txt"));
    }

    #[test]
    fn test_unreadable_content_records_error() {
        let node = ContentNode::File(FsContent {
            object_id: 1,
            size: 10,
            reader: shared_reader(UnreadableContent {
                message: "cannot open /gone: permission denied".to_string(),
            }),
            ..Default::default()
        });

        let output = dump_to_string(&node).unwrap();
        assert!(output.contains("read: \nanalysis engine error: cannot open /gone"));
    }
}
