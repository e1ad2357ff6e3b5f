//! Common types and formatting shared across content-node variants.
//!
//! This module contains the engine's enumerated codes and the fixed,
//! locale-independent renderings used by the attribute lines:
//! - [`DirType`] / [`MetaType`] - directory-entry and inode type codes
//! - flag bitmask string rendering (dir, meta, volume flags)
//! - symbolic mode strings
//! - UTC calendar formatting for raw epoch timestamps

use chrono::{DateTime, Utc};
use std::fmt;

// ============================================================================
// Type Codes
// ============================================================================

/// Directory-entry type, as reported by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirType {
    /// Named pipe (FIFO)
    Fifo,
    /// Character device
    CharacterDevice,
    /// Directory
    Directory,
    /// Block device
    BlockDevice,
    /// Regular file
    Regular,
    /// Symbolic link
    SymbolicLink,
    /// Socket
    Socket,
    /// Shadow/whiteout entry
    Shadow,
    /// Virtual file
    Virtual,
    /// Unknown type
    Unknown,
}

impl DirType {
    /// Creates a DirType from an engine type code.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => DirType::Fifo,
            2 => DirType::CharacterDevice,
            3 => DirType::Directory,
            4 => DirType::BlockDevice,
            5 => DirType::Regular,
            6 => DirType::SymbolicLink,
            7 => DirType::Socket,
            8 => DirType::Shadow,
            9 => DirType::Virtual,
            _ => DirType::Unknown,
        }
    }

    /// Returns the single-character canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirType::Fifo => "p",
            DirType::CharacterDevice => "c",
            DirType::Directory => "d",
            DirType::BlockDevice => "b",
            DirType::Regular => "r",
            DirType::SymbolicLink => "l",
            DirType::Socket => "s",
            DirType::Shadow => "w",
            DirType::Virtual => "v",
            DirType::Unknown => "-",
        }
    }
}

impl fmt::Display for DirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inode (metadata) type, as reported by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaType {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Symbolic link
    SymbolicLink,
    /// Block device
    BlockDevice,
    /// Character device
    CharacterDevice,
    /// Named pipe (FIFO)
    Fifo,
    /// Socket
    Socket,
    /// Shadow/whiteout entry
    Shadow,
    /// Virtual file
    Virtual,
    /// Unknown type
    Unknown,
}

impl MetaType {
    /// Creates a MetaType from an engine type code.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => MetaType::Regular,
            2 => MetaType::Directory,
            3 => MetaType::SymbolicLink,
            4 => MetaType::BlockDevice,
            5 => MetaType::CharacterDevice,
            6 => MetaType::Fifo,
            7 => MetaType::Socket,
            8 => MetaType::Shadow,
            9 => MetaType::Virtual,
            _ => MetaType::Unknown,
        }
    }

    /// Returns the single-character canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaType::Regular => "r",
            MetaType::Directory => "d",
            MetaType::SymbolicLink => "l",
            MetaType::BlockDevice => "b",
            MetaType::CharacterDevice => "c",
            MetaType::Fifo => "p",
            MetaType::Socket => "s",
            MetaType::Shadow => "h",
            MetaType::Virtual => "v",
            MetaType::Unknown => "-",
        }
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Flag Bitmasks
// ============================================================================

fn flags_string(flags: u32, table: &[(u32, &str)]) -> String {
    let names: Vec<&str> = table
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, name)| *name)
        .collect();
    names.join(", ")
}

/// Renders directory-entry (name) flags as their canonical string.
pub fn dir_flags_string(flags: u32) -> String {
    flags_string(flags, &[(0x01, "Allocated"), (0x02, "Unallocated")])
}

/// Renders inode (metadata) flags as their canonical string.
pub fn meta_flags_string(flags: u32) -> String {
    flags_string(
        flags,
        &[
            (0x01, "Allocated"),
            (0x02, "Unallocated"),
            (0x04, "Used"),
            (0x08, "Unused"),
            (0x10, "Compressed"),
            (0x20, "Orphan"),
        ],
    )
}

/// Renders volume (partition) flags as their canonical string.
pub fn volume_flags_string(flags: u32) -> String {
    flags_string(
        flags,
        &[
            (0x01, "Allocated"),
            (0x02, "Unallocated"),
            (0x04, "Volume System"),
        ],
    )
}

// ============================================================================
// Mode String
// ============================================================================

/// Renders a file mode as the symbolic `drwxr-xr-x` form.
///
/// The leading character comes from the inode type; the nine permission
/// characters honor the setuid, setgid, and sticky bits.
pub fn mode_string(mode: u32, meta_type: MetaType) -> String {
    let mut s = String::with_capacity(10);

    s.push(match meta_type {
        MetaType::Directory => 'd',
        MetaType::SymbolicLink => 'l',
        MetaType::BlockDevice => 'b',
        MetaType::CharacterDevice => 'c',
        MetaType::Fifo => 'p',
        MetaType::Socket => 's',
        _ => '-',
    });

    let triads: [(u32, u32, u32, u32, char, char); 3] = [
        (0o400, 0o200, 0o100, 0o4000, 's', 'S'),
        (0o040, 0o020, 0o010, 0o2000, 's', 'S'),
        (0o004, 0o002, 0o001, 0o1000, 't', 'T'),
    ];

    for (r, w, x, special, special_x, special_no_x) in triads {
        s.push(if mode & r != 0 { 'r' } else { '-' });
        s.push(if mode & w != 0 { 'w' } else { '-' });
        s.push(match (mode & x != 0, mode & special != 0) {
            (true, true) => special_x,
            (false, true) => special_no_x,
            (true, false) => 'x',
            (false, false) => '-',
        });
    }

    s
}

// ============================================================================
// Calendar Formatting
// ============================================================================

/// Formats raw epoch seconds as a fixed UTC calendar string.
///
/// The rendering is locale-independent so dumps compare bit-for-bit across
/// machines: `1970-01-01 00:00:00 UTC`.
pub fn format_epoch(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("invalid timestamp ({})", secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_type_codes() {
        assert_eq!(DirType::from_code(5), DirType::Regular);
        assert_eq!(DirType::from_code(3), DirType::Directory);
        assert_eq!(DirType::from_code(0), DirType::Unknown);
        assert_eq!(DirType::from_code(99), DirType::Unknown);
        assert_eq!(DirType::Regular.as_str(), "r");
        assert_eq!(DirType::Unknown.as_str(), "-");
    }

    #[test]
    fn test_meta_type_codes() {
        assert_eq!(MetaType::from_code(1), MetaType::Regular);
        assert_eq!(MetaType::from_code(2), MetaType::Directory);
        assert_eq!(MetaType::from_code(8), MetaType::Shadow);
        assert_eq!(MetaType::Shadow.as_str(), "h");
        assert_eq!(MetaType::from_code(0).as_str(), "-");
    }

    #[test]
    fn test_dir_flags_string() {
        assert_eq!(dir_flags_string(0), "");
        assert_eq!(dir_flags_string(0x01), "Allocated");
        assert_eq!(dir_flags_string(0x02), "Unallocated");
        assert_eq!(dir_flags_string(0x03), "Allocated, Unallocated");
    }

    #[test]
    fn test_meta_flags_string() {
        assert_eq!(meta_flags_string(0x05), "Allocated, Used");
        assert_eq!(meta_flags_string(0x22), "Unallocated, Orphan");
        assert_eq!(meta_flags_string(0x10), "Compressed");
    }

    #[test]
    fn test_volume_flags_string() {
        assert_eq!(volume_flags_string(0x01), "Allocated");
        assert_eq!(volume_flags_string(0x04), "Volume System");
        assert_eq!(volume_flags_string(0x05), "Allocated, Volume System");
    }

    #[test]
    fn test_mode_string() {
        assert_eq!(mode_string(0o755, MetaType::Regular), "-rwxr-xr-x");
        assert_eq!(mode_string(0o644, MetaType::Regular), "-rw-r--r--");
        assert_eq!(mode_string(0o755, MetaType::Directory), "drwxr-xr-x");
        assert_eq!(mode_string(0, MetaType::Unknown), "----------");
        // setuid with and without owner execute
        assert_eq!(mode_string(0o4755, MetaType::Regular), "-rwsr-xr-x");
        assert_eq!(mode_string(0o4655, MetaType::Regular), "-rwSr-xr-x");
        // sticky directory
        assert_eq!(mode_string(0o1777, MetaType::Directory), "drwxrwxrwt");
    }

    #[test]
    fn test_format_epoch() {
        assert_eq!(format_epoch(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_epoch(1267437600), "2010-03-01 10:00:00 UTC");
    }
}
