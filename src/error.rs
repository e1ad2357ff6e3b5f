//! Error types for content-tree dumps.

use thiserror::Error;

/// Errors the content model can report when asked for a byte range.
///
/// Read errors are node-local: the walker records them inline in the dump
/// and continues with the node's children and siblings.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The requested range extends past the end of the node's content.
    #[error("read of {length} bytes at offset {offset} exceeds content size {size}")]
    OutOfRange {
        /// Requested start offset
        offset: u64,
        /// Requested length in bytes
        length: u64,
        /// Actual content size of the node
        size: u64,
    },

    /// IO error from the backing storage
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opaque failure reported by the analysis engine
    #[error("analysis engine error: {0}")]
    Engine(String),
}

/// Fatal errors that abort an entire dump.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The output sink rejected a write. Nothing further is emitted.
    #[error("sink write failed: {0}")]
    Sink(#[source] std::io::Error),

    /// A node's identity reappeared in its own ancestor chain.
    ///
    /// The content tree comes from an external engine and may be corrupted;
    /// without this guard a malformed tree would recurse without bound.
    #[error("cycle detected: {variant} node {object_id} revisited at depth {depth}")]
    CycleDetected {
        /// Variant name of the revisited node
        variant: &'static str,
        /// Engine-assigned identity of the revisited node
        object_id: u64,
        /// Depth at which the node was seen again
        depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = ReadError::OutOfRange {
            offset: 4096,
            length: 8192,
            size: 10000,
        };
        assert_eq!(
            err.to_string(),
            "read of 8192 bytes at offset 4096 exceeds content size 10000"
        );

        let err = ReadError::Engine("sector unreadable".to_string());
        assert_eq!(err.to_string(), "analysis engine error: sector unreadable");
    }

    #[test]
    fn test_dump_error_display() {
        let err = DumpError::CycleDetected {
            variant: "Directory",
            object_id: 42,
            depth: 3,
        };
        assert_eq!(
            err.to_string(),
            "cycle detected: Directory node 42 revisited at depth 3"
        );
    }
}
