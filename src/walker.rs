//! Depth-first dump of a content tree.
//!
//! The walker renders one titled block per node: variant title line, the
//! variant's attribute lines, a content digest line, then every child block
//! one tab deeper, in engine order. There is no closing marker; the
//! indentation change alone closes a block.
//!
//! Failure policy: a read failure while digesting one node is recorded
//! inline and traversal continues with that node's children and siblings.
//! A sink failure or a cycle in the tree aborts the whole dump.

use crate::digest::content_digest;
use crate::error::DumpError;
use crate::model::ContentNode;
use crate::render;
use std::io::Write;
use tracing::{debug, trace};

/// Dumps `root` and every descendant to `sink`.
///
/// One deterministic snapshot per call; create a fresh sink per dump. The
/// tree is borrowed for the duration of the call and never mutated.
pub fn dump<W: Write>(root: &ContentNode, sink: W) -> Result<(), DumpError> {
    let mut ctx = DumpContext::new(sink);
    ctx.dump_node(root, 0)
}

/// Dumps `root` into a freshly allocated string.
pub fn dump_to_string(root: &ContentNode) -> Result<String, DumpError> {
    let mut buffer = Vec::new();
    dump(root, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("dump output should be valid UTF-8"))
}

/// Mutable state scoped to one dump invocation.
struct DumpContext<W: Write> {
    sink: SinkAdapter<W>,
    /// Object ids of the nodes currently open above the cursor.
    ancestors: Vec<u64>,
}

impl<W: Write> DumpContext<W> {
    fn new(sink: W) -> Self {
        Self {
            sink: SinkAdapter::new(sink),
            ancestors: Vec::new(),
        }
    }

    /// Renders one node block and recurses into its children.
    ///
    /// Depth is passed by value so every exit path, including error exits,
    /// leaves the indentation of enclosing blocks intact.
    fn dump_node(&mut self, node: &ContentNode, depth: usize) -> Result<(), DumpError> {
        let object_id = node.object_id();
        if self.ancestors.contains(&object_id) {
            return Err(DumpError::CycleDetected {
                variant: node.variant_name(),
                object_id,
                depth,
            });
        }

        trace!(variant = node.variant_name(), object_id, depth, "dumping node");

        self.sink
            .write_line(depth, &format!("{} >", node.variant_name()))?;

        for (name, value) in render::attributes(node) {
            self.sink
                .write_line(depth + 1, &format!("{}: {}", name, value))?;
        }

        match content_digest(node) {
            Ok(digest) => {
                self.sink
                    .write_line(depth + 1, &format!("read: md5={}", digest))?;
            }
            Err(err) => {
                // Recovered locally: record and keep walking.
                debug!(variant = node.variant_name(), object_id, %err, "content read failed");
                self.sink.write_line(depth + 1, "read: ")?;
                self.sink.write_line(0, &err.to_string())?;
            }
        }

        self.ancestors.push(object_id);
        for child in node.children() {
            self.dump_node(child, depth + 1)?;
        }
        self.ancestors.pop();

        Ok(())
    }
}

/// Buffers one formatted line at a time and appends it to the destination.
///
/// Every logical line is tab-indented to its depth and terminated by a
/// single newline. A rejected write is fatal for the whole dump.
struct SinkAdapter<W: Write> {
    inner: W,
    line: String,
}

impl<W: Write> SinkAdapter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            line: String::new(),
        }
    }

    fn write_line(&mut self, depth: usize, text: &str) -> Result<(), DumpError> {
        self.line.clear();
        for _ in 0..depth {
            self.line.push('\t');
        }
        self.line.push_str(text);
        self.line.push('\n');
        self.inner
            .write_all(self.line.as_bytes())
            .map_err(DumpError::Sink)
    }
}
