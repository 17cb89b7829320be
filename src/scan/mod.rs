//! Directory summarization: bounded-depth tree walk with key-file capture.
//!
//! Walks an abstract [`TreeNode`] tree depth-first in pre-order, emitting one
//! indented line per entry and capturing the content of caller-selected key
//! files. Well-known build/dependency directories are listed but never
//! descended into, and file content is only kept below a fixed size cap.

use std::fmt::Write as _;

use crate::ports::workspace::{EntryKind, TreeNode};

/// Maximum byte size for captured key-file content.
pub const MAX_CONTENT_BYTES: usize = 100 * 1024;

/// Default traversal depth bound (root is depth 0).
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Directory names listed but never descended into.
const IGNORED_DIRS: [&str; 6] = ["node_modules", "dist", ".git", "target", "build", "__pycache__"];

/// Extensions of binary documents: listed, matched as key files, never read.
const BINARY_EXTENSIONS: [&str; 2] = [".pdf", ".epub"];

/// Tree line marker for directories.
const DIR_MARKER: &str = "+ ";

/// Tree line marker for files.
const FILE_MARKER: &str = "- ";

/// A key file captured during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    /// Root-relative path of the file.
    pub path: String,
    /// Full text content.
    pub content: String,
}

/// The structured report produced by [`summarize`].
///
/// Built incrementally during traversal, immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    /// Name of the scanned root directory.
    pub root_name: String,
    /// One indented line per visited entry, in pre-order.
    pub tree: Vec<String>,
    /// Key files whose content was captured, in visit order.
    pub key_files: Vec<KeyFile>,
}

impl DirectorySummary {
    /// Renders the summary as the text handed to prompt composition.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Project structure for '{}':", self.root_name);
        out.push_str(&self.tree.join("\n"));
        out.push('\n');

        if !self.key_files.is_empty() {
            out.push_str("\nKey files:\n");
            for key_file in &self.key_files {
                let _ = writeln!(out, "--- {} ---", key_file.path);
                out.push_str(&key_file.content);
                if !key_file.content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("--- end ---\n");
            }
        }
        out
    }

    /// Returns `true` if the scan found nothing beyond the root entry.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.tree.len() <= 1 && self.key_files.is_empty()
    }
}

/// Accumulator threaded through the recursive walk.
struct Accumulator {
    tree: Vec<String>,
    key_files: Vec<KeyFile>,
}

/// Summarizes the tree rooted at `root`.
///
/// `is_key_file` selects files (by name) whose content should be captured.
/// Entries deeper than `max_depth` are never listed; ignored directories are
/// listed but not entered. Individual file errors are logged and absorbed,
/// so this never fails.
pub fn summarize<F>(root: &dyn TreeNode, is_key_file: F, max_depth: usize) -> DirectorySummary
where
    F: Fn(&str) -> bool,
{
    let mut acc = Accumulator { tree: Vec::new(), key_files: Vec::new() };
    visit(root, "", 0, max_depth, &is_key_file, &mut acc);
    DirectorySummary { root_name: root.name(), tree: acc.tree, key_files: acc.key_files }
}

/// Visits one node: emits its tree line, then recurses or captures content.
fn visit(
    node: &dyn TreeNode,
    parent_path: &str,
    depth: usize,
    max_depth: usize,
    is_key_file: &dyn Fn(&str) -> bool,
    acc: &mut Accumulator,
) {
    let name = node.name();
    let path = if parent_path.is_empty() { name.clone() } else { format!("{parent_path}/{name}") };

    let marker = match node.kind() {
        EntryKind::Directory => DIR_MARKER,
        EntryKind::File => FILE_MARKER,
    };
    acc.tree.push(format!("{}{marker}{name}", "  ".repeat(depth)));

    match node.kind() {
        EntryKind::Directory => {
            // Children of a node at max_depth would exceed the bound.
            if depth >= max_depth || is_ignored_dir(&name) {
                return;
            }
            match node.children() {
                Ok(children) => {
                    for child in children {
                        visit(child.as_ref(), &path, depth + 1, max_depth, is_key_file, acc);
                    }
                }
                Err(e) => log::warn!("could not list {path}: {e}"),
            }
        }
        EntryKind::File => {
            if is_key_file(&name) && !is_binary_document(&name) {
                capture_content(node, &path, acc);
            }
        }
    }
}

/// Reads a key file and stores its content if it fits under the size cap.
fn capture_content(node: &dyn TreeNode, path: &str, acc: &mut Accumulator) {
    match node.read() {
        Ok(bytes) => {
            // Oversize files stay listed in the tree but are not captured.
            if bytes.len() < MAX_CONTENT_BYTES {
                let content = String::from_utf8_lossy(&bytes).into_owned();
                acc.key_files.push(KeyFile { path: path.to_string(), content });
            }
        }
        Err(e) => log::warn!("could not read {path}: {e}"),
    }
}

/// Returns `true` for directory names in the fixed ignore set.
fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Returns `true` for binary document names (presence only, never read).
fn is_binary_document(name: &str) -> bool {
    let lower = name.to_lowercase();
    BINARY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
