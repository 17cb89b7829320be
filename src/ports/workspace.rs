//! Workspace port for picking a folder and walking its file tree.

/// Whether a tree entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file with readable content.
    File,
    /// A directory with listable children.
    Directory,
}

/// A single node in an abstract file tree.
///
/// Abstracting the tree behind a capability trait lets the summarizer run
/// against in-memory fakes in tests and against real disk I/O in the CLI.
pub trait TreeNode: Send + Sync {
    /// Returns whether this node is a file or a directory.
    fn kind(&self) -> EntryKind;

    /// Returns the entry name (not the full path).
    fn name(&self) -> String;

    /// Lists the children of a directory node.
    ///
    /// # Errors
    ///
    /// Returns an error if this node is not a directory or listing fails.
    fn children(&self) -> Result<Vec<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>>;

    /// Reads the full content of a file node.
    ///
    /// # Errors
    ///
    /// Returns an error if this node is not a file or the read fails
    /// (permissions, I/O).
    fn read(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Supplies the root of a folder chosen by the user.
pub trait Workspace: Send + Sync {
    /// Resolves the folder to scan.
    ///
    /// Returns `Ok(None)` when the user dismissed the picker without
    /// choosing a folder; callers treat that as a silent no-op, not a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns an error if folder access is unavailable or the chosen path
    /// is not a directory.
    fn pick_root(
        &self,
    ) -> Result<Option<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>>;
}
