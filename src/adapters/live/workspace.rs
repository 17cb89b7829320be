//! Live workspace adapter over `std::fs`.

use std::path::PathBuf;

use crate::ports::workspace::{EntryKind, TreeNode, Workspace};

/// Workspace rooted at a path supplied on the command line.
pub struct DiskWorkspace {
    root: PathBuf,
}

impl DiskWorkspace {
    /// Creates a workspace for the given folder path.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Workspace for DiskWorkspace {
    fn pick_root(
        &self,
    ) -> Result<Option<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.root.exists() {
            return Err(format!("{} does not exist", self.root.display()).into());
        }
        if !self.root.is_dir() {
            return Err(format!("{} is not a folder", self.root.display()).into());
        }
        Ok(Some(Box::new(DiskNode { path: self.root.clone(), kind: EntryKind::Directory })))
    }
}

/// One on-disk entry in the tree walk.
struct DiskNode {
    path: PathBuf,
    kind: EntryKind,
}

impl TreeNode for DiskNode {
    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    fn children(&self) -> Result<Vec<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries: Vec<DiskNode> = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let kind =
                if entry.file_type()?.is_dir() { EntryKind::Directory } else { EntryKind::File };
            entries.push(DiskNode { path: entry.path(), kind });
        }
        // read_dir order is platform-defined; sort for deterministic output.
        entries.sort_by_key(|entry| entry.name());
        Ok(entries.into_iter().map(|n| Box::new(n) as Box<dyn TreeNode>).collect())
    }

    fn read(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_an_error() {
        let workspace = DiskWorkspace::new(PathBuf::from("/definitely/not/here"));
        assert!(workspace.pick_root().is_err());
    }

    #[test]
    fn file_path_is_rejected_as_not_a_folder() {
        let dir = std::env::temp_dir().join("otto_disk_ws_file");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        // The Ok side holds a trait object, so take the error explicitly.
        let err = DiskWorkspace::new(file).pick_root().err().unwrap();
        assert!(err.to_string().contains("not a folder"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn walks_a_real_directory_sorted_by_name() {
        let dir = std::env::temp_dir().join("otto_disk_ws_walk");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("b.txt"), "bee").unwrap();
        std::fs::write(dir.join("a.txt"), "ay").unwrap();

        let root = DiskWorkspace::new(dir.clone()).pick_root().unwrap().unwrap();
        assert_eq!(root.kind(), EntryKind::Directory);

        let children = root.children().unwrap();
        let names: Vec<String> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
        assert_eq!(children[0].read().unwrap(), b"ay");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
