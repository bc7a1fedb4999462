//! Staged project tree
//!
//! Phases write into a [`ProjectTree`] instead of the disk. The tree is
//! committed once every phase has succeeded, so a failing phase leaves the
//! target directory untouched.

use crate::error::{Result, ScaffoldError};
use crate::fs;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// A file produced by a phase, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: String,
    pub content: String,
    pub executable: bool,
}

/// What a commit wrote to disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// Pending directories and files for one project root
#[derive(Debug)]
pub struct ProjectTree {
    root: PathBuf,
    /// Input files as they were on disk when the tree was loaded
    on_disk: HashMap<String, String>,
    /// Input paths that existed on disk (files or directories)
    present: BTreeSet<String>,
    directories: BTreeSet<String>,
    files: BTreeMap<String, GeneratedFile>,
}

impl ProjectTree {
    /// An empty tree with no disk state
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            on_disk: HashMap::new(),
            present: BTreeSet::new(),
            directories: BTreeSet::new(),
            files: BTreeMap::new(),
        }
    }

    /// Load the given project-relative inputs from disk.
    ///
    /// Missing inputs are fine; phases see them as absent.
    pub async fn load(root: impl Into<PathBuf>, inputs: &[&str]) -> Result<Self> {
        let mut tree = Self::new(root);
        for input in inputs {
            let path = tree.root.join(input);
            if !fs::file_exists(&path).await {
                continue;
            }
            tree.present.insert(input.to_string());
            let is_dir = tokio::fs::metadata(&path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_dir {
                continue;
            }
            let content = fs::read_file(&path).await?;
            tree.on_disk.insert(input.to_string(), content);
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stage a directory (and implicitly its parents)
    pub fn ensure_dir(&mut self, relative: &str) {
        self.directories.insert(normalize(relative));
    }

    /// Stage a file, replacing anything staged earlier at the same path
    pub fn write(&mut self, relative: &str, content: impl Into<String>) {
        self.stage(relative, content.into(), false);
    }

    /// Stage a file that must be executable once written
    pub fn write_executable(&mut self, relative: &str, content: impl Into<String>) {
        self.stage(relative, content.into(), true);
    }

    /// Current content of a file: staged first, then the loaded disk content
    pub fn read(&self, relative: &str) -> Option<&str> {
        let key = normalize(relative);
        self.files
            .get(&key)
            .map(|f| f.content.as_str())
            .or_else(|| self.on_disk.get(&key).map(String::as_str))
    }

    /// Whether a path is staged or was present among the loaded inputs
    pub fn exists(&self, relative: &str) -> bool {
        let key = normalize(relative);
        self.files.contains_key(&key)
            || self.directories.contains(&key)
            || self.present.contains(&key)
    }

    /// Staged files in path order
    pub fn staged_files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.values()
    }

    /// Write every staged directory and file to disk
    pub async fn commit(self) -> Result<CommitSummary> {
        fs::ensure_dir(&self.root).await?;

        let mut summary = CommitSummary::default();
        for dir in &self.directories {
            fs::ensure_dir(&self.root.join(dir)).await?;
            summary.directories.push(dir.clone());
        }

        for file in self.files.values() {
            let path = self.root.join(&file.relative_path);
            fs::write_file(&path, &file.content).await?;
            if file.executable {
                fs::set_executable(&path).await?;
            }
            summary.files.push(file.relative_path.clone());
        }

        Ok(summary)
    }

    fn stage(&mut self, relative: &str, content: String, executable: bool) {
        let key = normalize(relative);
        self.files.insert(
            key.clone(),
            GeneratedFile {
                relative_path: key,
                content,
                executable,
            },
        );
    }
}

/// Read a file that a phase depends on, failing if it is neither staged nor on disk
pub fn require<'a>(tree: &'a ProjectTree, relative: &str) -> Result<&'a str> {
    tree.read(relative)
        .ok_or_else(|| ScaffoldError::NotFound(tree.root().join(relative)))
}

fn normalize(relative: &str) -> String {
    relative.trim_start_matches("./").trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_staged_content_shadows_disk() {
        let mut tree = ProjectTree::new("/tmp/project");
        tree.on_disk
            .insert("prisma/schema.prisma".to_string(), "old".to_string());
        assert_eq!(tree.read("prisma/schema.prisma"), Some("old"));

        tree.write("prisma/schema.prisma", "new");
        assert_eq!(tree.read("./prisma/schema.prisma"), Some("new"));
    }

    #[tokio::test]
    async fn test_nothing_written_before_commit() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("app");
        let mut tree = ProjectTree::new(&root);
        tree.ensure_dir("src/app");
        tree.write("src/app/page.tsx", "page");

        assert!(!root.exists());

        let summary = tree.commit().await.unwrap();
        assert_eq!(summary.files, vec!["src/app/page.tsx".to_string()]);
        assert!(root.join("src/app").is_dir());
        assert_eq!(
            std::fs::read_to_string(root.join("src/app/page.tsx")).unwrap(),
            "page"
        );
    }

    #[tokio::test]
    async fn test_load_reads_existing_inputs_only() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir_all(tmp.path().join("src/app")).unwrap();

        let tree = ProjectTree::load(tmp.path(), &["package.json", ".env", "src/app"])
            .await
            .unwrap();

        assert_eq!(tree.read("package.json"), Some("{}"));
        assert_eq!(tree.read(".env"), None);
        assert!(tree.exists("src/app"));
        assert!(!tree.exists(".env"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_executable_files_get_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let mut tree = ProjectTree::new(tmp.path());
        tree.write_executable(".husky/pre-commit", "#!/usr/bin/env sh\n");
        tree.commit().await.unwrap();

        let mode = std::fs::metadata(tmp.path().join(".husky/pre-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
