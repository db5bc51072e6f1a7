use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use crate::classpath::dependency::{Dependency, JAR_SUFFIX};
use crate::source::error::SourceError;
use crate::source::DependencySource;

/// Scans a stage-library root where every sub-directory is one library.
///
/// Each `*.jar` found anywhere below a library directory becomes one
/// observation. Archive names that do not carry a version are skipped with a
/// warning.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = format!("directory:{}", root.display());
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entries of `dir` sorted by path, with their own (unfollowed) file type
    fn sorted_entries(dir: &Path) -> Result<Vec<(PathBuf, FileType)>, SourceError> {
        let mut entries = Vec::new();
        let read = fs::read_dir(dir).map_err(|e| SourceError::io(e, "read_dir", dir.to_path_buf()))?;
        for entry in read {
            let entry = entry.map_err(|e| SourceError::io(e, "read_dir_entry", dir.to_path_buf()))?;
            let file_type = entry
                .file_type()
                .map_err(|e| SourceError::io(e, "file_type", entry.path()))?;
            entries.push((entry.path(), file_type));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    // Symlinked directories are not descended into, they may point back up the tree.
    fn collect_archives(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SourceError> {
        for (path, file_type) in Self::sorted_entries(dir)? {
            if file_type.is_symlink() && path.is_dir() {
                log::debug!("Not following directory symlink {}", path.display());
            } else if file_type.is_dir() {
                Self::collect_archives(&path, out)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(JAR_SUFFIX))
            {
                out.push(path);
            }
        }
        Ok(())
    }
}

impl DependencySource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> Result<Vec<(String, Dependency)>, SourceError> {
        if !self.root.is_dir() {
            return Err(SourceError::RootNotFound(self.root.clone()));
        }

        let mut observations = Vec::new();
        for (library_dir, _) in Self::sorted_entries(&self.root)? {
            if !library_dir.is_dir() {
                continue;
            }
            let Some(library) = library_dir.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                log::warn!("Skipping stage library with non UTF-8 name: {}", library_dir.display());
                continue;
            };

            let mut archives = Vec::new();
            Self::collect_archives(&library_dir, &mut archives)?;
            log::debug!("Stage library '{}' bundles {} archives", library, archives.len());

            for archive in archives {
                let Some(file_name) = archive.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                match Dependency::from_jar_file_name(file_name) {
                    Ok(dependency) => observations.push((library.clone(), dependency)),
                    Err(e) => log::warn!("Skipping {} in '{}': {}", archive.display(), library, e),
                }
            }
        }
        Ok(observations)
    }
}
