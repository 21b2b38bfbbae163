use super::{Library, NodeId, TreeProvider};
use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "ogg", "opus", "m4a", "aac", "wav", "wma", "alac", "aiff",
];

/// Builds the library tree from a music folder on disk.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
}

impl DirectoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

impl TreeProvider for DirectoryScanner {
    fn load(&self) -> Result<Library> {
        if !self.root.is_dir() {
            bail!("music directory {} does not exist", self.root.display());
        }

        let root_name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.to_string_lossy().to_string());

        let mut library = Library::new(&root_name, &self.root);
        let mut dirs: HashMap<PathBuf, NodeId> = HashMap::new();
        dirs.insert(self.root.clone(), library.root());

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }

            // Parents are always visited first, hidden ones never.
            let Some(parent) = entry.path().parent().and_then(|p| dirs.get(p)).copied() else {
                continue;
            };

            if entry.file_type().is_dir() {
                let id = library.add_directory(parent, &name);
                dirs.insert(entry.path().to_path_buf(), id);
            } else if is_audio_file(entry.path()) {
                library.add_song(parent, &name);
            } else {
                debug!("ignoring non-audio file {}", entry.path().display());
            }
        }

        info!(
            "scanned {}: {} directories, {} nodes",
            self.root.display(),
            library.directory_count(),
            library.len()
        );
        Ok(library)
    }
}
