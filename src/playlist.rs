//! Playlist collaborator: ordered, mutable sequence of songs in playback order.

use crate::library::{Library, NodeId};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub path: PathBuf,
    pub title: String,
    /// Tree node of the song, if it is still in the library.
    pub node: Option<NodeId>,
}

impl PlaylistEntry {
    pub fn new(path: impl Into<PathBuf>, title: &str, node: Option<NodeId>) -> Self {
        Self {
            path: path.into(),
            title: title.to_string(),
            node,
        }
    }
}

pub trait PlaylistStore {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&PlaylistEntry>;
    fn entries(&self) -> &[PlaylistEntry];
    fn enqueue(&mut self, entry: PlaylistEntry);
    /// Removes the entry for `path`, returning it if present.
    fn dequeue(&mut self, path: &Path) -> Option<PlaylistEntry>;
    fn remove(&mut self, index: usize) -> Option<PlaylistEntry>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries().iter().position(|e| e.path == path)
    }

    fn contains(&self, path: &Path) -> bool {
        self.position_of(path).is_some()
    }

    /// Re-resolves node ids against a freshly loaded tree and restores the
    /// enqueued flags there.
    fn relink(&mut self, library: &mut Library);
}

#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

impl PlaylistStore for Playlist {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Option<&PlaylistEntry> {
        self.entries.get(index)
    }

    fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    fn enqueue(&mut self, entry: PlaylistEntry) {
        if self.contains(&entry.path) {
            return;
        }
        debug!("enqueue {}", entry.path.display());
        self.entries.push(entry);
    }

    fn dequeue(&mut self, path: &Path) -> Option<PlaylistEntry> {
        let index = self.position_of(path)?;
        debug!("dequeue {}", path.display());
        Some(self.entries.remove(index))
    }

    fn remove(&mut self, index: usize) -> Option<PlaylistEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    fn relink(&mut self, library: &mut Library) {
        library.clear_enqueued();
        for entry in &mut self.entries {
            entry.node = library.find_by_path(&entry.path);
            if let Some(id) = entry.node {
                library.set_enqueued(id, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_is_idempotent_per_path() {
        let mut playlist = Playlist::default();
        playlist.enqueue(PlaylistEntry::new("/m/a.mp3", "a", None));
        playlist.enqueue(PlaylistEntry::new("/m/a.mp3", "a", None));
        playlist.enqueue(PlaylistEntry::new("/m/b.mp3", "b", None));
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.position_of(Path::new("/m/b.mp3")), Some(1));

        assert!(playlist.dequeue(Path::new("/m/a.mp3")).is_some());
        assert!(playlist.dequeue(Path::new("/m/a.mp3")).is_none());
        assert_eq!(playlist.remove(5), None);
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_relink_restores_flags_on_new_tree() {
        let mut lib = Library::new("Music", "/m");
        let root = lib.root();
        let song = lib.add_song(root, "a.mp3");

        let mut playlist = Playlist::default();
        playlist.enqueue(PlaylistEntry::new("/m/a.mp3", "a", None));
        playlist.enqueue(PlaylistEntry::new("/m/gone.mp3", "gone", None));
        playlist.relink(&mut lib);

        assert_eq!(playlist.get(0).and_then(|e| e.node), Some(song));
        assert_eq!(playlist.get(1).and_then(|e| e.node), None);
        assert!(lib.get(song).is_some_and(|n| n.is_enqueued));
    }
}
