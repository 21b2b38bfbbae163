//! Music library tree.
//!
//! The tree is an arena: every node lives in one `Vec` and refers to its
//! relatives by [`NodeId`]. Ownership runs strictly parent → children; the
//! `parent` link is a plain id and never keeps anything alive.

pub mod scan;
pub mod search;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use scan::DirectoryScanner;
pub use search::{FuzzyIndex, SearchIndex, SearchResult};

/// Index of a node inside its [`Library`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub full_path: PathBuf,
    pub is_directory: bool,
    pub is_enqueued: bool,
    /// Scan order.
    pub children: Vec<NodeId>,
    /// The directory entries of `children`, same order.
    pub subdirs: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl TreeNode {
    pub fn is_song(&self) -> bool {
        !self.is_directory
    }
}

/// Something that can (re)build the library tree 📚
pub trait TreeProvider {
    fn load(&self) -> anyhow::Result<Library>;
}

#[derive(Debug, Clone)]
pub struct Library {
    nodes: Vec<TreeNode>,
    by_path: HashMap<PathBuf, NodeId>,
    directories: usize,
}

impl Library {
    pub fn new(root_name: &str, root_path: impl Into<PathBuf>) -> Self {
        let full_path = root_path.into();
        let root = TreeNode {
            id: NodeId(0),
            name: root_name.to_string(),
            full_path: full_path.clone(),
            is_directory: true,
            is_enqueued: false,
            children: Vec::new(),
            subdirs: Vec::new(),
            parent: None,
        };

        let mut by_path = HashMap::new();
        by_path.insert(full_path, NodeId(0));

        Self {
            nodes: vec![root],
            by_path,
            directories: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.directories += 1;
        self.push(parent, name, true)
    }

    pub fn add_song(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.push(parent, name, false)
    }

    fn push(&mut self, parent: NodeId, name: &str, is_directory: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        let full_path = match self.nodes.get(parent.0) {
            Some(p) => p.full_path.join(name),
            None => PathBuf::from(name),
        };

        self.by_path.insert(full_path.clone(), id);
        self.nodes.push(TreeNode {
            id,
            name: name.to_string(),
            full_path,
            is_directory,
            is_enqueued: false,
            children: Vec::new(),
            subdirs: Vec::new(),
            parent: Some(parent),
        });

        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
            if is_directory {
                p.subdirs.push(id);
            }
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_directory)
    }

    /// Directories below the root.
    pub fn directory_count(&self) -> usize {
        self.directories
    }

    /// Songs sitting directly under the root.
    pub fn top_level_song_count(&self) -> usize {
        self.direct_song_count(self.root())
    }

    pub fn direct_song_count(&self, dir: NodeId) -> usize {
        self.get(dir)
            .map(|d| {
                d.children
                    .iter()
                    .filter(|c| self.get(**c).is_some_and(TreeNode::is_song))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    pub fn set_enqueued(&mut self, id: NodeId, enqueued: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.is_enqueued = enqueued;
        }
    }

    /// Every song below `dir`, depth first, in scan order.
    pub fn descendant_songs(&self, dir: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![dir];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if node.is_song() {
                out.push(id);
                continue;
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// All songs in arena (insertion) order.
    pub fn songs(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| n.is_song())
    }

    /// Clears every enqueued flag, e.g. before relinking a playlist.
    pub fn clear_enqueued(&mut self) {
        for node in &mut self.nodes {
            node.is_enqueued = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_paths() {
        let mut lib = Library::new("Music", "/music");
        let root = lib.root();
        let a = lib.add_directory(root, "Artist");
        let album = lib.add_directory(a, "Album");
        let s1 = lib.add_song(album, "01 intro.flac");
        lib.add_song(album, "02 outro.flac");
        lib.add_song(root, "loose.mp3");

        assert_eq!(lib.directory_count(), 2);
        assert_eq!(lib.top_level_song_count(), 1);
        assert_eq!(lib.direct_song_count(album), 2);
        assert_eq!(lib.direct_song_count(a), 0);
        assert_eq!(
            lib.get(s1).map(|n| n.full_path.clone()),
            Some(PathBuf::from("/music/Artist/Album/01 intro.flac"))
        );
        assert_eq!(
            lib.find_by_path(Path::new("/music/Artist/Album/01 intro.flac")),
            Some(s1)
        );
        assert_eq!(lib.get(s1).and_then(|n| n.parent), Some(album));
        assert_eq!(lib.get(root).map(|n| n.subdirs.clone()), Some(vec![a]));
        assert_eq!(lib.get(album).map(|n| n.subdirs.len()), Some(0));
    }

    #[test]
    fn test_descendant_songs_keeps_scan_order() {
        let mut lib = Library::new("Music", "/music");
        let root = lib.root();
        let a = lib.add_directory(root, "A");
        let s1 = lib.add_song(a, "1.mp3");
        let sub = lib.add_directory(a, "Sub");
        let s2 = lib.add_song(sub, "2.mp3");
        let s3 = lib.add_song(a, "3.mp3");

        assert_eq!(lib.descendant_songs(a), vec![s1, s2, s3]);
        assert!(lib.descendant_songs(s1).contains(&s1));
    }
}
