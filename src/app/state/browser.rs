//! Library browser: windowing over the tree without flattening it.
//!
//! Rows are discovered with a depth-first walk that stops as soon as the
//! bottom of the window is reached, so a render costs `start + capacity`
//! rows no matter how large the library is.

use crate::app::state::window::WindowState;
use crate::library::{Library, NodeId, TreeNode};
use tracing::{debug, info};

/// Which rows the cursor can land on 📂
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserMode {
    /// Directories plus the songs sitting directly under the root.
    #[default]
    Directory,
    /// Same rows, with the songs of `chosen_dir` expanded under it.
    Song { chosen_dir: NodeId },
}

impl BrowserMode {
    pub fn chosen_dir(self) -> Option<NodeId> {
        match self {
            BrowserMode::Directory => None,
            BrowserMode::Song { chosen_dir } => Some(chosen_dir),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserRow {
    pub node: NodeId,
    pub depth: usize,
    /// Row ordinal in the current mode.
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserFrame {
    pub rows: Vec<BrowserRow>,
    /// Cursor or mode had to be repaired; the frame should be composed again.
    pub corrected: bool,
}

/// What Enter did on the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    EnteredDirectory(NodeId),
    Collapsed(NodeId),
    /// A song row: the caller flips its enqueued state.
    Toggle(NodeId),
    Nothing,
}

/// Bookkeeping for one bounded walk.
struct Walk<'a> {
    library: &'a Library,
    chosen: Option<NodeId>,
    window_start: usize,
    limit: usize,
    target_row: Option<usize>,
    seek: Option<NodeId>,
    emit: bool,

    visited: usize,
    chosen_songs_before_cursor: usize,
    cursor: Option<NodeId>,
    seek_row: Option<usize>,
    rows: Vec<BrowserRow>,
    #[cfg(test)]
    touched: usize,
}

impl<'a> Walk<'a> {
    fn new(library: &'a Library, mode: BrowserMode, limit: usize) -> Self {
        Self {
            library,
            chosen: mode.chosen_dir(),
            window_start: 0,
            limit,
            target_row: None,
            seek: None,
            emit: false,
            visited: 0,
            chosen_songs_before_cursor: 0,
            cursor: None,
            seek_row: None,
            rows: Vec::new(),
            #[cfg(test)]
            touched: 0,
        }
    }

    fn run(mut self) -> Self {
        let root = self.library.root();
        self.visit(root, 0);
        self
    }

    fn is_browsable(&self, node: &TreeNode, depth: usize) -> bool {
        if node.is_directory || depth == 1 {
            return true;
        }
        self.chosen
            .is_some_and(|chosen| node.parent == Some(chosen) || node.id == chosen)
    }

    /// Returns false once the walk has to stop.
    fn visit(&mut self, id: NodeId, depth: usize) -> bool {
        let library = self.library;
        let Some(node) = library.get(id) else {
            return true;
        };

        if depth > 0 {
            #[cfg(test)]
            {
                self.touched += 1;
            }
            if self.visited >= self.limit {
                return false;
            }
            if !self.is_browsable(node, depth) {
                return true;
            }

            let row = self.visited;
            self.visited += 1;

            if self.target_row == Some(row) {
                self.cursor = Some(id);
            } else if self.cursor.is_none()
                && node.is_song()
                && self.chosen.is_some()
                && node.parent == self.chosen
            {
                self.chosen_songs_before_cursor += 1;
            }

            if self.emit && row >= self.window_start {
                self.rows.push(BrowserRow {
                    node: id,
                    depth,
                    index: row,
                });
            }

            if self.seek == Some(id) {
                self.seek_row = Some(row);
                return false;
            }
        }

        // Songs only show at the top level and under the chosen directory.
        let children = if depth == 0 || self.chosen == Some(id) {
            &node.children
        } else {
            &node.subdirs
        };
        for &child in children {
            if !self.visit(child, depth + 1) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct LibraryBrowser {
    window: WindowState,
    mode: BrowserMode,
    /// Nodes the last render looked at.
    #[cfg(test)]
    last_touched: usize,
}

impl LibraryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BrowserMode {
        self.mode
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    /// Browsable rows in the current mode.
    pub fn total(&self, library: &Library) -> usize {
        let base = library.directory_count() + library.top_level_song_count();
        match self.mode {
            BrowserMode::Directory => base,
            BrowserMode::Song { chosen_dir } => base + library.direct_song_count(chosen_dir),
        }
    }

    /// Starts over on a replaced tree.
    pub fn reset(&mut self, library: Option<&Library>) {
        self.mode = BrowserMode::Directory;
        let total = library.map(|l| self.total(l)).unwrap_or(0);
        self.window.reset(total);
    }

    /// Library panel freshly opened: always browse directories again.
    pub fn open(&mut self, library: Option<&Library>) {
        match library {
            Some(library) => {
                self.leave_song_mode(library);
            }
            None => self.reset(None),
        }
    }

    pub fn move_next(&mut self) {
        self.window.move_next();
    }

    pub fn move_prev(&mut self) {
        self.window.move_prev();
    }

    pub fn page_next(&mut self) {
        self.window.page_next();
    }

    pub fn page_prev(&mut self) {
        self.window.page_prev();
    }

    fn walk_to_cursor(&self, library: &'_ Library) -> Option<(NodeId, usize)> {
        let selected = self.window.selected()?;
        let mut walk = Walk::new(library, self.mode, selected + 1);
        walk.target_row = Some(selected);
        let walk = walk.run();
        walk.cursor.map(|c| (c, walk.chosen_songs_before_cursor))
    }

    fn row_of(library: &Library, mode: BrowserMode, node: NodeId) -> Option<usize> {
        let mut walk = Walk::new(library, mode, usize::MAX);
        walk.seek = Some(node);
        walk.run().seek_row
    }

    pub fn selected_node(&self, library: &Library) -> Option<NodeId> {
        self.walk_to_cursor(library).map(|(node, _)| node)
    }

    fn is_inside(library: &Library, node: NodeId, chosen_dir: NodeId) -> bool {
        node == chosen_dir || library.get(node).is_some_and(|n| n.parent == Some(chosen_dir))
    }

    /// Back to directory mode, keeping the cursor on the same entry. A cursor
    /// sitting on one of the chosen songs moves up to their directory.
    fn rebase_to_directory(
        &mut self,
        library: &Library,
        chosen_dir: NodeId,
        cursor: Option<NodeId>,
        songs_before: usize,
    ) {
        let on_chosen_song = cursor.is_some_and(|c| {
            c != chosen_dir
                && library
                    .get(c)
                    .is_some_and(|n| n.is_song() && n.parent == Some(chosen_dir))
        });
        let row = if on_chosen_song {
            Self::row_of(library, BrowserMode::Directory, chosen_dir)
        } else {
            self.window.selected().map(|s| s.saturating_sub(songs_before))
        };

        self.mode = BrowserMode::Directory;
        self.window.set_total(self.total(library));
        if let Some(row) = row {
            self.window.select(row);
        }
        debug!("browser back to directory mode at {:?}", self.window.selected());
    }

    fn leave_song_mode(&mut self, library: &Library) -> bool {
        let BrowserMode::Song { chosen_dir } = self.mode else {
            self.window.set_total(self.total(library));
            return false;
        };
        let (cursor, songs_before) = match self.walk_to_cursor(library) {
            Some((node, before)) => (Some(node), before),
            None => (None, 0),
        };
        self.rebase_to_directory(library, chosen_dir, cursor, songs_before);
        true
    }

    /// Drops a chosen directory that no longer exists in `library`.
    fn drop_stale_mode(&mut self, library: &Library) -> bool {
        let BrowserMode::Song { chosen_dir } = self.mode else {
            return false;
        };
        if library.is_directory(chosen_dir) && chosen_dir != library.root() {
            return false;
        }
        info!("chosen directory vanished, back to directory mode");
        self.mode = BrowserMode::Directory;
        true
    }

    /// Applies the mode rule to the current cursor without rendering: a
    /// cursor outside the chosen directory leaves song mode.
    pub fn settle(&mut self, library: &Library) -> bool {
        let mut corrected = self.drop_stale_mode(library);
        corrected |= self.window.set_total(self.total(library));

        let BrowserMode::Song { chosen_dir } = self.mode else {
            return corrected;
        };
        if let Some((cursor, songs_before)) = self.walk_to_cursor(library) {
            if !Self::is_inside(library, cursor, chosen_dir) {
                self.rebase_to_directory(library, chosen_dir, Some(cursor), songs_before);
                corrected = true;
            }
        }
        corrected
    }

    /// Recentres the window and walks exactly the rows it shows.
    pub fn render(&mut self, library: Option<&Library>, capacity: usize) -> BrowserFrame {
        let Some(library) = library else {
            self.mode = BrowserMode::Directory;
            self.window.recompute(0, capacity);
            return BrowserFrame::default();
        };

        let mut corrected = self.drop_stale_mode(library);
        corrected |= self.window.recompute(self.total(library), capacity);

        // Walk at least to the cursor; a zero-row window still has to see it.
        let limit = (self.window.start() + capacity)
            .max(self.window.selected().map_or(0, |s| s + 1));
        let mut walk = Walk::new(library, self.mode, limit);
        walk.window_start = self.window.start();
        walk.target_row = self.window.selected();
        walk.emit = true;
        let mut walk = walk.run();
        walk.rows.truncate(capacity);
        #[cfg(test)]
        {
            self.last_touched = walk.touched;
        }

        match (walk.cursor, self.mode) {
            (Some(cursor), BrowserMode::Song { chosen_dir })
                if !Self::is_inside(library, cursor, chosen_dir) =>
            {
                self.rebase_to_directory(
                    library,
                    chosen_dir,
                    Some(cursor),
                    walk.chosen_songs_before_cursor,
                );
                corrected = true;
            }
            (None, _) if self.window.selected().is_some() => {
                // Counts and tree disagree; settle on the last row we saw.
                debug!("browser cursor past the walk, clamping to {}", walk.visited);
                self.window.set_total(walk.visited);
                corrected = true;
            }
            _ => {}
        }

        BrowserFrame {
            rows: walk.rows,
            corrected,
        }
    }

    fn enter(&mut self, library: &Library, dir: NodeId) -> Activation {
        let first_song = library
            .get(dir)
            .and_then(|d| d.children.iter().copied().find(|c| !library.is_directory(*c)));
        let Some(first_song) = first_song else {
            return Activation::Nothing;
        };

        self.mode = BrowserMode::Song { chosen_dir: dir };
        self.window.set_total(self.total(library));
        if let Some(row) = Self::row_of(library, self.mode, first_song) {
            self.window.select(row);
        }
        debug!("browser entered {:?}", dir);
        Activation::EnteredDirectory(dir)
    }

    /// Enter on the selected row.
    pub fn activate(&mut self, library: &Library) -> Activation {
        self.settle(library);
        let Some(node) = self.selected_node(library) else {
            return Activation::Nothing;
        };
        if !library.is_directory(node) {
            return Activation::Toggle(node);
        }

        match self.mode {
            BrowserMode::Song { chosen_dir } if chosen_dir == node => {
                self.leave_song_mode(library);
                Activation::Collapsed(node)
            }
            BrowserMode::Song { .. } => {
                self.leave_song_mode(library);
                self.enter(library, node)
            }
            BrowserMode::Directory => self.enter(library, node),
        }
    }
}
