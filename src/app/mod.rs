pub mod cli;
pub mod config;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod logging;
pub mod state;

pub use state::*;

use crate::library::{FuzzyIndex, Library, NodeId, SearchIndex, TreeProvider};
use crate::player::{PlaybackSnapshot, PlayerTrait};
use crate::playlist::{Playlist, PlaylistEntry, PlaylistStore};
use crate::ui::utils::display_name;
use anyhow::Result;
use config::UserConfig;
use keys::KeyConfig;
use tracing::{debug, info, warn};

/// One browsing session: every panel's cursor plus the collaborators they
/// read from. Owned by the event loop, never shared.
pub struct App {
    pub config: UserConfig,
    pub keys: KeyConfig,
    pub is_running: bool,
    pub view: ViewState,

    pub library: Option<Library>,
    pub provider: Box<dyn TreeProvider>,
    pub playlist: Box<dyn PlaylistStore>,
    pub search: Box<dyn SearchIndex>,
    pub player: Box<dyn PlayerTrait>,

    pub browser: LibraryBrowser,
    pub playlist_panel: PlaylistPanel,
    pub search_panel: SearchPanel,
    pub bindings: WindowState,
}

impl App {
    pub fn new(
        config: UserConfig,
        provider: Box<dyn TreeProvider>,
        player: Box<dyn PlayerTrait>,
    ) -> Self {
        Self {
            keys: config.keys.clone(),
            config,
            is_running: true,
            view: ViewState::new(View::NowPlaying),
            library: None,
            provider,
            playlist: Box::new(Playlist::default()),
            search: Box::new(FuzzyIndex::default()),
            player,
            browser: LibraryBrowser::new(),
            playlist_panel: PlaylistPanel::default(),
            search_panel: SearchPanel::default(),
            bindings: WindowState::default(),
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.player.snapshot()
    }

    pub fn has_song(&self) -> bool {
        self.snapshot().has_song()
    }

    /// Rebuilds the tree through the provider. On failure the current tree
    /// stays in place.
    pub fn reload_library(&mut self) -> Result<()> {
        let mut library = self.provider.load()?;
        info!(
            "library loaded: {} directories, {} nodes",
            library.directory_count(),
            library.len()
        );

        self.playlist.relink(&mut library);
        self.browser.reset(Some(&library));
        let query = self.search.query().to_string();
        self.search.set_query(&library, &query);
        self.library = Some(library);
        self.view.mark_dirty();
        Ok(())
    }

    /// Per-panel hooks for a view switch.
    pub fn apply_transition(&mut self, transition: Transition) {
        if transition.left(View::Playlist) {
            self.playlist_panel.first_render = true;
        }
        if transition.entered(View::Library) {
            self.browser.open(self.library.as_ref());
        }
    }

    pub fn toggle_view(&mut self, view: View) {
        let transition = self.view.toggle(view);
        self.apply_transition(transition);
    }

    pub fn show_view(&mut self, view: View) {
        let transition = self.view.show(view);
        self.apply_transition(transition);
    }

    pub fn tab_next(&mut self) {
        let has_song = self.has_song();
        let transition = self.view.tab_next(has_song);
        self.apply_transition(transition);
    }

    /// Adds the song to the playlist, or takes it out if already there.
    pub fn toggle_song(&mut self, id: NodeId) {
        let Some(library) = self.library.as_mut() else {
            return;
        };
        let Some(node) = library.get(id) else {
            return;
        };
        if node.is_directory {
            return;
        }

        let path = node.full_path.clone();
        if self.playlist.dequeue(&path).is_some() {
            library.set_enqueued(id, false);
        } else {
            let title = display_name(&node.name).to_string();
            self.playlist
                .enqueue(PlaylistEntry::new(path, &title, Some(id)));
            library.set_enqueued(id, true);
        }
    }

    /// Enqueues every song under `dir`; if they all already are, dequeues
    /// them instead.
    pub fn toggle_directory(&mut self, dir: NodeId) {
        let Some(library) = self.library.as_mut() else {
            return;
        };
        let songs = library.descendant_songs(dir);
        let all_enqueued = !songs.is_empty()
            && songs
                .iter()
                .all(|s| library.get(*s).is_some_and(|n| n.is_enqueued));

        for song in songs {
            let Some(node) = library.get(song) else {
                continue;
            };
            let path = node.full_path.clone();
            if all_enqueued {
                self.playlist.dequeue(&path);
                library.set_enqueued(song, false);
            } else if !node.is_enqueued {
                let title = display_name(&node.name).to_string();
                self.playlist
                    .enqueue(PlaylistEntry::new(path, &title, Some(song)));
                library.set_enqueued(song, true);
            }
        }
        debug!("toggled directory {:?}, dequeued: {}", dir, all_enqueued);
    }

    /// `a` in the library: song or whole directory.
    pub fn toggle_selected_in_library(&mut self) {
        let Some(library) = self.library.as_ref() else {
            return;
        };
        self.browser.settle(library);
        let Some(node) = self.browser.selected_node(library) else {
            return;
        };
        if library.is_directory(node) {
            self.toggle_directory(node);
        } else {
            self.toggle_song(node);
        }
    }

    /// Enter in the library.
    pub fn activate_library(&mut self) {
        let Some(library) = self.library.as_ref() else {
            return;
        };
        match self.browser.activate(library) {
            Activation::Toggle(song) => self.toggle_song(song),
            Activation::EnteredDirectory(dir) => debug!("entered {:?}", dir),
            Activation::Collapsed(dir) => debug!("collapsed {:?}", dir),
            Activation::Nothing => {}
        }
    }

    pub fn play_selected_playlist_entry(&mut self) {
        let Some(index) = self.playlist_panel.window.selected() else {
            return;
        };
        let Some(entry) = self.playlist.get(index).cloned() else {
            return;
        };
        if let Err(e) = self.player.play(&entry.path, &entry.title) {
            warn!("could not play {}: {}", entry.path.display(), e);
        }
    }

    pub fn remove_selected_playlist_entry(&mut self) {
        let Some(index) = self.playlist_panel.window.selected() else {
            return;
        };
        let Some(entry) = self.playlist.remove(index) else {
            return;
        };
        if let (Some(library), Some(node)) = (self.library.as_mut(), entry.node) {
            library.set_enqueued(node, false);
        }
        self.playlist_panel.window.set_total(self.playlist.len());
    }

    pub fn set_search_query(&mut self, query: &str) {
        match &self.library {
            Some(library) => self.search.set_query(library, query),
            None => self.search.set_query(&Library::new("", ""), query),
        }
    }

    pub fn search_push(&mut self, ch: char) {
        let mut query = self.search.query().to_string();
        query.push(ch);
        self.set_search_query(&query);
    }

    pub fn search_pop(&mut self) {
        let mut query = self.search.query().to_string();
        if query.pop().is_some() {
            self.set_search_query(&query);
        }
    }

    pub fn toggle_selected_search_result(&mut self) {
        let Some(index) = self.search_panel.window.selected() else {
            return;
        };
        if let Some(result) = self.search.results().get(index).copied() {
            self.toggle_song(result.node);
        }
    }
}
