use tracing::debug;

/// Which panel owns the screen 🎛️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    NowPlaying,
    Library,
    Playlist,
    Search,
    KeyBindings,
}

/// One panel switch, handed back so the session can run per-panel hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
}

impl Transition {
    pub fn left(&self, view: View) -> bool {
        self.from == view && self.to != view
    }

    pub fn entered(&self, view: View) -> bool {
        self.to == view && self.from != view
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    current: View,
    dirty: bool,
}

impl ViewState {
    pub fn new(initial: View) -> Self {
        Self {
            current: initial,
            dirty: true,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Goes to `view`, or back to now-playing if it is already showing.
    pub fn toggle(&mut self, view: View) -> Transition {
        let to = if self.current == view {
            View::NowPlaying
        } else {
            view
        };
        self.show(to)
    }

    /// Tab order. Library falls through to Search when nothing is playing.
    pub fn tab_next(&mut self, has_song: bool) -> Transition {
        let to = match self.current {
            View::Playlist => View::Library,
            View::Library if has_song => View::NowPlaying,
            View::Library => View::Search,
            View::NowPlaying => View::Search,
            View::Search => View::KeyBindings,
            View::KeyBindings => View::Playlist,
        };
        self.show(to)
    }

    pub fn show(&mut self, view: View) -> Transition {
        let transition = Transition {
            from: self.current,
            to: view,
        };
        if transition.from != transition.to {
            debug!("view {:?} -> {:?}", transition.from, transition.to);
        }
        self.current = view;
        self.dirty = true;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_shows_and_hides() {
        let mut views = ViewState::new(View::NowPlaying);
        views.clear_dirty();

        let t = views.toggle(View::Library);
        assert_eq!(views.current(), View::Library);
        assert!(t.entered(View::Library));
        assert!(views.is_dirty());

        views.clear_dirty();
        let t = views.toggle(View::Library);
        assert_eq!(views.current(), View::NowPlaying);
        assert!(t.left(View::Library));
        assert!(views.is_dirty());

        views.toggle(View::Playlist);
        views.toggle(View::Search);
        assert_eq!(views.current(), View::Search);
    }

    #[test]
    fn test_tab_cycle_depends_on_playing_song() {
        let mut views = ViewState::new(View::Playlist);
        let order: Vec<View> = (0..5).map(|_| views.tab_next(true).to).collect();
        assert_eq!(
            order,
            vec![
                View::Library,
                View::NowPlaying,
                View::Search,
                View::KeyBindings,
                View::Playlist
            ]
        );

        let mut views = ViewState::new(View::Library);
        assert_eq!(views.tab_next(false).to, View::Search);
    }

    #[test]
    fn test_every_transition_marks_dirty() {
        let mut views = ViewState::new(View::Search);
        views.clear_dirty();
        let t = views.show(View::Search);
        assert!(views.is_dirty());
        assert!(!t.left(View::Search));
        assert!(!t.entered(View::Search));
    }
}
