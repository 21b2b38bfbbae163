use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    pub artist: String,
    pub album: String,
    /// Free-form release date as tagged ("1973", "1973-03-01", ...).
    pub date: String,
    pub duration_ms: u64,
    pub position_ms: u64,
    pub state: PlayerState,
    pub file_path: PathBuf,
    /// Current Volume (0-100)
    pub volume: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    #[default]
    Off,
    Playlist,
    Single,
}

/// Read-only view of the transport, taken once per render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSnapshot {
    pub track: Option<TrackInfo>,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub fast_forwarding: bool,
    pub rewinding: bool,
}

impl PlaybackSnapshot {
    pub fn current_path(&self) -> Option<&Path> {
        self.track.as_ref().map(|t| t.file_path.as_path())
    }

    pub fn is_current(&self, path: &Path) -> bool {
        self.current_path() == Some(path)
    }

    pub fn is_paused(&self) -> bool {
        self.track
            .as_ref()
            .is_some_and(|t| t.state == PlayerState::Paused)
    }

    pub fn has_song(&self) -> bool {
        self.track.is_some()
    }
}

/// The unified interface for whatever is playing the music 🎵
pub trait PlayerTrait {
    fn snapshot(&self) -> PlaybackSnapshot;
    fn play(&mut self, path: &Path, title: &str) -> Result<()>;
    /// Returns true when playback is running afterwards.
    fn play_pause(&mut self) -> Result<bool>;
    fn toggle_repeat(&mut self) -> Result<RepeatMode>;
    fn toggle_shuffle(&mut self) -> Result<bool>;
}
