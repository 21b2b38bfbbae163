use crate::player::traits::{PlaybackSnapshot, PlayerState, PlayerTrait, RepeatMode, TrackInfo};
use anyhow::Result;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Transport stand-in without audio output: remembers what was asked to play
/// and keeps a wall clock for the elapsed time.
pub struct ClockPlayer {
    track: Option<TrackInfo>,
    started: Option<Instant>,
    banked: Duration,
    repeat: RepeatMode,
    shuffle: bool,
    volume: u32,
}

impl Default for ClockPlayer {
    fn default() -> Self {
        Self {
            track: None,
            started: None,
            banked: Duration::ZERO,
            repeat: RepeatMode::Off,
            shuffle: false,
            volume: 100,
        }
    }
}

impl ClockPlayer {
    fn elapsed(&self) -> Duration {
        self.banked + self.started.map(|s| s.elapsed()).unwrap_or_default()
    }
}

impl PlayerTrait for ClockPlayer {
    fn snapshot(&self) -> PlaybackSnapshot {
        let track = self.track.clone().map(|mut t| {
            t.position_ms = self.elapsed().as_millis() as u64;
            if t.duration_ms > 0 {
                t.position_ms = t.position_ms.min(t.duration_ms);
            }
            t
        });

        PlaybackSnapshot {
            track,
            repeat: self.repeat,
            shuffle: self.shuffle,
            fast_forwarding: false,
            rewinding: false,
        }
    }

    fn play(&mut self, path: &Path, title: &str) -> Result<()> {
        info!("playing {}", path.display());
        let album = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.track = Some(TrackInfo {
            name: title.to_string(),
            artist: String::new(),
            album,
            date: String::new(),
            duration_ms: 0,
            position_ms: 0,
            state: PlayerState::Playing,
            file_path: path.to_path_buf(),
            volume: self.volume,
        });
        self.banked = Duration::ZERO;
        self.started = Some(Instant::now());
        Ok(())
    }

    fn play_pause(&mut self) -> Result<bool> {
        let Some(track) = self.track.as_mut() else {
            return Ok(false);
        };

        match track.state {
            PlayerState::Playing => {
                if let Some(started) = self.started.take() {
                    self.banked += started.elapsed();
                }
                track.state = PlayerState::Paused;
                Ok(false)
            }
            PlayerState::Paused | PlayerState::Stopped => {
                self.started = Some(Instant::now());
                track.state = PlayerState::Playing;
                Ok(true)
            }
        }
    }

    fn toggle_repeat(&mut self) -> Result<RepeatMode> {
        self.repeat = match self.repeat {
            RepeatMode::Off => RepeatMode::Single,
            RepeatMode::Single | RepeatMode::Playlist => RepeatMode::Off,
        };
        Ok(self.repeat)
    }

    fn toggle_shuffle(&mut self) -> Result<bool> {
        self.shuffle = !self.shuffle;
        Ok(self.shuffle)
    }
}
