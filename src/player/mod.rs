pub mod clock;
pub mod traits;

pub use clock::ClockPlayer;
pub use traits::{PlaybackSnapshot, PlayerState, PlayerTrait, RepeatMode, TrackInfo};
