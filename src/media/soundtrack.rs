//! Ambient soundtrack channel.
//!
//! The controller holds the bookkeeping (current track, volume, mute, and the
//! "was playing before a video took over" bit). The actual element is reached
//! through [`AudioSink`] so the rules can run without a browser.

use crate::config::normalize_volume;
use crate::error::MediaError;
use crate::media::track_map::{Track, TrackMap};

/// Output the controller drives. The browser implementation wraps the single
/// `<audio>` element of the session.
pub trait AudioSink {
    /// Replaces the source and rewinds to the start.
    fn load(&mut self, asset: &str);
    /// Attempts playback. An `Err` leaves the sink paused.
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn set_volume(&mut self, volume: f64);
    /// Source set but not enough data buffered to play through.
    fn is_buffering(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Stopped,
    Playing,
    SuspendedForMedia,
    Muted,
}

pub struct SoundtrackController {
    sink: Box<dyn AudioSink>,
    tracks: TrackMap,
    current_track: Option<Track>,
    volume: f64,
    muted: bool,
    was_playing_before_suspend: bool,
}

impl SoundtrackController {
    pub fn new(sink: Box<dyn AudioSink>, tracks: TrackMap, volume: f64) -> Self {
        let mut controller = Self {
            sink,
            tracks,
            current_track: None,
            volume: normalize_volume(volume),
            muted: false,
            was_playing_before_suspend: false,
        };
        let volume = controller.volume;
        controller.sink.set_volume(volume);
        controller
    }

    pub fn tracks(&self) -> &TrackMap {
        &self.tracks
    }

    #[cfg(test)]
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn was_playing_before_suspend(&self) -> bool {
        self.was_playing_before_suspend
    }

    /// True while the current track is still buffering. Muted audio never
    /// counts as loading.
    pub fn is_loading(&self) -> bool {
        !self.muted && self.current_track.is_some() && self.sink.is_buffering()
    }

    pub fn state(&self) -> ChannelState {
        if self.muted {
            ChannelState::Muted
        } else if self.was_playing_before_suspend {
            ChannelState::SuspendedForMedia
        } else if self.sink.is_paused() {
            ChannelState::Stopped
        } else {
            ChannelState::Playing
        }
    }

    /// Retargets the channel to the track for `path`.
    ///
    /// The first navigation starts playback. Later ones swap the source and
    /// keep playing only if the channel is neither muted nor suspended, so a
    /// route change never counts as foreign media.
    pub fn navigate(&mut self, path: &str) {
        let track = self.tracks.select_track(path).clone();
        if self.current_track.as_ref() == Some(&track) {
            return;
        }
        log::info!("soundtrack -> {} ({})", track.name, track.asset);

        match self.state() {
            ChannelState::Stopped | ChannelState::Playing => self.load_and_play(track),
            ChannelState::SuspendedForMedia | ChannelState::Muted => {
                self.sink.load(&track.asset);
                self.sink.set_volume(self.volume);
                self.current_track = Some(track);
            }
        }
    }

    /// Loads `track` from the start and tries to play it. A rejected start
    /// (autoplay policy, missing asset) is swallowed.
    pub fn load_and_play(&mut self, track: Track) {
        self.sink.load(&track.asset);
        self.sink.set_volume(self.volume);
        self.current_track = Some(track);
        self.try_play();
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = normalize_volume(volume);
        self.sink.set_volume(self.volume);
    }

    /// Pauses for a video. Returns `true` only when this call paused audio.
    pub fn suspend_for_foreign_media(&mut self) -> bool {
        if self.sink.is_paused() {
            return false;
        }
        self.was_playing_before_suspend = true;
        self.sink.pause();
        true
    }

    /// Resumes if audio was playing before the suspend and nobody muted it.
    /// The suspend bit is cleared either way.
    pub fn resume_if_eligible(&mut self) -> bool {
        let eligible = self.was_playing_before_suspend && !self.muted;
        self.was_playing_before_suspend = false;
        if eligible {
            self.try_play()
        } else {
            false
        }
    }

    /// Flips mute. Returns the new mute state.
    ///
    /// Unmuting while a video holds the channel (`media_playing`, or an
    /// earlier suspend) leaves audio paused with the suspend bit set, so the
    /// coordinator resumes it once the video stops.
    pub fn toggle_mute(&mut self, media_playing: bool) -> bool {
        if self.muted {
            self.muted = false;
            if self.current_track.is_none() {
                return self.muted;
            }
            if media_playing {
                self.was_playing_before_suspend = true;
            } else if !self.was_playing_before_suspend {
                self.try_play();
            }
        } else {
            self.muted = true;
            self.sink.pause();
        }
        self.muted
    }

    fn try_play(&mut self) -> bool {
        match self.sink.play() {
            Ok(()) => true,
            Err(err) => {
                log::debug!("soundtrack playback did not start: {err}");
                false
            }
        }
    }
}
