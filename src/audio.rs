//! Sound cues for game events
//!
//! The simulation never plays audio itself. The host hands a `SoundSink` to
//! an `AudioMixer`, which turns game events into cues at the player's volume.
//! Playback failures are logged and dropped so they cannot disturb the match.

use thiserror::Error;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball went into a goal mouth
    Goal,
    /// A player reached the winning score
    Victory,
    /// Pause / resume button press.
    ///
    /// Not tied to a `GameEvent`: the host plays it when
    /// `Match::toggle_pause` (or `pause` / `resume`) reports a change.
    Button,
}

impl SoundEffect {
    /// Asset name the host is expected to have loaded
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Goal => "gol",
            SoundEffect::Victory => "victoria",
            SoundEffect::Button => "boton",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("sound '{asset}' is not loaded")]
    NotLoaded { asset: &'static str },
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Host playback backend
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Sink for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Sink that only logs the cue
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::info!("♪ {} (volume {:.2})", effect.asset_name(), volume);
        Ok(())
    }
}

/// Sound to play for a game event
pub fn cue_for(event: &GameEvent) -> SoundEffect {
    match event {
        GameEvent::GoalScored { .. } => SoundEffect::Goal,
        GameEvent::WinnerDecided { .. } => SoundEffect::Victory,
    }
}

/// Volume control in front of a sink
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioMixer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self::new();
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer.set_muted(settings.muted);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play one effect. Returns whether the sink accepted it.
    pub fn play(&self, sink: &mut dyn SoundSink, effect: SoundEffect) -> bool {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return false;
        }
        match sink.play(effect, vol) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to play {}: {}", effect.asset_name(), e);
                false
            }
        }
    }

    /// Play the cue for every event, in order
    pub fn play_events(&self, sink: &mut dyn SoundSink, events: &[GameEvent]) {
        for event in events {
            self.play(sink, cue_for(event));
        }
    }
}
