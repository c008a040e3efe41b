//! Tilt input
//!
//! Accelerometer readings arrive as `(x, y, z)` triples; the simulation only
//! uses the planar part. Sources are infinite and restartable. Live sensor
//! data is written into a single watch slot, so a stalled or paused loop holds
//! at most one reading and only ever consumes the most recent one.

use std::sync::Arc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// One accelerometer reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TiltSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reading with only planar components (z is ignored by the simulation)
    pub fn planar(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// The (x, y) part fed to the physics tick
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// An endless, restartable stream of tilt readings
pub trait TiltSource: Iterator<Item = TiltSample> {
    /// Rewind to the first reading
    fn restart(&mut self);
}

/// The same reading forever (a device resting at a fixed angle)
#[derive(Debug, Clone)]
pub struct ConstantTilt(pub TiltSample);

impl Iterator for ConstantTilt {
    type Item = TiltSample;

    fn next(&mut self) -> Option<TiltSample> {
        Some(self.0)
    }
}

impl TiltSource for ConstantTilt {
    fn restart(&mut self) {}
}

/// Replays a recorded sequence of readings, looping at the end.
///
/// An empty script behaves like a level device.
#[derive(Debug, Clone)]
pub struct ScriptedTilt {
    samples: Vec<TiltSample>,
    cursor: usize,
}

impl ScriptedTilt {
    pub fn new(samples: Vec<TiltSample>) -> Self {
        Self { samples, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Iterator for ScriptedTilt {
    type Item = TiltSample;

    fn next(&mut self) -> Option<TiltSample> {
        if self.samples.is_empty() {
            return Some(TiltSample::default());
        }
        let sample = self.samples[self.cursor];
        self.cursor = (self.cursor + 1) % self.samples.len();
        Some(sample)
    }
}

impl TiltSource for ScriptedTilt {
    fn restart(&mut self) {
        self.cursor = 0;
    }
}

/// Seeded wandering tilt, roughly what two players fighting over a phone
/// produce. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct JitterTilt {
    seed: u64,
    rng: Pcg32,
    current: Vec2,
    max_tilt: f32,
    step: f32,
}

impl JitterTilt {
    /// Default tilt range (m/s², well under one g)
    pub const DEFAULT_MAX_TILT: f32 = 4.0;
    /// Default per-sample wander
    pub const DEFAULT_STEP: f32 = 0.6;

    pub fn new(seed: u64) -> Self {
        Self::with_range(seed, Self::DEFAULT_MAX_TILT, Self::DEFAULT_STEP)
    }

    pub fn with_range(seed: u64, max_tilt: f32, step: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            current: Vec2::ZERO,
            max_tilt: max_tilt.abs(),
            step: step.abs(),
        }
    }
}

impl Iterator for JitterTilt {
    type Item = TiltSample;

    fn next(&mut self) -> Option<TiltSample> {
        if self.step > 0.0 {
            let nudge = Vec2::new(
                self.rng.random_range(-self.step..self.step),
                self.rng.random_range(-self.step..self.step),
            );
            self.current = (self.current + nudge).clamp(
                Vec2::splat(-self.max_tilt),
                Vec2::splat(self.max_tilt),
            );
        }
        // Device held roughly flat: gravity sits on z
        Some(TiltSample::new(self.current.x, self.current.y, 9.81))
    }
}

impl TiltSource for JitterTilt {
    fn restart(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.current = Vec2::ZERO;
    }
}

/// Single overwrite-in-place slot shared by senders and the feed
#[derive(Debug, Clone, Copy, Default)]
struct TiltSlot {
    /// Readings pushed so far; 0 means nothing has arrived yet
    seq: u64,
    sample: TiltSample,
}

/// Create a connected sensor sender / game-loop feed pair
pub fn tilt_channel() -> (TiltSender, TiltFeed) {
    let (tx, rx) = watch::channel(TiltSlot::default());
    (
        TiltSender { tx: Arc::new(tx) },
        TiltFeed {
            rx,
            seen: 0,
            dropped: 0,
        },
    )
}

/// Sensor-callback side of the tilt channel
#[derive(Debug, Clone)]
pub struct TiltSender {
    tx: Arc<watch::Sender<TiltSlot>>,
}

impl TiltSender {
    /// Overwrite the pending reading. Returns false once the game loop has
    /// gone away.
    pub fn push(&self, sample: TiltSample) -> bool {
        if self.tx.is_closed() {
            return false;
        }
        self.tx.send_modify(|slot| {
            slot.seq += 1;
            slot.sample = sample;
        });
        true
    }
}

/// Game-loop side of the tilt channel
#[derive(Debug)]
pub struct TiltFeed {
    rx: watch::Receiver<TiltSlot>,
    seen: u64,
    dropped: u64,
}

impl TiltFeed {
    /// Most recent reading not yet consumed.
    ///
    /// `None` means no new reading arrived and the loop should not tick.
    /// Still yields the last reading after every sender has been dropped.
    pub fn latest(&mut self) -> Option<TiltSample> {
        let slot = *self.rx.borrow_and_update();
        if slot.seq == self.seen {
            return None;
        }
        self.dropped += slot.seq - self.seen - 1;
        self.seen = slot.seq;
        Some(slot.sample)
    }

    /// Readings overwritten before the loop got to them
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ignores_z() {
        let sample = TiltSample::new(1.5, -2.0, 9.81);
        assert_eq!(sample.xy(), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_scripted_loops_and_restarts() {
        let mut source = ScriptedTilt::new(vec![
            TiltSample::planar(1.0, 0.0),
            TiltSample::planar(2.0, 0.0),
        ]);
        let xs: Vec<f32> = source.by_ref().take(5).map(|s| s.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 1.0, 2.0, 1.0]);

        source.restart();
        assert_eq!(source.next().map(|s| s.x), Some(1.0));
    }

    #[test]
    fn test_empty_script_is_level() {
        let mut source = ScriptedTilt::new(Vec::new());
        assert_eq!(source.next(), Some(TiltSample::default()));
    }

    #[test]
    fn test_constant_never_ends() {
        let sample = TiltSample::planar(0.5, -0.5);
        let mut source = ConstantTilt(sample);
        assert!(source.by_ref().take(1000).all(|s| s == sample));
        source.restart();
        assert_eq!(source.next(), Some(sample));
    }

    #[test]
    fn test_jitter_deterministic_and_bounded() {
        let a: Vec<_> = JitterTilt::new(7).take(500).collect();
        let b: Vec<_> = JitterTilt::new(7).take(500).collect();
        assert_eq!(a, b);
        assert!(
            a.iter()
                .all(|s| s.x.abs() <= JitterTilt::DEFAULT_MAX_TILT
                    && s.y.abs() <= JitterTilt::DEFAULT_MAX_TILT)
        );
    }

    #[test]
    fn test_jitter_restart_replays() {
        let mut source = JitterTilt::new(42);
        let first: Vec<_> = source.by_ref().take(20).collect();
        source.restart();
        let again: Vec<_> = source.take(20).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_feed_latest_sample_wins() {
        let (tx, mut feed) = tilt_channel();
        assert_eq!(feed.latest(), None);

        tx.push(TiltSample::planar(1.0, 0.0));
        tx.push(TiltSample::planar(2.0, 0.0));
        tx.push(TiltSample::planar(3.0, 0.0));
        assert_eq!(feed.latest(), Some(TiltSample::planar(3.0, 0.0)));
        assert_eq!(feed.dropped(), 2);

        // Nothing new: no tick
        assert_eq!(feed.latest(), None);
    }

    #[test]
    fn test_feed_overwrites_instead_of_queueing() {
        let (tx, mut feed) = tilt_channel();
        for i in 0..1_000_000 {
            tx.push(TiltSample::planar(i as f32, 0.0));
        }
        assert_eq!(feed.latest().map(|s| s.x), Some(999_999.0));
        assert_eq!(feed.dropped(), 999_999);
        assert_eq!(feed.latest(), None);

        // Counting resumes from the consumed reading
        tx.push(TiltSample::planar(1.0, 0.0));
        tx.push(TiltSample::planar(2.0, 0.0));
        assert_eq!(feed.latest().map(|s| s.x), Some(2.0));
        assert_eq!(feed.dropped(), 1_000_000);
    }

    #[test]
    fn test_cloned_senders_share_one_slot() {
        let (tx, mut feed) = tilt_channel();
        let other = tx.clone();
        tx.push(TiltSample::planar(1.0, 0.0));
        other.push(TiltSample::planar(2.0, 0.0));
        assert_eq!(feed.latest(), Some(TiltSample::planar(2.0, 0.0)));
        assert_eq!(feed.dropped(), 1);
    }

    #[test]
    fn test_feed_from_sensor_thread() {
        let (tx, mut feed) = tilt_channel();
        let handle = std::thread::spawn(move || {
            for i in 0..100 {
                tx.push(TiltSample::planar(i as f32, 0.0));
            }
        });
        handle.join().unwrap();
        assert_eq!(feed.latest().map(|s| s.x), Some(99.0));
    }

    #[test]
    fn test_sender_reports_closed_loop() {
        let (tx, feed) = tilt_channel();
        drop(feed);
        assert!(!tx.push(TiltSample::default()));
    }
}
