//! Tilt sources
//!
//! Anything that can produce tilt samples implements `TiltSource`. The
//! simulation runs one tick per sample it receives, so a source decides the
//! tick cadence:
//! - `LiveSensor` yields only fresh sensor readings (last sample wins)
//! - `ManualOverride` yields its slider values once per slider change
//! - `WanderTilt` yields each new step of a seeded random walk
//! - `TiltInput` switches between live and manual at runtime (debug mode)

use std::sync::{Arc, Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MANUAL_TILT_MAX, MANUAL_TILT_MIN};
use crate::sim::TiltSample;

/// Produces the sample for the next tick
pub trait TiltSource {
    /// Sample to apply now, or `None` if nothing new has arrived
    fn poll(&mut self) -> Option<TiltSample>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

impl<S: TiltSource + ?Sized> TiltSource for Box<S> {
    fn poll(&mut self) -> Option<TiltSample> {
        (**self).poll()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Which source drives the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Physical gyroscope
    Live,
    /// On-screen sliders (emulators have no gyroscope)
    #[default]
    Manual,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Live => "live",
            InputMode::Manual => "manual",
        }
    }
}

/// Single-slot mailbox shared between the sensor callback and the sensor
///
/// Pushing overwrites any sample not yet consumed.
#[derive(Debug, Clone, Default)]
pub struct SensorFeed {
    latest: Arc<Mutex<Option<TiltSample>>>,
}

impl SensorFeed {
    /// Store a sample, replacing an unconsumed one
    pub fn push(&self, sample: TiltSample) {
        let mut slot = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(sample);
    }

    /// Store a raw gyroscope reading `[x, y, z]` (rad/s)
    ///
    /// Forward/back is the negated x rate, left/right is the y rate.
    pub fn push_gyro(&self, rates: [f32; 3]) {
        self.push(TiltSample::new(-rates[0], rates[1]));
    }

    fn take(&self) -> Option<TiltSample> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Gyroscope-backed source
#[derive(Debug, Clone, Default)]
pub struct LiveSensor {
    feed: SensorFeed,
}

impl LiveSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the platform's sensor callback
    pub fn feed(&self) -> SensorFeed {
        self.feed.clone()
    }
}

impl TiltSource for LiveSensor {
    fn poll(&mut self) -> Option<TiltSample> {
        self.feed.take()
    }

    fn name(&self) -> &'static str {
        "live"
    }
}

/// Slider-driven source
///
/// A slider value is applied once; polling again returns `None` until a
/// slider moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualOverride {
    sample: TiltSample,
    fresh: bool,
}

impl ManualOverride {
    pub fn new(forward_back: f32, left_right: f32) -> Self {
        let mut manual = Self::default();
        manual.set(forward_back, left_right);
        // The initial slider position counts as the first sample
        manual.fresh = true;
        manual
    }

    /// Set both sliders (clamped to the slider range)
    pub fn set(&mut self, forward_back: f32, left_right: f32) {
        self.set_forward_back(forward_back);
        self.set_left_right(left_right);
    }

    pub fn set_forward_back(&mut self, value: f32) {
        let value = slider(value);
        if value != self.sample.forward_back {
            self.sample.forward_back = value;
            self.fresh = true;
        }
    }

    pub fn set_left_right(&mut self, value: f32) {
        let value = slider(value);
        if value != self.sample.left_right {
            self.sample.left_right = value;
            self.fresh = true;
        }
    }

    pub fn sample(&self) -> TiltSample {
        self.sample
    }
}

fn slider(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MANUAL_TILT_MIN, MANUAL_TILT_MAX)
    } else {
        0.0
    }
}

impl TiltSource for ManualOverride {
    fn poll(&mut self) -> Option<TiltSample> {
        if !self.fresh {
            return None;
        }
        self.fresh = false;
        Some(self.sample)
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

/// Seeded random walk within the slider range
#[derive(Debug, Clone)]
pub struct WanderTilt {
    rng: Pcg32,
    current: TiltSample,
    step: f32,
}

impl WanderTilt {
    /// Default per-poll change in each axis
    pub const DEFAULT_STEP: f32 = 0.25;

    pub fn new(seed: u64) -> Self {
        Self::with_step(seed, Self::DEFAULT_STEP)
    }

    pub fn with_step(seed: u64, step: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: TiltSample::ZERO,
            step: step.abs(),
        }
    }
}

impl TiltSource for WanderTilt {
    fn poll(&mut self) -> Option<TiltSample> {
        if self.step.is_nan() || self.step <= 0.0 {
            return None;
        }
        let dfb = self.rng.random_range(-self.step..=self.step);
        let dlr = self.rng.random_range(-self.step..=self.step);
        let next = TiltSample::new(
            slider(self.current.forward_back + dfb),
            slider(self.current.left_right + dlr),
        );
        // Pinned at a slider limit with no change: nothing new to apply
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}

/// Live sensor and manual sliders behind a debug-mode switch
#[derive(Debug, Clone, Default)]
pub struct TiltInput {
    mode: InputMode,
    live: LiveSensor,
    manual: ManualOverride,
}

impl TiltInput {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch sources; a stale live reading is dropped when entering live mode
    pub fn set_mode(&mut self, mode: InputMode) {
        if mode == self.mode {
            return;
        }
        if mode == InputMode::Live {
            self.live.feed.take();
        }
        log::info!("Tilt input: {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    pub fn feed(&self) -> SensorFeed {
        self.live.feed()
    }

    pub fn manual(&self) -> &ManualOverride {
        &self.manual
    }

    pub fn manual_mut(&mut self) -> &mut ManualOverride {
        &mut self.manual
    }
}

impl TiltSource for TiltInput {
    fn poll(&mut self) -> Option<TiltSample> {
        match self.mode {
            InputMode::Live => self.live.poll(),
            InputMode::Manual => self.manual.poll(),
        }
    }

    fn name(&self) -> &'static str {
        self.mode.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_sensor_last_sample_wins() {
        let mut sensor = LiveSensor::new();
        let feed = sensor.feed();
        assert_eq!(sensor.poll(), None);

        feed.push(TiltSample::new(1.0, 1.0));
        feed.push(TiltSample::new(2.0, -1.0));
        assert_eq!(sensor.poll(), Some(TiltSample::new(2.0, -1.0)));
        // Consumed: never applied twice
        assert_eq!(sensor.poll(), None);
    }

    #[test]
    fn test_gyro_axis_mapping() {
        let mut sensor = LiveSensor::new();
        sensor.feed().push_gyro([0.5, -1.25, 9.0]);
        assert_eq!(sensor.poll(), Some(TiltSample::new(-0.5, -1.25)));
    }

    #[test]
    fn test_feed_from_another_thread() {
        let mut sensor = LiveSensor::new();
        let feed = sensor.feed();
        std::thread::spawn(move || {
            for i in 0..10 {
                feed.push(TiltSample::new(i as f32, 0.0));
            }
        })
        .join()
        .unwrap();

        assert_eq!(sensor.poll(), Some(TiltSample::new(9.0, 0.0)));
    }

    #[test]
    fn test_manual_override_clamps() {
        let mut manual = ManualOverride::new(5.0, -7.0);
        assert_eq!(manual.poll(), Some(TiltSample::new(3.0, -3.0)));

        manual.set_left_right(f32::NAN);
        assert_eq!(manual.sample().left_right, 0.0);
        assert_eq!(manual.poll(), Some(TiltSample::new(3.0, 0.0)));
    }

    #[test]
    fn test_manual_initial_position_is_a_sample() {
        let mut manual = ManualOverride::new(0.0, 0.0);
        assert_eq!(manual.poll(), Some(TiltSample::ZERO));
        assert_eq!(manual.poll(), None);
    }

    #[test]
    fn test_manual_sample_applied_once_per_change() {
        let mut manual = ManualOverride::new(0.0, 1.0);
        assert_eq!(manual.poll(), Some(TiltSample::new(0.0, 1.0)));
        // Unchanged sliders: no duplicate sample
        assert_eq!(manual.poll(), None);
        assert_eq!(manual.poll(), None);

        // Setting the same value again is not a change
        manual.set(0.0, 1.0);
        assert_eq!(manual.poll(), None);

        // Out-of-range value clamps to the current limit: still no change
        manual.set_left_right(3.0);
        assert_eq!(manual.poll(), Some(TiltSample::new(0.0, 3.0)));
        manual.set_left_right(10.0);
        assert_eq!(manual.poll(), None);

        manual.set_forward_back(-0.5);
        assert_eq!(manual.poll(), Some(TiltSample::new(-0.5, 3.0)));
        assert_eq!(manual.poll(), None);
    }

    #[test]
    fn test_wander_is_deterministic() {
        let mut a = WanderTilt::new(42);
        let mut b = WanderTilt::new(42);
        let mut last = TiltSample::ZERO;
        for _ in 0..100 {
            let sa = a.poll();
            assert_eq!(sa, b.poll());
            if let Some(sa) = sa {
                assert_ne!(sa, last);
                assert!(sa.forward_back.abs() <= MANUAL_TILT_MAX);
                assert!(sa.left_right.abs() <= MANUAL_TILT_MAX);
                last = sa;
            }
        }
    }

    #[test]
    fn test_wander_without_step_yields_nothing() {
        let mut still = WanderTilt::with_step(7, 0.0);
        assert_eq!(still.poll(), None);
        assert_eq!(still.poll(), None);
    }

    #[test]
    fn test_debug_switch() {
        let mut input = TiltInput::new(InputMode::Manual);
        input.manual_mut().set(1.0, 2.0);
        let feed = input.feed();
        feed.push(TiltSample::new(-1.0, -1.0));

        assert_eq!(input.poll(), Some(TiltSample::new(1.0, 2.0)));
        assert_eq!(input.poll(), None);

        // Reading pushed before the switch is stale
        input.set_mode(InputMode::Live);
        assert_eq!(input.poll(), None);
        feed.push(TiltSample::new(0.5, 0.5));
        assert_eq!(input.poll(), Some(TiltSample::new(0.5, 0.5)));
        assert_eq!(input.name(), "live");
    }
}
