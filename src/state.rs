use crate::data::error::VolumeError;
use crate::data::model::{Bounds, Observation, TimeSeries};
use crate::render::chart::{animation_bounds, frame_title};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One observation picked with `--time`.
    Still,
    /// Every observation in turn.
    Animation,
}

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    pub series: TimeSeries,
    pub mode: ViewMode,

    /// Index of the displayed observation.
    pub current: usize,

    pub playing: bool,

    /// Seconds between animation frames.
    pub interval: f64,

    /// Keep the axes on the whole-series bounds while animating.
    pub fixed_axes: bool,

    /// Bounds of every observation, computed once.
    pub bounds: Bounds,

    /// Time of the last frame change, in egui input seconds.
    last_step: Option<f64>,
}

impl ViewerState {
    /// Show the observation at `index` only.
    pub fn still(series: TimeSeries, index: usize) -> Result<Self, VolumeError> {
        series.select(index)?;
        let mut state = Self::new(series, ViewMode::Still, 0);
        state.current = index;
        Ok(state)
    }

    /// Loop over every observation, one every `interval_ms`.
    pub fn animation(series: TimeSeries, interval_ms: u64) -> Self {
        let mut state = Self::new(series, ViewMode::Animation, interval_ms);
        state.playing = true;
        state
    }

    fn new(series: TimeSeries, mode: ViewMode, interval_ms: u64) -> Self {
        let bounds = animation_bounds(&series);
        Self {
            series,
            mode,
            current: 0,
            playing: false,
            interval: interval_ms as f64 / 1000.0,
            fixed_axes: true,
            bounds,
            last_step: None,
        }
    }

    pub fn current_observation(&self) -> Option<&Observation> {
        self.series.observations.get(self.current)
    }

    pub fn frame_count(&self) -> usize {
        self.series.len()
    }

    /// Caption of the displayed observation.
    pub fn title(&self) -> String {
        self.current_observation()
            .map(|obs| frame_title(obs.time))
            .unwrap_or_default()
    }

    pub fn fixed_axes_active(&self) -> bool {
        self.mode == ViewMode::Animation && self.fixed_axes
    }

    pub fn step_forward(&mut self) {
        let n = self.frame_count();
        if n > 0 {
            self.current = (self.current + 1) % n;
        }
    }

    pub fn step_back(&mut self) {
        let n = self.frame_count();
        if n > 0 {
            self.current = (self.current + n - 1) % n;
        }
    }

    /// Jump to a frame, clamped to the last one.
    pub fn set_frame(&mut self, index: usize) {
        self.current = index.min(self.frame_count().saturating_sub(1));
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
        self.last_step = None;
    }

    /// Advance one frame once `interval` has elapsed since the last change.
    /// Returns whether the frame changed.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.mode != ViewMode::Animation || !self.playing {
            return false;
        }
        match self.last_step {
            Some(last) if now - last < self.interval => false,
            Some(_) => {
                self.step_forward();
                self.last_step = Some(now);
                true
            }
            None => {
                self.last_step = Some(now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn series(times: &[f64]) -> TimeSeries {
        let observations = times
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                Observation::from_samples(
                    format!("ObservationId{i}"),
                    t,
                    vec![Sample { x: 0.0, value: t }, Sample { x: 1.0, value: -t }],
                )
            })
            .collect();
        TimeSeries::new("psi", observations)
    }

    #[test]
    fn still_shows_requested_observation() {
        let state = ViewerState::still(series(&[0.0, 1.0]), 1).unwrap();
        assert_eq!(state.current_observation().unwrap().time, 1.0);
        assert_eq!(state.title(), "t = 1.00000");
        assert!(!state.fixed_axes_active());
    }

    #[test]
    fn still_out_of_range() {
        assert!(ViewerState::still(series(&[0.0, 1.0]), 2).is_err());
    }

    #[test]
    fn still_never_ticks() {
        let mut state = ViewerState::still(series(&[0.0, 1.0]), 0).unwrap();
        state.playing = true;
        assert!(!state.tick(0.0));
        assert!(!state.tick(100.0));
        assert_eq!(state.current, 0);
    }

    #[test]
    fn animation_advances_every_interval_and_wraps() {
        let mut state = ViewerState::animation(series(&[0.0, 0.5, 1.0]), 200);
        assert!(state.playing);
        assert!(!state.tick(10.0), "first tick only starts the clock");
        assert!(!state.tick(10.1));
        assert!(state.tick(10.25));
        assert_eq!(state.current, 1);
        assert!(!state.tick(10.3));
        assert!(state.tick(10.5));
        assert!(state.tick(10.75));
        assert_eq!(state.current, 0);
    }

    #[test]
    fn paused_animation_stays() {
        let mut state = ViewerState::animation(series(&[0.0, 1.0]), 100);
        state.toggle_playing();
        assert!(!state.tick(0.0));
        assert!(!state.tick(5.0));
        assert_eq!(state.current, 0);
    }

    #[test]
    fn stepping_wraps_and_clamps() {
        let mut state = ViewerState::animation(series(&[0.0, 1.0, 2.0]), 100);
        state.step_back();
        assert_eq!(state.current, 2);
        state.step_forward();
        assert_eq!(state.current, 0);
        state.set_frame(10);
        assert_eq!(state.current, 2);
    }

    #[test]
    fn animation_bounds_cover_all_frames() {
        let state = ViewerState::animation(series(&[0.0, 2.0]), 100);
        assert!(state.bounds.y_min < -2.0 && state.bounds.y_max > 2.0);
        assert!(state.bounds.x_min < 0.0 && state.bounds.x_max > 1.0);
        assert!(state.fixed_axes_active());
    }
}
