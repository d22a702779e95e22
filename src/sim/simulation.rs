//! Tick orchestrator
//!
//! Owns the game state, the shared maze and the tilt source for one session.

use std::sync::Arc;

use super::maze::Maze;
use super::state::{BallState, GameState, TiltSample};
use super::tick::{PhysicsParams, TickReport, tick};
use crate::error::ConfigError;
use crate::input::{TiltInput, TiltSource};
use crate::renderer::RenderSnapshot;
use crate::settings::Settings;

/// A running session: state + maze + tilt source
#[derive(Debug)]
pub struct Simulation<S = TiltInput> {
    state: GameState,
    start: BallState,
    maze: Arc<Maze>,
    params: PhysicsParams,
    source: S,
}

impl Simulation<TiltInput> {
    /// Build a session with the debug-switchable input selected in `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Self::new(settings, TiltInput::new(settings.input))
    }
}

impl<S: TiltSource> Simulation<S> {
    /// Validate `settings` and build a session driven by `source`
    pub fn new(settings: &Settings, source: S) -> Result<Self, ConfigError> {
        settings.validate()?;
        let maze = Arc::new(settings.build_maze()?);
        let start = settings.start_ball()?;

        log::info!(
            "Simulation starting: {} walls, {}x{} area, ball r={} at ({}, {}), input={}",
            maze.len(),
            settings.play_area.width,
            settings.play_area.height,
            start.radius,
            start.position.x,
            start.position.y,
            source.name()
        );

        Ok(Self {
            state: GameState::new(start),
            start,
            maze,
            params: settings.physics(),
            source,
        })
    }

    /// Poll the source and run a tick if it produced a sample
    pub fn advance(&mut self) -> Option<TickReport> {
        let sample = self.source.poll()?;
        Some(self.step(sample))
    }

    /// Run one tick with an explicit sample
    pub fn step(&mut self, sample: TiltSample) -> TickReport {
        tick(&mut self.state, &self.maze, &self.params, sample)
    }

    /// Put the ball back at its start position, at rest
    pub fn reset(&mut self) {
        log::info!("Simulation reset after {} ticks", self.state.time_ticks);
        self.state = GameState::new(self.start);
    }

    /// Immutable copy for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.maze)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ball(&self) -> &BallState {
        &self.state.ball
    }

    pub fn maze(&self) -> &Arc<Maze> {
        &self.maze
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
