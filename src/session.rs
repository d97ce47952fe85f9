//! Session driver
//!
//! Owns a `Wave` and walks it through its life cycle: fixed-timestep ticking,
//! taking a life when the ship dies, respawning on request, and detecting the
//! won/lost end states. The wave itself only reports facts; this is the caller
//! that acts on them.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::level::LevelData;
use crate::sim::{Body, TickInput, Wave, WaveEvent};

/// Longest frame the accumulator accepts, so a stall can't queue up a burst of ticks
const MAX_FRAME_DT: f32 = 0.25;

/// Where the session is in the wave life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ship alive, asteroids remain
    Playing,
    /// A life was just lost; waiting for `continue_play`
    ShipDestroyed,
    /// Every asteroid destroyed
    Won,
    /// Out of lives
    Lost,
}

/// A wave plus the state machine that drives it
#[derive(Debug, Clone)]
pub struct Session {
    wave: Wave,
    phase: SessionPhase,
    accumulator: f32,
    /// Events gathered since the last `drain_events`
    events: Vec<WaveEvent>,
}

impl Session {
    pub fn new(level: LevelData, config: SimConfig) -> Self {
        let wave = Wave::new(level, config);
        let phase = if wave.is_won() {
            SessionPhase::Won
        } else {
            SessionPhase::Playing
        };
        Self {
            wave,
            phase,
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    pub fn wave(&self) -> &Wave {
        &self.wave
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, SessionPhase::Won | SessionPhase::Lost)
    }

    /// Run as many fixed `SIM_DT` ticks as `frame_dt` covers.
    ///
    /// Returns the number of ticks run. Stops early if the phase leaves
    /// `Playing`; leftover time is discarded in that case.
    pub fn advance(&mut self, frame_dt: f32, input: &TickInput) -> u32 {
        if self.phase != SessionPhase::Playing {
            return 0;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.phase != SessionPhase::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// Run exactly one tick, ignoring the accumulator
    pub fn step(&mut self, input: &TickInput) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let events = self.wave.update(SIM_DT, input);
        self.events.extend(events);

        if !self.wave.has_ship() {
            let lives = self.wave.lose_life();
            self.phase = if lives == 0 {
                log::info!("Wave lost after {} ticks", self.wave.time_ticks());
                SessionPhase::Lost
            } else {
                SessionPhase::ShipDestroyed
            };
        } else if self.wave.is_won() {
            log::info!(
                "Wave cleared after {} ticks with {} lives left",
                self.wave.time_ticks(),
                self.wave.lives()
            );
            self.phase = SessionPhase::Won;
        }
    }

    /// Respawn after a lost life. Returns false if there is nothing to continue.
    pub fn continue_play(&mut self) -> bool {
        if self.phase != SessionPhase::ShipDestroyed {
            return false;
        }
        self.wave.respawn();
        self.phase = SessionPhase::Playing;
        true
    }

    pub fn drain_events(&mut self) -> Vec<WaveEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Simple demo pilot: turn toward the nearest asteroid, shoot when lined up,
/// close distance when it is far away.
pub fn autopilot_input(wave: &Wave) -> TickInput {
    let Some(ship) = wave.ship() else {
        return TickInput::default();
    };
    let Some(target) = wave.nearest_asteroid(ship.position()) else {
        return TickInput::default();
    };

    // Lead the target by where it will be in a few frames
    let aim = target.position() + target.velocity() * 8.0 - ship.position();
    let to_target = aim.try_normalize().unwrap_or(ship.facing());
    let facing = ship.facing();

    let cross = facing.perp_dot(to_target);
    let lined_up = facing.dot(to_target) > 10f32.to_radians().cos();
    let far = aim.length() > wave.config().width.min(wave.config().height) / 3.0;

    TickInput {
        turn_left: !lined_up && cross > 0.0,
        turn_right: !lined_up && cross <= 0.0,
        thrust: lined_up && far,
        fire: lined_up,
    }
}
