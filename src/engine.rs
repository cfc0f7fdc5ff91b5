//! Countdown engine driving a [`ClockState`] from a repeating tick.
//!
//! The engine owns the only tick handle. Every path that registers a new
//! tick goes through [`TickSlot::arm`], which drops the previous handle
//! first, so two decrement loops can never run at the same time.
//!
//! The host timer and the audio cue are reached through the [`Scheduler`]
//! and [`Cue`] traits. In the browser those are a gloo `Interval` and the
//! `<audio>` element; tests plug in recording fakes.

use crate::{AdjustError, ClockState, LengthKind, Phase, RunState};
use log::{debug, info};

/// Registers a repeating one-second tick. Dropping the returned handle
/// cancels it.
pub trait Scheduler {
    type Handle;

    fn every_tick(&self) -> Self::Handle;
}

/// The sound played when a phase runs out.
pub trait Cue {
    /// Rewind to the start and play once. Restarts a cue still playing.
    fn play_from_start(&mut self);

    /// Pause and rewind without playing.
    fn silence(&mut self);
}

/// Holds at most one live tick handle.
#[derive(Debug)]
pub struct TickSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TickSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TickSlot<H> {
    /// Cancel whatever is armed, then register a new tick.
    pub fn arm(&mut self, register: impl FnOnce() -> H) {
        self.cancel();
        self.handle = Some(register());
    }

    /// Drop the armed handle, if any. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

/// What a single tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was paused; nothing changed.
    Ignored,
    Counted { remaining: u32 },
    /// The countdown was already at zero: the cue played and the clock
    /// moved on to `next`.
    Expired { next: Phase },
}

pub struct TimerEngine<S: Scheduler, C: Cue> {
    state: ClockState,
    scheduler: S,
    cue: C,
    tick: TickSlot<S::Handle>,
}

impl<S: Scheduler, C: Cue> TimerEngine<S, C> {
    pub fn new(scheduler: S, cue: C) -> Self {
        Self {
            state: ClockState::default(),
            scheduler,
            cue,
            tick: TickSlot::default(),
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.tick.is_armed()
    }

    pub fn adjust(&mut self, kind: LengthKind, delta: i32) -> Result<u32, AdjustError> {
        self.state.adjust(kind, delta).map_err(|e| {
            debug!("Ignoring adjustment {:+} to {}: {}", delta, kind.label(), e);
            e
        })
    }

    /// Begin counting down. Calling this while already running replaces the
    /// tick instead of adding a second one.
    pub fn start(&mut self) {
        self.state.run_state = RunState::Running;
        self.rearm();
        info!(
            "Clock started: {} with {}s left",
            self.state.phase, self.state.time_left
        );
    }

    pub fn stop(&mut self) {
        if !self.state.is_running() {
            return;
        }
        self.tick.cancel();
        self.state.run_state = RunState::Paused;
        info!("Clock paused at {}s", self.state.time_left);
    }

    /// The Start/Stop control. Returns the resulting run state.
    pub fn toggle(&mut self) -> RunState {
        match self.state.run_state {
            RunState::Paused => self.start(),
            RunState::Running => self.stop(),
        }
        self.state.run_state
    }

    /// Handle one tick from the scheduler.
    ///
    /// At zero the expiry runs in a fixed order: cancel the tick, play the
    /// cue, flip the phase, reload the time left, then register a fresh tick
    /// for the new phase.
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Ignored;
        }

        if self.state.count_down() {
            return TickOutcome::Counted {
                remaining: self.state.time_left,
            };
        }

        self.tick.cancel();
        self.cue.play_from_start();
        self.state.flip_phase();
        self.rearm();

        info!(
            "{} over, starting {} ({}s)",
            self.state.phase.flipped(),
            self.state.phase,
            self.state.time_left
        );
        TickOutcome::Expired {
            next: self.state.phase,
        }
    }

    /// Back to the mount-time defaults from any state, with the cue silenced.
    pub fn reset(&mut self) {
        self.tick.cancel();
        self.cue.silence();
        self.state = ClockState::default();
        info!("Clock reset");
    }

    /// Cancel any outstanding tick when the owner goes away.
    pub fn teardown(&mut self) {
        if self.tick.cancel() {
            debug!("Tick cancelled on teardown");
        }
    }

    fn rearm(&mut self) {
        let scheduler = &self.scheduler;
        self.tick.arm(|| scheduler.every_tick());
    }
}
