use log::debug;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;

use config::{
    DEFAULT_BREAK_MIN, DEFAULT_SESSION_MIN, MAX_LENGTH_MIN, MIN_LENGTH_MIN, SECONDS_PER_MINUTE,
};

/// Which part of the cycle the countdown currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Session,
    Break,
}

impl Phase {
    /// The phase that follows this one when the countdown expires.
    pub fn flipped(self) -> Self {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Paused,
    Running,
}

/// Selects which configured length an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthKind {
    Break,
    Session,
}

impl LengthKind {
    /// Prefix used for the DOM ids of this length's controls (`break-length`, ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            LengthKind::Break => "break",
            LengthKind::Session => "session",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthKind::Break => "Break",
            LengthKind::Session => "Session",
        }
    }
}

// Why a settings adjustment was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustError {
    ClockRunning,
    OutOfRange { kind: LengthKind, candidate: i64 },
}

impl fmt::Display for AdjustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustError::ClockRunning => {
                write!(f, "Lengths can only be changed while the clock is paused")
            }
            AdjustError::OutOfRange { kind, candidate } => write!(
                f,
                "{} length {} is outside [{}, {}]",
                kind.label(),
                candidate,
                MIN_LENGTH_MIN,
                MAX_LENGTH_MIN
            ),
        }
    }
}

impl std::error::Error for AdjustError {}

/// Configured break and session lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lengths {
    pub break_min: u32,
    pub session_min: u32,
}

impl Default for Lengths {
    fn default() -> Self {
        Self {
            break_min: DEFAULT_BREAK_MIN,
            session_min: DEFAULT_SESSION_MIN,
        }
    }
}

impl Lengths {
    pub fn get(&self, kind: LengthKind) -> u32 {
        match kind {
            LengthKind::Break => self.break_min,
            LengthKind::Session => self.session_min,
        }
    }

    fn set(&mut self, kind: LengthKind, minutes: u32) {
        match kind {
            LengthKind::Break => self.break_min = minutes,
            LengthKind::Session => self.session_min = minutes,
        }
    }
}

/// Seconds on the clock for `phase` given the configured lengths.
#[inline]
pub fn derive_time_left(phase: Phase, break_len: u32, session_len: u32) -> u32 {
    let minutes = match phase {
        Phase::Session => session_len,
        Phase::Break => break_len,
    };
    minutes * SECONDS_PER_MINUTE
}

/// Apply `delta` to `current`, returning the result only if it stays inside
/// the allowed length range. Never clamps.
pub fn checked_length(current: u32, delta: i32) -> Option<u32> {
    let candidate = i64::from(current) + i64::from(delta);
    if (i64::from(MIN_LENGTH_MIN)..=i64::from(MAX_LENGTH_MIN)).contains(&candidate) {
        u32::try_from(candidate).ok()
    } else {
        None
    }
}

/// Format seconds as `MM:SS`, both parts zero-padded to two digits.
#[wasm_bindgen]
pub fn format_time_left(seconds: u32) -> String {
    let minutes = seconds / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}", minutes, secs)
}

/// The whole clock: lengths, run state, phase and the seconds remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub lengths: Lengths,
    pub run_state: RunState,
    pub phase: Phase,
    pub time_left: u32,
}

impl Default for ClockState {
    fn default() -> Self {
        let lengths = Lengths::default();
        Self {
            lengths,
            run_state: RunState::Paused,
            phase: Phase::Session,
            time_left: derive_time_left(Phase::Session, lengths.break_min, lengths.session_min),
        }
    }
}

impl ClockState {
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Change one configured length by `delta` minutes.
    ///
    /// Rejected without any state change while running, or when the result
    /// would leave the allowed range. On success the time left is recomputed
    /// for the current phase and the new length is returned.
    pub fn adjust(&mut self, kind: LengthKind, delta: i32) -> Result<u32, AdjustError> {
        if self.is_running() {
            return Err(AdjustError::ClockRunning);
        }

        let current = self.lengths.get(kind);
        let next = checked_length(current, delta).ok_or(AdjustError::OutOfRange {
            kind,
            candidate: i64::from(current) + i64::from(delta),
        })?;

        self.lengths.set(kind, next);
        self.recompute_time_left();
        debug!("{} length {} -> {}", kind.label(), current, next);
        Ok(next)
    }

    /// Count down one second. Returns false if there was nothing left.
    pub(crate) fn count_down(&mut self) -> bool {
        if self.time_left == 0 {
            return false;
        }
        self.time_left -= 1;
        true
    }

    /// Switch to the other phase and load its full length.
    pub(crate) fn flip_phase(&mut self) {
        self.phase = self.phase.flipped();
        self.recompute_time_left();
    }

    pub(crate) fn recompute_time_left(&mut self) {
        self.time_left =
            derive_time_left(self.phase, self.lengths.break_min, self.lengths.session_min);
    }

    /// Snapshot of everything the UI displays.
    pub fn view(&self) -> ClockView {
        ClockView {
            break_length: self.lengths.break_min,
            session_length: self.lengths.session_min,
            phase: self.phase,
            time_left: format_time_left(self.time_left),
            running: self.is_running(),
        }
    }
}

/// Read-only values rendered by the clock's display elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub break_length: u32,
    pub session_length: u32,
    pub phase: Phase,
    pub time_left: String,
    pub running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mount_state() {
        let state = ClockState::default();
        assert_eq!(state.lengths.break_min, 5);
        assert_eq!(state.lengths.session_min, 25);
        assert_eq!(state.phase, Phase::Session);
        assert_eq!(state.run_state, RunState::Paused);
        assert_eq!(state.time_left, 1500);
    }

    #[test]
    fn derive_uses_the_phase_length() {
        assert_eq!(derive_time_left(Phase::Session, 5, 25), 1500);
        assert_eq!(derive_time_left(Phase::Break, 5, 25), 300);
        assert_eq!(derive_time_left(Phase::Break, 60, 1), 3600);
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_time_left(1500), "25:00");
        assert_eq!(format_time_left(300), "05:00");
        assert_eq!(format_time_left(59), "00:59");
        assert_eq!(format_time_left(61), "01:01");
        assert_eq!(format_time_left(0), "00:00");
        assert_eq!(format_time_left(3600), "60:00");
    }

    #[test]
    fn adjust_commits_only_inside_range() {
        for kind in [LengthKind::Break, LengthKind::Session] {
            for start in MIN_LENGTH_MIN..=MAX_LENGTH_MIN {
                for delta in [-61, -2, -1, 1, 2, 61] {
                    let mut state = ClockState::default();
                    state.lengths.set(kind, start);
                    let expected = i64::from(start) + i64::from(delta);
                    let in_range = (1..=60).contains(&expected);

                    let result = state.adjust(kind, delta);

                    assert_eq!(result.is_ok(), in_range, "{kind:?} {start}{delta:+}");
                    let now = i64::from(state.lengths.get(kind));
                    assert_eq!(now, if in_range { expected } else { i64::from(start) });
                }
            }
        }
    }

    #[test]
    fn adjust_while_running_is_rejected() {
        let mut state = ClockState::default();
        state.run_state = RunState::Running;
        let before = state.clone();

        for delta in [-1, 1, 10] {
            assert_eq!(
                state.adjust(LengthKind::Session, delta),
                Err(AdjustError::ClockRunning)
            );
            assert_eq!(
                state.adjust(LengthKind::Break, delta),
                Err(AdjustError::ClockRunning)
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn session_climbs_to_sixty_then_stops() {
        let mut state = ClockState::default();
        for expected in 26..=60 {
            assert_eq!(state.adjust(LengthKind::Session, 1), Ok(expected));
        }
        assert_eq!(
            state.adjust(LengthKind::Session, 1),
            Err(AdjustError::OutOfRange {
                kind: LengthKind::Session,
                candidate: 61
            })
        );
        assert_eq!(state.lengths.session_min, 60);
        assert_eq!(state.time_left, 3600);
    }

    #[test]
    fn break_cannot_drop_below_one() {
        let mut state = ClockState::default();
        for _ in 0..4 {
            state.adjust(LengthKind::Break, -1).unwrap();
        }
        assert!(state.adjust(LengthKind::Break, -1).is_err());
        assert_eq!(state.lengths.break_min, 1);
    }

    #[test]
    fn any_commit_recomputes_for_the_current_phase() {
        let mut state = ClockState::default();
        state.time_left = 42;

        // Break length changes still reload the session countdown.
        state.adjust(LengthKind::Break, 1).unwrap();
        assert_eq!(state.time_left, 1500);

        state.phase = Phase::Break;
        state.adjust(LengthKind::Session, -1).unwrap();
        assert_eq!(state.time_left, 6 * 60);
    }

    #[test]
    fn rejected_adjust_keeps_partial_countdown() {
        let mut state = ClockState::default();
        state.time_left = 1234;
        assert!(state.adjust(LengthKind::Break, -5).is_err());
        assert_eq!(state.time_left, 1234);
    }

    #[test]
    fn count_down_stops_at_zero() {
        let mut state = ClockState::default();
        state.time_left = 1;
        assert!(state.count_down());
        assert_eq!(state.time_left, 0);
        assert!(!state.count_down());
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn flip_alternates_and_reloads() {
        let mut state = ClockState::default();
        state.time_left = 0;
        state.flip_phase();
        assert_eq!((state.phase, state.time_left), (Phase::Break, 300));
        state.flip_phase();
        assert_eq!((state.phase, state.time_left), (Phase::Session, 1500));
    }

    #[test]
    fn view_reflects_state() {
        let mut state = ClockState::default();
        state.phase = Phase::Break;
        state.time_left = 65;
        state.run_state = RunState::Running;

        let view = state.view();
        assert_eq!(view.break_length, 5);
        assert_eq!(view.session_length, 25);
        assert_eq!(view.phase.label(), "Break");
        assert_eq!(view.time_left, "01:05");
        assert!(view.running);
    }

    #[test]
    fn adjust_error_messages() {
        assert_eq!(
            AdjustError::OutOfRange {
                kind: LengthKind::Break,
                candidate: 0
            }
            .to_string(),
            "Break length 0 is outside [1, 60]"
        );
        assert!(AdjustError::ClockRunning.to_string().contains("paused"));
    }
}
