//! Application-level configuration constants.

// Default lengths (minutes), restored on reset
pub const DEFAULT_BREAK_MIN: u32 = 5;
pub const DEFAULT_SESSION_MIN: u32 = 25;

// Min/Max limits for both lengths
pub const MIN_LENGTH_MIN: u32 = 1;
pub const MAX_LENGTH_MIN: u32 = 60;

pub const SECONDS_PER_MINUTE: u32 = 60;

// Timer behavior
pub const TICK_MS: u32 = 1_000;

// Audio cue
pub const BEEP_ELEMENT_ID: &str = "beep";
pub const BEEP_SRC: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/audio/BeepSound.wav";
