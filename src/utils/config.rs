//! Configuration and constants for the parser and CLI.

/// Log file read when no path is given
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Environment variable that overrides the default log path
pub const LOG_PATH_ENV: &str = "QUAKE_LOG_PATH";

/// Number of players shown in the ranking by default
pub const DEFAULT_TOP_PLAYERS: usize = 5;

/// Upper bound accepted for `--top`
pub const MAX_TOP_PLAYERS: usize = 1000;

// Literal tokens of the server log format
pub const INIT_GAME_MARKER: &str = "InitGame:";
pub const KILL_MARKER: &str = "Kill:";
pub const WORLD_SENTINEL: &str = "<world>";
pub const WEAPON_PREFIX: &str = "MOD_";

/// Prefix of generated match ids (`match_1`, `match_2`, ...)
pub const MATCH_ID_PREFIX: &str = "match_";
