use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// File used when neither a flag nor the environment names one.
pub const DEFAULT_STATS_FILE: &str = "game_stats_ngg.json";

pub const STATS_FILE_ENV: &str = "NUMGUESS_STATS_FILE";

/// Pick the statistics file: explicit path, then `NUMGUESS_STATS_FILE`,
/// then [`DEFAULT_STATS_FILE`] in the working directory.
pub fn resolve_stats_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_with(explicit, env::var_os(STATS_FILE_ENV))
}

fn resolve_with(explicit: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    explicit
        .or_else(|| {
            env_value
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_FILE))
}
