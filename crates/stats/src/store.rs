use std::fs;
use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use numguess_domain::StatisticsRecord;
use tracing::{debug, info, warn};

use crate::StatsError;

/// Owns the on-disk statistics record and keeps it in sync after every game.
#[derive(Debug)]
pub struct StatisticsStore {
    path: PathBuf,
    record: StatisticsRecord,
}

impl StatisticsStore {
    /// Load the record at `path`, starting empty when the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StatsError> {
        let path = path.into();
        let record = match fs::read_to_string(&path) {
            Ok(text) => {
                let record: StatisticsRecord =
                    serde_json::from_str(&text).map_err(|source| StatsError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                record.validate().map_err(|source| StatsError::Invalid {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), games_played = record.games_played, "loaded statistics");
                record
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no statistics file yet, starting fresh");
                StatisticsRecord::new()
            }
            Err(source) => return Err(StatsError::Read { path, source }),
        };
        Ok(Self { path, record })
    }

    /// Current totals for display.
    pub fn snapshot(&self) -> StatisticsRecord {
        self.record
    }

    /// Count a finished game and persist the updated record.
    ///
    /// The in-memory record is updated even when the write fails.
    pub fn record_result(&mut self, won: bool, attempts_used: NonZeroU32) -> Result<(), StatsError> {
        self.record.apply(won, attempts_used);
        debug!(
            won,
            attempts_used = attempts_used.get(),
            games_played = self.record.games_played,
            "recorded game result"
        );
        if let Err(err) = self.save() {
            warn!(path = %self.path.display(), error = %err, "statistics not persisted");
            return Err(err);
        }
        Ok(())
    }

    fn save(&self) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(&self.record)?;
        write_replace(&self.path, json.as_bytes()).map_err(|source| StatsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Write into a sibling temp file and rename it over `path`.
fn write_replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("stats.json");
    let tmp_path = path.with_file_name(format!(".{name}.tmp"));
    let result = (|| {
        let mut tmp = fs::File::create(&tmp_path)?;
        tmp.write_all(bytes)?;
        tmp.sync_all()?;
        fs::rename(&tmp_path, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
