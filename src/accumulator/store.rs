//! Running-Total Persistence
//!
//! Owns the two durable artifacts of the accumulator:
//!
//! - **Running total**: a single file holding the canonical decimal string
//!   of the current total, overwritten on every merge and read as zero when
//!   absent. It is replaced via write-to-temp-then-rename so an interrupt
//!   mid-write can never leave a truncated total behind.
//! - **Contribution records**: one freshly named `contribution-<uuid>.txt`
//!   per processed partial result, written once with `create_new` and never
//!   touched again. Together they form a replayable audit log independent
//!   of the running-total file.

use crate::error::ProtocolError;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

const TOTAL_FILE: &str = "running_total.txt";
const TOTAL_TMP_FILE: &str = "running_total.tmp";
const CONTRIBUTION_PREFIX: &str = "contribution-";

/// Filesystem-backed store for the accumulator's state.
pub struct TotalStore {
    data_dir: PathBuf,
    total_path: PathBuf,
}

impl TotalStore {
    /// Opens (creating if needed) the data directory holding the total and
    /// the contribution records.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;

        Ok(Self {
            total_path: data_dir.join(TOTAL_FILE),
            data_dir,
        })
    }

    /// Reads the persisted running total, or zero if none exists yet.
    ///
    /// An unparseable total file is a fatal read error, not something to
    /// silently reset.
    pub fn read_total(&self) -> Result<BigDecimal> {
        if !self.total_path.exists() {
            return Ok(BigDecimal::zero());
        }

        let text = fs::read_to_string(&self.total_path)
            .with_context(|| format!("reading {}", self.total_path.display()))?;

        let total =
            BigDecimal::from_str(text.trim()).map_err(|source| ProtocolError::CorruptTotal {
                path: self.total_path.display().to_string(),
                source,
            })?;

        Ok(total)
    }

    /// Merges one partial result: read the current total, add exactly,
    /// persist the new total, then append the contribution record.
    ///
    /// Returns the new running total.
    pub fn merge(&self, partial: &BigDecimal) -> Result<BigDecimal> {
        let total = self.read_total()? + partial;
        self.persist_total(&total)?;
        self.record_contribution(partial)?;
        Ok(total)
    }

    /// Rebuilds a total from scratch by replaying every contribution record.
    ///
    /// Recovery/audit path: the result equals the running total as long as
    /// the total file and the records have not diverged.
    pub fn rebuild_total(&self) -> Result<BigDecimal> {
        let mut total = BigDecimal::zero();
        for path in self.contribution_paths()? {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let value =
                BigDecimal::from_str(text.trim()).map_err(|source| ProtocolError::CorruptTotal {
                    path: path.display().to_string(),
                    source,
                })?;
            total += value;
        }
        Ok(total)
    }

    /// Paths of all contribution records written so far, in no particular
    /// order.
    pub fn contribution_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.data_dir)
            .with_context(|| format!("listing {}", self.data_dir.display()))?
        {
            let path = entry?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if name.starts_with(CONTRIBUTION_PREFIX) && name.ends_with(".txt") {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    /// Replaces the total file atomically: the full new value is written to
    /// a temporary file first, then renamed over the old total.
    fn persist_total(&self, total: &BigDecimal) -> Result<()> {
        let tmp_path = self.data_dir.join(TOTAL_TMP_FILE);
        fs::write(&tmp_path, total.to_string())
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.total_path)
            .with_context(|| format!("replacing {}", self.total_path.display()))?;
        Ok(())
    }

    /// Writes the raw partial-result value to a freshly, uniquely named
    /// record. `create_new` guarantees an existing record is never reused or
    /// overwritten.
    fn record_contribution(&self, partial: &BigDecimal) -> Result<PathBuf> {
        let path = self
            .data_dir
            .join(format!("{}{}.txt", CONTRIBUTION_PREFIX, Uuid::new_v4()));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        file.write_all(partial.to_string().as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(path)
    }
}
