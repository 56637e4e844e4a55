//! Deterministic output file names.
//!
//! The digest is taken over the input file's timestamps, not its content, so
//! two files with identical ctime/mtime pairs map to the same name.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Local};
use sha2::{Digest, Sha256};

use crate::bank::Bank;
use crate::errors::{StatementError, StatementResult};

const DIGEST_LEN: usize = 6;

/// Change and modification times of a file, as offsets from the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimestamps {
    pub changed: Duration,
    pub modified: Duration,
}

fn since_epoch(time: SystemTime) -> Duration {
    time.duration_since(UNIX_EPOCH).unwrap_or_default()
}

#[cfg(unix)]
fn changed_time(metadata: &Metadata) -> Duration {
    use std::os::unix::fs::MetadataExt;

    let secs = u64::try_from(metadata.ctime()).unwrap_or_default();
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or_default();
    Duration::new(secs, nanos)
}

#[cfg(not(unix))]
fn changed_time(metadata: &Metadata) -> Duration {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(since_epoch)
        .unwrap_or_default()
}

/// Seconds rendered the way a float repr prints them: shortest round-trip
/// digits, with `.0` on whole values.
fn decimal_seconds(time: Duration) -> String {
    let secs = time.as_secs() as f64 + f64::from(time.subsec_nanos()) * 1e-9;
    let text = secs.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

impl FileTimestamps {
    pub fn from_metadata(metadata: &Metadata) -> StatementResult<Self> {
        Ok(Self {
            changed: changed_time(metadata),
            modified: since_epoch(metadata.modified()?),
        })
    }

    pub fn read(path: &Path) -> StatementResult<Self> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StatementError::FileNotFound(path.to_path_buf()),
            _ => e.into(),
        })?;
        Self::from_metadata(&metadata)
    }

    /// First 6 hex characters of SHA-256 over `"{ctime}-{mtime}"`.
    pub fn digest(&self) -> String {
        let metadata = format!(
            "{}-{}",
            decimal_seconds(self.changed),
            decimal_seconds(self.modified)
        );
        let hash = hex::encode(Sha256::digest(metadata.as_bytes()));
        hash[..DIGEST_LEN].to_string()
    }

    pub fn modified_local(&self) -> DateTime<Local> {
        DateTime::from(UNIX_EPOCH + self.modified)
    }
}

/// `{bank}-{account_type}-{year}-{month:02}-{digest}.csv`
pub fn output_file_name(bank: Bank, account_type: &str, times: &FileTimestamps) -> String {
    let modified = times.modified_local();
    format!(
        "{}-{}-{}-{:02}-{}.csv",
        bank.display_name(),
        account_type,
        modified.year(),
        modified.month(),
        times.digest()
    )
}

/// Output path for `input`: the generated name inside `output_dir`, or next
/// to the input when no directory is given.
pub fn output_path(
    input: &Path,
    bank: Bank,
    account_type: &str,
    output_dir: Option<&Path>,
) -> StatementResult<PathBuf> {
    let times = FileTimestamps::read(input)?;
    let dir = output_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    Ok(dir.join(output_file_name(bank, account_type, &times)))
}
