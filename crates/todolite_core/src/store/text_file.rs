//! Delimited-text activity store.
//!
//! # Responsibility
//! - Write one serialized activity per line, in stored order.
//! - Read a whole file back into an activity sequence.
//!
//! # Invariants
//! - Saving overwrites the destination file.
//! - Empty lines are skipped on load; any malformed line aborts the load
//!   with its 1-based line number.
//! - Files are opened and closed within each call, on every exit path.

use crate::model::activity::{Activity, ActivityParseError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write;
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the delimited-text store.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be opened, read, or written.
    Io { path: String, source: std::io::Error },
    /// A persisted line failed to parse.
    Parse { line: usize, source: ActivityParseError },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "store I/O failure on `{path}`: {source}"),
            Self::Parse { line, source } => write!(f, "store parse failure at line {line}: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Writes the activities to `path`, one line per record, overwriting.
///
/// # Errors
/// - [`StoreError::Io`] when the file cannot be created or written.
pub fn save_activities(path: impl AsRef<Path>, activities: &[Activity]) -> StoreResult<()> {
    let path = path.as_ref();
    let mut file = fs::File::create(path).map_err(|err| io_error(path, err))?;
    for activity in activities {
        writeln!(file, "{}", activity.serialize_line()).map_err(|err| io_error(path, err))?;
    }
    info!(
        "event=store_save module=store status=ok path={} records={}",
        path.display(),
        activities.len()
    );
    Ok(())
}

/// Reads activities from `path`, one record per non-empty line, in file order.
///
/// # Errors
/// - [`StoreError::Io`] when the file cannot be opened or read.
/// - [`StoreError::Parse`] on the first malformed line; nothing is returned
///   from a partially valid file.
pub fn load_activities(path: impl AsRef<Path>) -> StoreResult<Vec<Activity>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| io_error(path, err))?;

    let mut activities = Vec::new();
    for (line_index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let activity = Activity::parse_line(line).map_err(|source| StoreError::Parse {
            line: line_index + 1,
            source,
        })?;
        activities.push(activity);
    }
    info!(
        "event=store_load module=store status=ok path={} records={}",
        path.display(),
        activities.len()
    );
    Ok(activities)
}
