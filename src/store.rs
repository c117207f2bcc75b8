//! Writes slot reports to disk and reads them back.
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::types::SlotReport;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error {0}")]
    IoError(#[from] io::Error),
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("File {filename} could not be opened {source}")]
    FileOpener {
        source: io::Error,
        filename: PathBuf,
    },
}

/// Name of the file a slot is saved to when none is given: slot_<N>.json,
/// relative to the working directory.
pub fn default_filename(slot: u64) -> PathBuf {
    PathBuf::from(format!("slot_{slot}.json"))
}

/// Saves the report as indented JSON and returns the path written.
///
/// An existing file at that path is replaced.
pub fn save_slot_report(report: &SlotReport, output: Option<&Path>) -> Result<PathBuf, StoreError> {
    let filename = match output {
        Some(path) => path.to_path_buf(),
        None => default_filename(report.slot),
    };
    let mut file = File::create(&filename).map_err(|e| StoreError::FileOpener {
        source: e,
        filename: filename.clone(),
    })?;
    file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;
    Ok(filename)
}

/// Reads a previously saved report.
pub fn read_slot_report<P: AsRef<Path>>(path: P) -> Result<SlotReport, StoreError> {
    let filename = path.as_ref().to_path_buf();
    let file = File::open(&filename).map_err(|e| StoreError::FileOpener {
        source: e,
        filename,
    })?;
    let reader = BufReader::new(file);
    let report = serde_json::from_reader(reader)?;
    Ok(report)
}
