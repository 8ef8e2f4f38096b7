//! Disk-activity probe over /proc/diskstats.

use std::fs;
use std::path::PathBuf;

use crate::activity::diskstats_active;
use crate::config::DISKSTATS_FIELD;
use crate::hal::DiskActivity;

/// Reads the kernel diskstats file each poll. A missing or unreadable
/// file reads as inactive.
pub struct DiskStats {
    path: PathBuf,
}

impl DiskStats {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DiskActivity for DiskStats {
    fn is_active(&mut self) -> bool {
        fs::read_to_string(&self.path)
            .map(|contents| diskstats_active(&contents, DISKSTATS_FIELD))
            .unwrap_or(false)
    }
}
