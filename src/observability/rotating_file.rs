//! Append-only line writer with numbered backups.
//!
//! When the active file grows past [`RotationPolicy::max_bytes`] it becomes
//! `<name>.1`, older backups shift up one number, and anything beyond
//! [`RotationPolicy::max_backups`] is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size threshold and retention for a [`RotatingFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self { max_bytes: 10 * 1024 * 1024, max_backups: 3 }
    }
}

/// A thread-safe writer that rotates by size.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// The file is opened lazily on the first write.
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self { path, policy, handle: Mutex::new(None) }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening or writing fails, or the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let current_len = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if current_len > self.policy.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
