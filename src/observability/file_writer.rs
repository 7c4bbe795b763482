//! Rotating file writer with size-based rotation and backup retention.
//!
//! The terminal belongs to the TUI, so log lines go to a file instead. The
//! file is rotated when it grows past a size threshold and a fixed number of
//! numbered backups is kept, which bounds disk usage.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > `max_bytes`, rotate:
///    - Shift `<name>.1` .. `<name>.2` up by one, dropping the oldest
///    - Rename the current file to `<name>.1`
///    - Open a new empty file
///
/// Used as a [`MakeWriter`] for the `tracing-subscriber` fmt layer.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Rotation threshold in bytes.
    max_bytes: u64,
    /// Lazily-initialized file handle (opens on first write).
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path` with the default 10 MiB threshold.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_bytes(file_path, MAX_FILE_SIZE_BYTES)
    }

    #[must_use]
    pub const fn with_max_bytes(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
    }

    /// Closes the handle and rotates if the file has outgrown the threshold.
    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let oldest = backup_path(&self.file_path, MAX_BACKUP_FILES);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..MAX_BACKUP_FILES).rev() {
            let from = backup_path(&self.file_path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, index + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path(&self.file_path, 1))?;
        }

        Ok(())
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.lock()?;
        self.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self.lock()?;
        guard.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rotates_past_threshold_and_keeps_three_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jou.log");
        let writer = FileWriter::with_max_bytes(path.clone(), 8);

        for round in 0..6 {
            (&writer).write_all(format!("line {round} padded\n").as_bytes()).unwrap();
        }

        assert!(path.exists());
        for index in 1..=MAX_BACKUP_FILES {
            assert!(backup_path(&path, index).exists(), "backup {index} missing");
        }
        assert!(!backup_path(&path, MAX_BACKUP_FILES + 1).exists());

        let newest = fs::read_to_string(&path).unwrap();
        assert_eq!(newest, "line 5 padded\n");
    }

    #[test]
    fn small_writes_stay_in_one_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jou.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"a\n").unwrap();
        (&writer).write_all(b"b\n").unwrap();
        (&writer).flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        assert!(!backup_path(&path, 1).exists());
    }
}
