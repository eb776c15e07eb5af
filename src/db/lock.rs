//! Advisory per-user lock around read-modify-write of a punch file, so a
//! computation never sees an append from another process halfway through.

use crate::db::store::file_stem;
use crate::errors::{AppError, AppResult};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct UserLock {
    file: File,
    path: PathBuf,
}

impl UserLock {
    pub fn lock_path(data_dir: &Path, username: &str) -> PathBuf {
        data_dir.join(format!("{}.lock", file_stem(&username.to_lowercase())))
    }

    /// Take the exclusive lock for `username`, waiting up to `timeout`.
    pub fn acquire(data_dir: &Path, username: &str, timeout: Duration) -> AppResult<Self> {
        fs::create_dir_all(data_dir)?;
        let path = Self::lock_path(data_dir, username);

        let start = Instant::now();
        loop {
            let file = OpenOptions::new()
                .create(true)
                .read(true)
                .write(true)
                .truncate(false)
                .open(&path)?;

            if file.try_lock_exclusive().is_ok() {
                debug!(path = %path.display(), "lock acquired");
                return Ok(Self { file, path });
            }

            if start.elapsed() >= timeout {
                return Err(AppError::Lock(format!(
                    "timed out after {:?} waiting for {}",
                    start.elapsed(),
                    path.display()
                )));
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for UserLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        debug!(path = %self.path.display(), "lock released");
    }
}
