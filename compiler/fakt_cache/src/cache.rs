//! On-disk signature cache (spec §4.7): `<output-root>/.fakt-cache/signatures.v<N>.txt`.
//!
//! Reads are lazy and memoized once per process. Writes are appended
//! under an exclusive advisory lock (`fd-lock`); if the lock cannot be
//! acquired within a bounded retry window, the signature is recorded
//! in-process only — correct for the rest of this run, not persisted.
//! The cache is advisory: a miss is always safe, and corrupt or
//! foreign-version lines are skipped rather than treated as failures.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;

use crate::signature::SIGNATURE_VERSION;

const LOCK_RETRY_ATTEMPTS: u32 = 20;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);

/// The on-disk, advisory-locked signature cache for one compilation's
/// output root.
pub struct SignatureCache {
    path: PathBuf,
    loaded: OnceLock<HashSet<String>>,
    fallback: Mutex<HashSet<String>>,
}

impl SignatureCache {
    /// A cache rooted at `output_dir/.fakt-cache/signatures.v<N>.txt`.
    /// Nothing is read or created until the first `contains`/`record`
    /// call.
    pub fn new(output_dir: &Path) -> Self {
        let path = output_dir
            .join(".fakt-cache")
            .join(format!("signatures.v{SIGNATURE_VERSION}.txt"));
        Self {
            path,
            loaded: OnceLock::new(),
            fallback: Mutex::new(HashSet::new()),
        }
    }

    fn load(&self) -> &HashSet<String> {
        self.loaded.get_or_init(|| read_known_signatures(&self.path))
    }

    /// Whether `signature` has already been recorded, either on disk or
    /// in this process's fallback set.
    pub fn contains(&self, signature: &str) -> bool {
        if self.load().contains(signature) {
            return true;
        }
        self.fallback.lock().unwrap_or_else(|p| p.into_inner()).contains(signature)
    }

    /// Records `signature` as generated. Appends to the on-disk cache
    /// under an exclusive lock; degrades to in-process-only recording
    /// if the lock cannot be acquired within the retry window.
    pub fn record(&self, signature: &str) {
        match self.try_append_locked(signature) {
            Ok(()) => {}
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to acquire cache lock, recording signature in-process only"
                );
                self.fallback
                    .lock()
                    .unwrap_or_else(|p| p.into_inner())
                    .insert(signature.to_owned());
            }
        }
    }

    fn try_append_locked(&self, signature: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).read(true).open(&self.path)?;
        let mut lock = fd_lock::RwLock::new(file);

        let mut attempts = 0;
        loop {
            match lock.try_write() {
                Ok(mut guard) => {
                    writeln!(guard, "{signature}")?;
                    return Ok(());
                }
                Err(err) if attempts < LOCK_RETRY_ATTEMPTS => {
                    attempts += 1;
                    let _ = err;
                    thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn read_known_signatures(path: &Path) -> HashSet<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return HashSet::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to open signature cache, treating as empty");
            return HashSet::new();
        }
    };

    let expected_prefix = format!("v{SIGNATURE_VERSION}:");
    let mut known = HashSet::new();
    for (line_no, line) in io::BufReader::new(file).lines().enumerate() {
        let Ok(line) = line else {
            tracing::warn!(path = %path.display(), line = line_no + 1, "skipping unreadable cache line");
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(&expected_prefix) {
            tracing::debug!(path = %path.display(), line = line_no + 1, "skipping foreign-version cache line");
            continue;
        }
        known.insert(line.to_owned());
    }
    known
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SignatureCache::new(dir.path());
        assert!(!cache.contains("v1:interface:com.example.Foo|tp:0|p:0|f:0"));
    }

    #[test]
    fn record_then_contains_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SignatureCache::new(dir.path());
        let sig = "v1:interface:com.example.Foo|tp:0|p:0|f:0";
        cache.record(sig);
        assert!(cache.contains(sig));
    }

    #[test]
    fn second_cache_instance_sees_persisted_signature() {
        let dir = tempfile::tempdir().unwrap();
        let sig = "v1:class:com.example.Bar|tp:0|p:1|f:0";
        SignatureCache::new(dir.path()).record(sig);
        let reopened = SignatureCache::new(dir.path());
        assert!(reopened.contains(sig));
    }

    #[test]
    fn foreign_version_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join(".fakt-cache");
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(
            cache_dir.join(format!("signatures.v{SIGNATURE_VERSION}.txt")),
            "v0:interface:com.example.Old|tp:0|p:0|f:0\n",
        )
        .unwrap();
        let cache = SignatureCache::new(dir.path());
        assert!(!cache.contains("v0:interface:com.example.Old|tp:0|p:0|f:0"));
    }
}
