//! Continuous rechecking of individual files.
//!
//! Each watched file gets a poll thread that samples its modification time
//! and drives a [`DebounceMachine`]; the registry owns the threads and
//! tears them down on unwatch or drop.

mod debounce;

pub use debounce::{DEBOUNCE_WINDOW, DebounceMachine, WatchState};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::error::{LintSweepError, Result};

/// How often a watch thread samples the file's modification time.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

struct WatchHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

/// Owns the active watches, keyed by watched path.
#[derive(Default)]
pub struct WatchRegistry {
    watches: Mutex<HashMap<PathBuf, WatchHandle>>,
}

impl WatchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `path`, checking it immediately and again after each
    /// debounced modification. `on_check` runs on the calling thread for
    /// the first check and on the watch thread afterwards.
    ///
    /// # Errors
    /// Returns [`LintSweepError::FileRead`] if the path does not exist and
    /// [`LintSweepError::Config`] if it is not a regular file or is
    /// already being watched.
    pub fn watch<F>(&self, path: &Path, mut on_check: F) -> Result<()>
    where
        F: FnMut(&Path) + Send + 'static,
    {
        let metadata = fs::metadata(path).map_err(|source| LintSweepError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(LintSweepError::Config(format!(
                "cannot watch {}: not a regular file",
                path.display()
            )));
        }

        let mut watches = self.watches.lock().expect("watch registry poisoned");
        if watches.contains_key(path) {
            return Err(LintSweepError::Config(format!(
                "{} is already being watched",
                path.display()
            )));
        }

        // First check happens before the thread starts so output ordering
        // is deterministic for the caller.
        on_check(path);
        let mut machine = DebounceMachine::new();
        if let Ok(mtime) = metadata.modified() {
            machine.seed(mtime);
        }

        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread_path = path.to_path_buf();
        let thread = std::thread::spawn(move || {
            poll_loop(&thread_path, &mut machine, &thread_stop, &mut on_check);
        });

        watches.insert(
            path.to_path_buf(),
            WatchHandle {
                stop,
                thread: Some(thread),
            },
        );
        Ok(())
    }

    /// Stop watching `path`. Returns false when it was not being watched.
    pub fn unwatch(&self, path: &Path) -> bool {
        let handle = {
            let mut watches = self.watches.lock().expect("watch registry poisoned");
            watches.remove(path)
        };
        match handle {
            Some(mut handle) => {
                handle.stop.store(true, Ordering::Relaxed);
                if let Some(thread) = handle.thread.take() {
                    let _ = thread.join();
                }
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_watched(&self, path: &Path) -> bool {
        self.watches
            .lock()
            .expect("watch registry poisoned")
            .contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watches.lock().expect("watch registry poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for WatchRegistry {
    fn drop(&mut self) {
        let mut watches = self.watches.lock().expect("watch registry poisoned");
        for (_, mut handle) in watches.drain() {
            handle.stop.store(true, Ordering::Relaxed);
            if let Some(thread) = handle.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

fn poll_loop<F>(path: &Path, machine: &mut DebounceMachine, stop: &AtomicBool, on_check: &mut F)
where
    F: FnMut(&Path),
{
    while !stop.load(Ordering::Relaxed) {
        std::thread::sleep(POLL_INTERVAL);
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let now = Instant::now();
        if let Ok(metadata) = fs::metadata(path)
            && let Ok(mtime) = metadata.modified()
        {
            machine.observe(mtime, now);
        }

        if machine.ready(now) {
            machine.begin_check();
            on_check(path);
            machine.finish_check();
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
