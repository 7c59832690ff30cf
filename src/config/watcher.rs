// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for regenerating a setlist when its file changes.
//!
//! The parent directory is watched rather than the file itself, so editors
//! that save by writing a temporary file and renaming it over the original
//! keep triggering reloads. Only events naming the setlist file count, and
//! bursts of them are debounced into a single reload.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::SetlistFile;

/// Default quiet period before a burst of writes is reloaded
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// How often the debounce thread checks whether a burst has settled
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of reloading the watched setlist file
#[derive(Debug, Clone)]
pub enum SetlistEvent {
    /// File changed and every record validated
    Reloaded(Box<SetlistFile>),
    /// File changed but failed to load or validate
    Error(String),
}

/// Debounced watcher over a single setlist file
pub struct SetlistWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<SetlistEvent>,
    watched_path: PathBuf,
}

impl SetlistWatcher {
    /// Watch a setlist file.
    ///
    /// # Arguments
    /// * `path` - Setlist file to watch; it may be replaced by rename
    /// * `debounce_ms` - Quiet period in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| anyhow!("{:?} does not name a file", path))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let directory = directory
            .canonicalize()
            .with_context(|| format!("Failed to resolve directory of {:?}", path))?;
        let watched_path = directory.join(&file_name);
        let debounce = Duration::from_millis(debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS));

        let (event_tx, event_rx) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| anyhow!("Failed to watch directory {:?}: {}", directory, e))?;

        let target = watched_path.clone();
        std::thread::spawn(move || debounce_loop(notify_rx, event_tx, target, file_name, debounce));

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Block until the next reload outcome
    pub fn recv(&self) -> Option<SetlistEvent> {
        self.event_receiver.recv().ok()
    }

    /// Wait up to `timeout` for the next reload outcome
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SetlistEvent> {
        self.event_receiver.recv_timeout(timeout).ok()
    }

    /// Absolute path of the watched file
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

fn debounce_loop(
    notify_rx: Receiver<Event>,
    event_tx: Sender<SetlistEvent>,
    target: PathBuf,
    file_name: OsString,
    debounce: Duration,
) {
    let mut pending_since: Option<Instant> = None;

    loop {
        match notify_rx.recv_timeout(POLL_INTERVAL) {
            Ok(event) => {
                if touches_target(&event, &file_name) {
                    pending_since = Some(Instant::now());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if !pending_since.map_or(false, |t| t.elapsed() >= debounce) {
                    continue;
                }
                pending_since = None;

                // Deleted and not (yet) replaced
                if !target.exists() {
                    debug!(path = ?target, "Setlist file is gone, waiting for it to return");
                    continue;
                }

                if event_tx.send(reload(&target)).is_err() {
                    break;
                }
            }
            // Watcher was dropped
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Whether an event leaves new content at the setlist file's path
fn touches_target(event: &Event, file_name: &OsStr) -> bool {
    let content_changed = match event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };

    content_changed
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

fn reload(path: &Path) -> SetlistEvent {
    debug!(path = ?path, "Reloading setlist file");
    match validate_setlist(path) {
        Ok(file) => SetlistEvent::Reloaded(Box::new(file)),
        Err(e) => {
            warn!(path = ?path, error = %e, "Setlist reload failed");
            SetlistEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

/// Load a setlist file and validate all of its song records
pub fn validate_setlist<P: AsRef<Path>>(path: P) -> Result<SetlistFile> {
    let file = SetlistFile::load(path)?;
    file.songs()?;
    Ok(file)
}
