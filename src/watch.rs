//! Regenerate the document when the project changes
//!
//! File events arrive from a `notify` watcher on a background thread and are
//! drained on the calling thread. Relevant events are coalesced: the document
//! is rewritten once no relevant event has been seen for the debounce window.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::generate::Generator;

/// Debounce window used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// How long to block on the event channel while nothing is pending.
const IDLE_WAIT: Duration = Duration::from_secs(60);

/// Which events trigger a regeneration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub debounce: Duration,
    /// The generated document. Changes to it never trigger a rebuild.
    pub output_file: PathBuf,
    /// When set, only paths with this extension or directories count.
    pub module_extension: Option<String>,
}

impl WatchConfig {
    pub fn new(output_file: PathBuf) -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            output_file,
            module_extension: None,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_module_extension(mut self, extension: Option<String>) -> Self {
        self.module_extension = extension;
        self
    }

    pub fn is_relevant_path(&self, path: &Path) -> bool {
        self.path_matches(path, path.is_dir())
    }

    /// A path is relevant when an event of a tree-changing kind touches it.
    ///
    /// Folder create/remove and renames count as directory changes even
    /// when the path no longer exists.
    pub fn is_relevant_event(&self, event: &Event) -> bool {
        let changes_tree = matches!(
            event.kind,
            EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        );
        if !changes_tree {
            return false;
        }
        let directory_event = is_directory_event(&event.kind);
        event
            .paths
            .iter()
            .any(|p| self.path_matches(p, directory_event || p.is_dir()))
    }

    fn path_matches(&self, path: &Path, is_dir: bool) -> bool {
        if let Some(name) = self.output_file.file_name() {
            if path.ends_with(name) {
                return false;
            }
        }
        match &self.module_extension {
            Some(ext) => path.extension().is_some_and(|e| e == ext.as_str()) || is_dir,
            None => true,
        }
    }
}

fn is_directory_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(CreateKind::Folder)
            | EventKind::Remove(RemoveKind::Folder)
            | EventKind::Modify(ModifyKind::Name(_))
    )
}

/// Trailing-edge debounce over event arrival times.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_event: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_event: None,
        }
    }

    pub fn record(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// True once the window has passed since the latest recorded event.
    pub fn is_ready(&self, now: Instant) -> bool {
        self.last_event
            .is_some_and(|last| now.saturating_duration_since(last) >= self.window)
    }

    /// How long the caller may block before checking again.
    pub fn wait_time(&self, now: Instant) -> Duration {
        match self.last_event {
            Some(last) => self.window.saturating_sub(now.saturating_duration_since(last)),
            None => IDLE_WAIT,
        }
    }

    pub fn clear(&mut self) {
        self.last_event = None;
    }
}

/// Write the document once, then rewrite it after every burst of relevant
/// changes under the generator's roots.
///
/// Runs until the watcher shuts down. A failed regeneration is logged and
/// the loop keeps going.
pub fn watch(generator: &Generator, config: &WatchConfig) -> Result<()> {
    generator.write_to(&config.output_file)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Err(e) = tx.send(res) {
            error!("Error sending watch event: {}", e);
        }
    })?;
    for root in generator.roots() {
        watcher.watch(root, RecursiveMode::Recursive)?;
    }
    info!(
        roots = generator.roots().len(),
        output = %config.output_file.display(),
        "watching for changes"
    );

    process_events(generator, config, &rx);
    Ok(())
}

/// Drain watcher events until the channel closes, rewriting the document
/// after each quiet window. A change still pending when the channel closes
/// is written before returning.
fn process_events(
    generator: &Generator,
    config: &WatchConfig,
    events: &Receiver<notify::Result<Event>>,
) {
    let mut debouncer = Debouncer::new(config.debounce);
    loop {
        match events.recv_timeout(debouncer.wait_time(Instant::now())) {
            Ok(Ok(event)) => {
                if config.is_relevant_event(&event) {
                    debug!(paths = ?event.paths, "relevant change");
                    debouncer.record(Instant::now());
                }
            }
            Ok(Err(e)) => warn!(error = %e, "watch error"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if debouncer.is_pending() {
                    regenerate(generator, config);
                }
                info!("watcher channel closed");
                break;
            }
        }

        if debouncer.is_ready(Instant::now()) {
            debouncer.clear();
            regenerate(generator, config);
        }
    }
}

fn regenerate(generator: &Generator, config: &WatchConfig) {
    if let Err(e) = generator.write_to(&config.output_file) {
        warn!(error = %e, "failed to regenerate directory structure");
    }
}
