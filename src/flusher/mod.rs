//! Debounced flushing of unsaved node positions
//!
//! Dragging nodes produces bursts of per-node position changes. The flusher
//! tracks which nodes have unsaved coordinates and flushes them to a
//! [`PositionSink`] in one batch once the movement settles: every recorded
//! move re-arms a one-shot timer, and only the timer surviving the burst
//! triggers the save (trailing-edge debounce).
//!
//! A flusher is bound to one graph context at a time. Rebinding drops any
//! pending entries and disarms the timer; a failed flush keeps its entries
//! pending so the next natural trigger retries them.

mod pending;

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

pub use pending::{DirtyEntry, PendingSet};

/// Identifies the graph context position changes belong to
pub type ContextId = usize;

/// Error type returned by position sinks
pub type FlushError = Box<dyn std::error::Error + Send + Sync>;

/// Debounce delay applied after the last recorded move, in milliseconds
pub const DEFAULT_FLUSH_DELAY_MS: u64 = 1000;

/// Command buffer size for a spawned flusher task
const COMMAND_BUFFER: usize = 256;

/// Persistence collaborator for batched position saves
///
/// The batch is atomic from the flusher's point of view: the sink either
/// accepts all entries or rejects the whole call.
pub trait PositionSink: Send + Sync + 'static {
    fn save_positions(
        &self,
        context: ContextId,
        entries: Vec<DirtyEntry>,
    ) -> impl Future<Output = Result<(), FlushError>> + Send;
}

/// Commands accepted by a running flusher task
#[derive(Debug)]
pub enum FlusherCommand {
    /// A node finished moving to new coordinates
    Moved { key: String, x: f64, y: f64 },
    /// Flush now; `None` sends the whole pending set
    Flush { keys: Option<Vec<String>> },
    /// Switch to a new graph context, discarding pending entries
    Rebind { context: ContextId },
}

/// Handle for sending commands to a spawned flusher task
#[derive(Debug, Clone)]
pub struct FlusherHandle {
    tx: mpsc::Sender<FlusherCommand>,
}

impl FlusherHandle {
    /// Record a position change for `key`
    pub async fn record_move(&self, key: impl Into<String>, x: f64, y: f64) {
        // Ignore send errors - just means the flusher task is gone
        let _ = self
            .tx
            .send(FlusherCommand::Moved {
                key: key.into(),
                x,
                y,
            })
            .await;
    }

    /// Request an immediate flush, optionally limited to the given keys
    ///
    /// Useful after a bulk relayout that silently moved many nodes at once:
    /// passing `None` sends the whole tracked set without waiting for the
    /// debounce timer.
    pub async fn flush(&self, keys: Option<Vec<String>>) {
        let _ = self.tx.send(FlusherCommand::Flush { keys }).await;
    }

    /// Rebind the flusher to a different graph context
    pub async fn rebind(&self, context: ContextId) {
        let _ = self.tx.send(FlusherCommand::Rebind { context }).await;
    }
}

/// Dirty-set debounced position flusher
///
/// Owns its pending set, bound context id, and timer deadline; constructed
/// per active graph context rather than shared process-wide.
pub struct PositionFlusher<S> {
    sink: S,
    context: ContextId,
    pending: PendingSet,
    delay: Duration,
    deadline: Option<Instant>,
}

impl<S: PositionSink> PositionFlusher<S> {
    /// Create a flusher with the default one-second debounce delay
    pub fn new(sink: S, context: ContextId) -> Self {
        Self::with_delay(sink, context, Duration::from_millis(DEFAULT_FLUSH_DELAY_MS))
    }

    /// Create a flusher with a custom debounce delay
    pub fn with_delay(sink: S, context: ContextId, delay: Duration) -> Self {
        Self {
            sink,
            context,
            pending: PendingSet::new(),
            delay,
            deadline: None,
        }
    }

    /// The currently bound graph context
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// The set of entries waiting to be flushed
    pub fn pending(&self) -> &PendingSet {
        &self.pending
    }

    /// Record a position change and re-arm the flush timer
    ///
    /// Coordinates are floored to integers before storage. Non-finite
    /// coordinates are rejected at the boundary and never stored; returns
    /// whether the move was accepted. No network or disk effect happens
    /// here.
    pub fn record_move(&mut self, key: &str, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            log::debug!("Ignoring move for '{}' with non-finite coordinates", key);
            return false;
        }

        self.pending
            .record(DirtyEntry::new(key, x.floor() as i64, y.floor() as i64));
        self.schedule_flush(self.delay);
        true
    }

    /// (Re)arm the one-shot flush timer
    ///
    /// An already armed timer is replaced, so only the last move of a burst
    /// determines when the flush fires.
    pub fn schedule_flush(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Rebind to a new context: pending entries are dropped and the timer is
    /// disarmed. Entries never carry across contexts.
    pub fn rebind(&mut self, context: ContextId) {
        if !self.pending.is_empty() {
            log::debug!(
                "Dropping {} pending positions on rebind {} -> {}",
                self.pending.len(),
                self.context,
                context
            );
        }
        self.pending.clear();
        self.deadline = None;
        self.context = context;
    }

    /// Flush pending entries to the sink
    ///
    /// With `explicit_keys`, only those keys are sent and removed on
    /// success; everything else stays pending. Without, the whole set is
    /// sent. On failure the entries return to the pending set (unless a
    /// newer move for the same key arrived meanwhile) and no retry is
    /// scheduled; the next natural move or explicit call retries them.
    pub async fn flush_now(&mut self, explicit_keys: Option<&[String]>) -> Result<usize, FlushError> {
        let entries = match explicit_keys {
            Some(keys) => self.pending.take_keys(keys),
            None => self.pending.take_all(),
        };
        if entries.is_empty() {
            return Ok(0);
        }

        let count = entries.len();
        match self.sink.save_positions(self.context, entries.clone()).await {
            Ok(()) => {
                log::debug!("Flushed {} positions for context {}", count, self.context);
                Ok(count)
            }
            Err(e) => {
                self.pending.restore(entries);
                Err(e)
            }
        }
    }

    /// Spawn the flusher as a background task, returning a command handle
    pub fn spawn(self) -> FlusherHandle {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(self.run(rx));
        FlusherHandle { tx }
    }

    /// Run the flusher as an async task
    ///
    /// Receives commands from the channel and flushes when the debounce
    /// timer fires. The sink call is awaited inline, so flushes never
    /// overlap; commands arriving during a flush queue up and are applied
    /// afterwards, which keeps moves recorded mid-flush pending for the
    /// next one. When the channel closes, remaining entries are flushed and
    /// the task exits.
    pub async fn run(mut self, mut rx: mpsc::Receiver<FlusherCommand>) {
        loop {
            let deadline = self.deadline.unwrap_or_else(far_future);

            tokio::select! {
                // Timer fired - flush the whole pending set
                _ = time::sleep_until(deadline), if self.deadline.is_some() => {
                    self.deadline = None;
                    if let Err(e) = self.flush_now(None).await {
                        log::warn!(
                            "Position flush failed for context {}: {} ({} entries kept for retry)",
                            self.context,
                            e,
                            self.pending.len()
                        );
                    }
                }

                cmd = rx.recv() => match cmd {
                    Some(FlusherCommand::Moved { key, x, y }) => {
                        self.record_move(&key, x, y);
                    }
                    Some(FlusherCommand::Flush { keys }) => {
                        if let Err(e) = self.flush_now(keys.as_deref()).await {
                            log::warn!(
                                "Explicit position flush failed for context {}: {}",
                                self.context,
                                e
                            );
                        }
                        if self.pending.is_empty() {
                            self.deadline = None;
                        }
                    }
                    Some(FlusherCommand::Rebind { context }) => {
                        self.rebind(context);
                    }
                    None => {
                        // Channel closed, flush remaining and exit
                        if let Err(e) = self.flush_now(None).await {
                            log::warn!(
                                "Final position flush failed for context {}: {}",
                                self.context,
                                e
                            );
                        }
                        break;
                    }
                }
            }
        }
    }
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86400 * 365)
}
