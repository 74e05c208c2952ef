//! Autosave wiring between the REST layer and the position flusher
//!
//! The API applies position changes to the in-memory store immediately;
//! making them durable is the flusher's job. One flusher task runs per
//! graph context, created lazily on the first position change for that
//! graph, so a burst of drags on one board coalesces into a single disk
//! write after the movement settles.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::flusher::{
    ContextId, DirtyEntry, FlushError, FlusherHandle, PositionFlusher, PositionSink,
};
use crate::store::GraphStore;

/// Sink that persists the store once a debounced batch settles
///
/// Positions are already in memory when the sink runs; the save makes the
/// whole document durable in one write.
#[derive(Clone)]
pub struct DiskSink {
    store: Arc<GraphStore>,
}

impl DiskSink {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl PositionSink for DiskSink {
    async fn save_positions(
        &self,
        context: ContextId,
        entries: Vec<DirtyEntry>,
    ) -> Result<(), FlushError> {
        self.store.persist()?;
        log::debug!(
            "Autosaved {} node positions for graph {}",
            entries.len(),
            context
        );
        Ok(())
    }
}

/// Per-graph registry of running flusher tasks
pub struct AutosaveRegistry {
    store: Arc<GraphStore>,
    delay: Duration,
    flushers: Mutex<HashMap<ContextId, FlusherHandle>>,
}

impl AutosaveRegistry {
    pub fn new(store: Arc<GraphStore>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            flushers: Mutex::new(HashMap::new()),
        }
    }

    /// Get the flusher for a graph, spawning one on first use
    fn handle_for(&self, graph_id: ContextId) -> FlusherHandle {
        let mut flushers = self.flushers.lock();
        flushers
            .entry(graph_id)
            .or_insert_with(|| {
                log::debug!("Starting autosave flusher for graph {}", graph_id);
                let sink = DiskSink::new(Arc::clone(&self.store));
                PositionFlusher::with_delay(sink, graph_id, self.delay).spawn()
            })
            .clone()
    }

    /// Feed a batch of applied position changes into the graph's flusher
    pub async fn record_moves(&self, graph_id: ContextId, entries: &[DirtyEntry]) {
        let handle = self.handle_for(graph_id);
        for entry in entries {
            handle
                .record_move(entry.key.as_str(), entry.x as f64, entry.y as f64)
                .await;
        }
    }

    /// Drop every flusher
    ///
    /// Graph ids are list indices, so a deletion invalidates the bindings of
    /// every flusher past it; dropping the handles closes their channels,
    /// which makes each task write out anything still pending and exit.
    pub fn reset(&self) {
        self.flushers.lock().clear();
    }
}
