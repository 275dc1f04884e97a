// Undo/redo history module for the editor.
//
// Linear history: a commit after an undo throws the redo branch away.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// History settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Cap on stored snapshots. `None` keeps everything.
    #[serde(default)]
    pub max_states: Option<usize>,
}

/// Ordered snapshots plus the index of the active one.
///
/// Invariants: the sequence is never empty and `index < len`. Only `commit`
/// changes the sequence; `undo`/`redo` just move the index.
#[derive(Debug, Clone)]
pub struct History<S> {
    states: Vec<S>,
    current_index: usize,
    max_states: Option<usize>,
}

impl<S> History<S> {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, &HistoryConfig::default())
    }

    pub fn with_config(initial: S, config: &HistoryConfig) -> Self {
        // a cap of zero would have to drop the active snapshot
        let max_states = config.max_states.map(|max| max.max(1));
        debug!(max_states = ?max_states, "creating history");

        Self {
            states: vec![initial],
            current_index: 0,
            max_states,
        }
    }

    /// Make `snapshot` the active state.
    ///
    /// Everything after the current index is discarded first, so redo is
    /// impossible until the next undo. Never deduplicates.
    pub fn commit(&mut self, snapshot: S) {
        let discarded = self.states.len() - (self.current_index + 1);
        self.states.truncate(self.current_index + 1);
        self.states.push(snapshot);
        self.current_index = self.states.len() - 1;

        if let Some(max) = self.max_states {
            if self.states.len() > max {
                let excess = self.states.len() - max;
                self.states.drain(..excess);
                self.current_index -= excess;
                trace!(evicted = excess, "evicted oldest snapshots");
            }
        }

        debug!(
            index = self.current_index,
            len = self.states.len(),
            discarded,
            "committed snapshot"
        );
    }

    /// Step back one snapshot. No-op at the start.
    pub fn undo(&mut self) -> &S {
        if self.current_index == 0 {
            debug!("undo ignored: already at oldest snapshot");
        } else {
            self.current_index -= 1;
            debug!(index = self.current_index, "undo");
        }
        &self.states[self.current_index]
    }

    /// Step forward one snapshot. No-op at the end.
    pub fn redo(&mut self) -> &S {
        if self.current_index + 1 == self.states.len() {
            debug!("redo ignored: already at newest snapshot");
        } else {
            self.current_index += 1;
            debug!(index = self.current_index, "redo");
        }
        &self.states[self.current_index]
    }

    pub fn current(&self) -> &S {
        &self.states[self.current_index]
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.states.len()
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }
}
