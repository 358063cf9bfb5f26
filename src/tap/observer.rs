use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::domain::KeyedTransaction;

/// Stream position a tap observation was taken at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapStage {
    /// Before the routing decision
    PreBranch,
    /// After routing, on the valid channel
    PostBranchValid,
    /// After routing, on the dead-letter channel
    PostBranchDeadLetter,
}

impl TapStage {
    /// Stable text label for diagnostics
    pub fn label(self) -> &'static str {
        match self {
            TapStage::PreBranch => "pre-branch",
            TapStage::PostBranchValid => "post-branch-valid",
            TapStage::PostBranchDeadLetter => "post-branch-dead-letter",
        }
    }
}

/// Non-destructive diagnostic tap on the routing path
///
/// Observations borrow the record and return nothing, so a tap can neither
/// alter, delay, nor duplicate the stream. Implementations own their own
/// failures; a broken diagnostic sink must never surface into routing.
pub trait StreamTap: Send + Sync {
    fn observe(&self, stage: TapStage, record: &KeyedTransaction);
}

/// Default tap: no observations
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTap;

impl StreamTap for NoopTap {
    fn observe(&self, _stage: TapStage, _record: &KeyedTransaction) {}
}

/// Tap emitting one tracing event per observation
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTap;

impl StreamTap for LogTap {
    fn observe(&self, stage: TapStage, record: &KeyedTransaction) {
        debug!(
            stage = stage.label(),
            key = record.key.as_deref().unwrap_or("<null>"),
            value = ?record.value,
            "tapped record"
        );
    }
}

/// Tap recording (stage, key) observations for assertions in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingTap {
    seen: Arc<Mutex<Vec<(TapStage, Option<String>)>>>,
}

impl RecordingTap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> Vec<(TapStage, Option<String>)> {
        self.seen.lock().expect("tap lock poisoned").clone()
    }

    pub fn count_at(&self, stage: TapStage) -> usize {
        self.observations().iter().filter(|(s, _)| *s == stage).count()
    }
}

impl StreamTap for RecordingTap {
    fn observe(&self, stage: TapStage, record: &KeyedTransaction) {
        self.seen
            .lock()
            .expect("tap lock poisoned")
            .push((stage, record.key.clone()));
    }
}
