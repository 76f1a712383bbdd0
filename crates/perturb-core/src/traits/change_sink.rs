use crate::models::{Change, ChangeRecord};

/// Receives change records from mutating operations.
///
/// The core never keeps a global log; callers that support undo pass
/// their own sink, everybody else passes [`NullSink`].
pub trait ChangeSink {
    fn record(&mut self, record: ChangeRecord);

    /// Timestamp `change` with the current time and record it.
    fn emit(&mut self, change: Change) {
        self.record(ChangeRecord::now(change));
    }
}

/// Discards every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ChangeSink for NullSink {
    fn record(&mut self, _record: ChangeRecord) {}
}

impl ChangeSink for Vec<ChangeRecord> {
    fn record(&mut self, record: ChangeRecord) {
        self.push(record);
    }
}
