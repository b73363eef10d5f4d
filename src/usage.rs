use chrono::{DateTime, Utc};

/// Caller-owned record of submission times. The caller constructs one,
/// keeps it for as long as it wants usage tracked, and passes it into the
/// submission pipeline; nothing here is process-global.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    timestamps: Vec<DateTime<Utc>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, at: DateTime<Utc>) {
        self.timestamps.push(at);
    }

    pub fn submission_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }
}
