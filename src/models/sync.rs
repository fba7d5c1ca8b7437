use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub resource_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub test_mode: bool,
    pub no_progress: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyncAction {
    Copied,
    Skipped,
    WouldCopy,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SyncEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: SyncAction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub copied: usize,
    pub skipped: usize,
    pub would_copy: usize,
    pub failed: usize,
}

impl SyncSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct SyncReport {
    pub entries: Vec<SyncEntry>,
    pub summary: SyncSummary,
}

impl SyncReport {
    pub fn record(&mut self, source: PathBuf, destination: PathBuf, action: SyncAction) {
        match &action {
            SyncAction::Copied => self.summary.copied += 1,
            SyncAction::Skipped => self.summary.skipped += 1,
            SyncAction::WouldCopy => self.summary.would_copy += 1,
            SyncAction::Failed(_) => self.summary.failed += 1,
        }
        self.entries.push(SyncEntry {
            source,
            destination,
            action,
        });
    }
}
