use std::fmt;
use std::path::PathBuf;
use crate::error::ErrorKind;

/// 轉換對象：單一檔案或目錄（非遞迴）
#[derive(Clone, Debug, PartialEq)]
pub enum InputTarget {
    File(PathBuf),
    Directory(PathBuf),
}

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub target: InputTarget,
    pub output: Option<PathBuf>,
    pub source_encoding: String,
    pub target_encoding: String,
    pub filters: Vec<String>,
    pub overwrite: bool,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    pub report: BatchReport,
}

/// 單一檔案的轉換請求，於轉碼前建立、使用一次
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source_encoding: String,
    pub target_encoding: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// 輸出路徑與輸入路徑相同
    WouldOverwriteInput,
    /// 輸出檔案已存在
    OutputExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::WouldOverwriteInput => f.write_str("輸出檔案會覆寫輸入檔，請調整輸出路徑或目錄"),
            SkipReason::OutputExists => f.write_str("輸出檔案已存在（使用 --overwrite 覆寫）"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConversionOutcome {
    Converted,
    Skipped(SkipReason),
    Failed { kind: ErrorKind, message: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub total_processed: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        self.total_processed += 1;
        match outcome {
            ConversionOutcome::Converted => self.converted += 1,
            ConversionOutcome::Skipped(_) => self.skipped += 1,
            ConversionOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[derive(Clone, Debug)]
pub struct FileReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub outcome: ConversionOutcome,
}

/// 每個檔案的結果依處理順序累積，單檔失敗不會中止整批
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<FileReport>,
    pub summary: ConversionSummary,
}

impl BatchReport {
    pub fn record(&mut self, input_path: PathBuf, output_path: PathBuf, outcome: ConversionOutcome) {
        self.summary.record(&outcome);
        self.entries.push(FileReport {
            input_path,
            output_path,
            outcome,
        });
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &ConversionOutcome> {
        self.entries.iter().map(|entry| &entry.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_outcome() {
        let mut report = BatchReport::default();
        report.record("a".into(), "a_out".into(), ConversionOutcome::Converted);
        report.record("b".into(), "b_out".into(), ConversionOutcome::Skipped(SkipReason::OutputExists));
        report.record(
            "c".into(),
            "c_out".into(),
            ConversionOutcome::Failed { kind: ErrorKind::Encoding, message: "bad".into() },
        );

        assert_eq!(
            report.summary,
            ConversionSummary { total_processed: 3, converted: 1, skipped: 1, failed: 1 }
        );
        assert!(report.summary.has_failures());
        assert_eq!(report.outcomes().count(), 3);
    }
}
