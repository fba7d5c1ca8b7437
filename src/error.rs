use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 單一檔案失敗時的分類，記錄於 `ConversionOutcome::Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Encoding,
    ConversionFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Encoding => "EncodingError",
            ErrorKind::ConversionFailure => "ConversionFailure",
        };
        f.write_str(label)
    }
}

/// 編碼轉換流程中可能發生的錯誤
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 輸入檔案或目錄不存在
    #[error("輸入路徑 '{}' 不存在或類型不符", .path.display())]
    NotFound { path: PathBuf },

    /// 無法以來源編碼解碼、無法以目標編碼編碼，或編碼名稱不支援
    #[error("{message}")]
    Encoding { message: String },

    /// 其他非預期的 I/O 錯誤
    #[error("轉換 '{}' 時發生非預期錯誤：{message}", .path.display())]
    ConversionFailure { path: PathBuf, message: String },

    /// 無效的過濾模式
    #[error("無效的過濾模式：{message}")]
    InvalidFilter { message: String },

    /// 無法建立輸出目錄，整批轉換中止
    #[error("無法建立輸出目錄 '{}'：{source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::NotFound { .. } => ErrorKind::NotFound,
            ConversionError::Encoding { .. } => ErrorKind::Encoding,
            ConversionError::ConversionFailure { .. }
            | ConversionError::InvalidFilter { .. }
            | ConversionError::OutputDirectory { .. } => ErrorKind::ConversionFailure,
        }
    }

    pub(crate) fn failure(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        ConversionError::ConversionFailure {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<ConversionError> for io::Error {
    fn from(err: ConversionError) -> Self {
        let kind = match &err {
            ConversionError::NotFound { .. } => io::ErrorKind::NotFound,
            ConversionError::Encoding { .. } => io::ErrorKind::InvalidData,
            ConversionError::InvalidFilter { .. } => io::ErrorKind::InvalidInput,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_directory_failure_is_reported_as_conversion_failure() {
        let err = ConversionError::OutputDirectory {
            path: PathBuf::from("out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ErrorKind::ConversionFailure);
        assert!(err.to_string().contains("out"));
    }

    #[test]
    fn not_found_maps_to_io_not_found() {
        let err: io::Error = ConversionError::NotFound { path: PathBuf::from("missing.txt") }.into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
