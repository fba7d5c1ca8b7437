use std::path::PathBuf;
use regex::RegexSet;
use crate::error::ConversionError;
use crate::utils::utils::create_regex_set;

/// 批次模式的檔名過濾條件
#[derive(Clone, Debug)]
pub struct FilterSpec {
    patterns: Vec<String>,
    set: RegexSet,
}

impl FilterSpec {
    pub fn new(patterns: &[String]) -> Result<Self, ConversionError> {
        let set = create_regex_set(patterns).map_err(|e| ConversionError::InvalidFilter {
            message: e.to_string(),
        })?;
        Ok(FilterSpec {
            patterns: patterns.to_vec(),
            set,
        })
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.set.is_match(file_name)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[derive(Clone)]
pub struct FileCollectInput {
    pub directory: PathBuf,
    pub filters: FilterSpec,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub total_size: usize,
}
