use std::io;
use std::path::PathBuf;
use crate::models::conversion::{ConversionInput, ConversionOutput, InputTarget};

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target: InputTarget,
    pub output: Option<String>,
    pub source_encoding: String,
    pub target_encoding: String,
    pub filters: Vec<String>,
    pub overwrite: bool,
    pub no_progress: bool,
}

impl AppConfig {
    pub fn into_conversion_input(self) -> ConversionInput {
        ConversionInput {
            target: self.target,
            output: self.output.map(PathBuf::from),
            source_encoding: self.source_encoding,
            target_encoding: self.target_encoding,
            filters: self.filters,
            overwrite: self.overwrite,
            no_progress: self.no_progress,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
