use clap::{ArgGroup, Parser};
use std::io;
use std::path::Path;

pub const DEFAULT_SOURCE_ENCODING: &str = "gbk";
pub const DEFAULT_TARGET_ENCODING: &str = "utf-8";
pub const DEFAULT_FILTERS: [&str; 5] = ["*.txt", "*.lrc", "*.srt", "*.csv", "*.log"];

#[derive(Parser, Clone, Debug)]
#[command(
    name = "convert_encoding",
    about = "轉換文字檔的字元編碼，支援單一檔案或整個目錄批次處理",
    long_about = "轉換文字檔的字元編碼（預設 GBK → UTF-8）。\n使用 -f 指定單一檔案，或 -d 指定目錄進行批次轉換（不遞迴子目錄）。\n不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    group(ArgGroup::new("input").required(true).args(["file", "directory"]))
)]
pub struct Cli {
    /// 要轉換的單一檔案
    #[arg(short = 'f', long)]
    pub file: Option<String>,
    /// 批次轉換的目錄，只處理目錄下的直接檔案
    #[arg(short = 'd', long)]
    pub directory: Option<String>,
    /// 單檔模式：輸出檔案路徑；批次模式：輸出目錄
    /// （預設分別為 `<檔名>_<編碼><副檔名>` 與 `<輸入目錄>/converted_<編碼>`）
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(short = 's', long, default_value = DEFAULT_SOURCE_ENCODING)]
    pub source_encoding: String,
    #[arg(short = 't', long, default_value = DEFAULT_TARGET_ENCODING)]
    pub target_encoding: String,
    /// 批次模式的 glob 過濾模式，可重複指定或以空白分隔；單檔模式忽略
    #[arg(short = 'F', long = "filter", num_args = 1.., default_values = DEFAULT_FILTERS)]
    pub filter: Vec<String>,
    /// 輸出檔已存在時仍覆寫
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn default_filters() -> Vec<String> {
    DEFAULT_FILTERS.iter().map(|p| p.to_string()).collect()
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    Ok(path)
}

/// 過濾模式只比對檔名，不可為空或包含路徑分隔符號
pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\'];
    !pattern.trim().is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(patterns: &[String]) -> io::Result<()> {
    for pattern in patterns {
        if !is_valid_pattern(pattern) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的過濾模式: {}", pattern)));
        }
    }
    Ok(())
}
