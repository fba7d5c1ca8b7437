use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::{Path, PathBuf};

use crate::action::cli::run_conversion;
use crate::config::config::{
    default_filters, is_valid_pattern, DEFAULT_FILTERS, DEFAULT_SOURCE_ENCODING, DEFAULT_TARGET_ENCODING,
};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::{ConversionOutput, InputTarget};
use crate::service::codec::Codec;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ConversionOutput> {
    setup_logging(&get_log_level_option()?)?;
    println!("=== 歡迎使用互動模式 ===");
    let is_batch = get_conversion_mode()?;
    let target = get_input_target(is_batch)?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：GBK → UTF-8，預設過濾模式，預設輸出位置");
        Box::new(DefaultConfigAdapter::new(target))
    } else {
        Box::new(InteractiveConfigAdapter::new(target))
    };

    let config = ConfigService::new(config_port).get_config()?;
    run_conversion(config)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（GBK → UTF-8，輸出至預設位置）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_conversion_mode() -> io::Result<bool> {
    let is_batch = Select::new()
        .with_prompt("選擇轉換模式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["單一檔案", "批次 - 轉換目錄中符合條件的檔案（不遞迴）"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換模式選擇失敗: {}", e)))? == 1;
    Ok(is_batch)
}

pub fn get_input_target(is_batch: bool) -> io::Result<InputTarget> {
    let prompt = if is_batch {
        "請輸入目錄路徑（例如：./lyrics）"
    } else {
        "請輸入檔案路徑（例如：./song.lrc）"
    };
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            let path = Path::new(input);
            match (is_batch, path.is_dir(), path.is_file()) {
                (true, true, _) | (false, _, true) => Ok(()),
                (true, _, _) => Err(format!("目錄 '{}' 不存在", input)),
                (false, _, _) => Err(format!("檔案 '{}' 不存在", input)),
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let path = PathBuf::from(input);
    Ok(if is_batch { InputTarget::Directory(path) } else { InputTarget::File(path) })
}

pub fn get_encoding(prompt: &str, default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            Codec::for_label(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("編碼輸入失敗: {}", e)))
}

pub fn get_output_path(is_batch: bool) -> io::Result<Option<String>> {
    let prompt = if is_batch {
        "輸入輸出目錄（留空使用 <輸入目錄>/converted_<編碼>）"
    } else {
        "輸入輸出檔案路徑（留空使用 <檔名>_<編碼><副檔名>）"
    };
    let output: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let output = output.trim().to_string();
    Ok(if output.is_empty() { None } else { Some(output) })
}

pub fn get_file_patterns() -> io::Result<Vec<String>> {
    let patterns = Input::new()
        .with_prompt("輸入過濾模式，以空白分隔")
        .default(DEFAULT_FILTERS.join(" "))
        .validate_with(|input: &String| -> Result<(), String> {
            if input.split_whitespace().next().is_none() {
                return Err("至少需要一個過濾模式".to_string());
            }
            match input.split_whitespace().find(|p| !is_valid_pattern(p)) {
                Some(p) => Err(format!("無效的過濾模式: '{}'", p)),
                None => Ok(()),
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("過濾模式輸入失敗: {}", e)))?
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<String>>();
    Ok(patterns)
}

pub fn get_overwrite_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("輸出檔已存在時是否覆寫？")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("覆寫選項輸入失敗: {}", e)))
}

pub const LOG_LEVELS: [&str; 4] = ["info", "warn", "error", "debug"];

pub fn get_log_level_option() -> io::Result<String> {
    let index = Select::new()
        .with_prompt("選擇日誌等級")
        .items(&LOG_LEVELS)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌等級選擇失敗: {}", e)))?;
    Ok(LOG_LEVELS[index].to_string())
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    target: InputTarget,
}

impl InteractiveConfigAdapter {
    pub fn new(target: InputTarget) -> Self {
        InteractiveConfigAdapter { target }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let is_batch = matches!(self.target, InputTarget::Directory(_));
        let source_encoding = get_encoding("來源編碼", DEFAULT_SOURCE_ENCODING)?;
        let target_encoding = get_encoding("目標編碼", DEFAULT_TARGET_ENCODING)?;
        let output = get_output_path(is_batch)?;
        let filters = if is_batch {
            get_file_patterns()?
        } else {
            default_filters()
        };
        let overwrite = get_overwrite_option()?;

        Ok(AppConfig {
            target: self.target.clone(),
            output,
            source_encoding,
            target_encoding,
            filters,
            overwrite,
            no_progress: false,
        })
    }
}
