use std::io;
use std::path::PathBuf;
use chrono::Local;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{default_filters, validate_file_patterns, validate_input_path, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::{BatchReport, ConversionOutput, InputTarget};
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;

    // 若啟用 --show-config，在轉換前顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    run_conversion(config)
}

/// 印出開始資訊、執行轉換並印出摘要
pub fn run_conversion(config: AppConfig) -> io::Result<ConversionOutput> {
    print_banner(&config);
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    let output = conversion_port.execute(config)?;
    print_summary(&output.report);
    Ok(output)
}

fn print_banner(config: &AppConfig) {
    match &config.target {
        InputTarget::File(path) => {
            println!("\n--- 單檔轉換 ---");
            println!("輸入檔案：'{}'", path.display());
        }
        InputTarget::Directory(path) => {
            println!("\n--- 批次轉換開始 ---");
            println!("輸入目錄：'{}'", path.display());
            println!("過濾模式：{}", config.filters.join(", "));
        }
    }
    println!("來源編碼：'{}'", config.source_encoding);
    println!("目標編碼：'{}'", config.target_encoding);
    println!("開始時間：{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("--------------------------------\n");
}

pub fn print_summary(report: &BatchReport) {
    let summary = &report.summary;
    println!("\n--- 轉換摘要 ---");
    println!("處理檔案數：{}", summary.total_processed);
    println!("成功轉換：{}", summary.converted);
    println!("跳過：{}", summary.skipped);
    println!("失敗：{}", summary.failed);
    println!("----------------\n");
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let target = match (&self.cli.file, &self.cli.directory) {
            (Some(file), None) => {
                validate_input_path(file)?;
                InputTarget::File(PathBuf::from(file))
            }
            (None, Some(directory)) => {
                validate_input_path(directory)?;
                InputTarget::Directory(PathBuf::from(directory))
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "必須指定 --file 或 --directory 其中之一",
                ))
            }
        };

        if matches!(target, InputTarget::Directory(_)) {
            validate_file_patterns(&self.cli.filter)?;
        } else if self.cli.filter != default_filters() {
            log::warn!("單檔模式會忽略 --filter 參數");
        }

        Ok(AppConfig {
            target,
            output: self.cli.output.clone(),
            source_encoding: self.cli.source_encoding.clone(),
            target_encoding: self.cli.target_encoding.clone(),
            filters: self.cli.filter.clone(),
            overwrite: self.cli.overwrite,
            no_progress: self.cli.no_progress,
        })
    }
}
