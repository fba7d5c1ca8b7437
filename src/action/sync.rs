use std::io;
use clap::Parser;
use crate::config::sync::SyncCli;
use crate::models::sync::SyncReport;
use crate::service::sync::SyncService;
use crate::utils::utils::setup_logging;

pub fn process_sync_cli() -> io::Result<SyncReport> {
    let cli = SyncCli::parse();
    setup_logging(&cli.log_level)?;

    let config = cli.resolve()?;
    log::info!(
        "開始同步，資源目錄：{}，目的地：{}，測試模式：{}",
        config.resource_dir.display(),
        config.destination_dir.display(),
        config.test_mode
    );
    let report = SyncService::new().sync_files(&config)?;

    let summary = &report.summary;
    println!("\n--- 同步摘要 ---");
    if config.test_mode {
        println!("將複製：{}", summary.would_copy);
    } else {
        println!("已複製：{}", summary.copied);
    }
    println!("跳過：{}", summary.skipped);
    println!("失敗：{}", summary.failed);
    Ok(report)
}
