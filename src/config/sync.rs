use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;
use crate::models::sync::SyncConfig;
use crate::utils::path::home_dir;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "sync_files",
    about = "將資源目錄中目的地缺少的檔案複製到 <目的地>/icon"
)]
pub struct SyncCli {
    /// 資源目錄（預設為 ~/Pictures/icon）
    #[arg(short = 'r', long = "resource")]
    pub resource: Option<String>,
    /// 目的地目錄（預設為目前目錄）
    #[arg(short = 'd', long = "destination")]
    pub destination: Option<String>,
    /// 測試模式：只列出將要複製的檔案，不實際複製
    #[arg(short = 't', long = "test", default_value_t = false)]
    pub test: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

pub fn default_resource_dir() -> io::Result<PathBuf> {
    home_dir()
        .map(|home| home.join("Pictures").join("icon"))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "無法取得使用者主目錄，請使用 --resource 指定資源目錄",
            )
        })
}

impl SyncCli {
    /// 在啟動時一次解析預設路徑
    pub fn resolve(&self) -> io::Result<SyncConfig> {
        let resource_dir = match &self.resource {
            Some(resource) => PathBuf::from(resource),
            None => default_resource_dir()?,
        };
        let destination_dir = match &self.destination {
            Some(destination) => PathBuf::from(destination),
            None => env::current_dir()?,
        };
        Ok(SyncConfig {
            resource_dir,
            destination_dir,
            test_mode: self.test,
            no_progress: self.no_progress,
        })
    }
}
