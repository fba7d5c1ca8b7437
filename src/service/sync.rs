use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use log::{info, warn};
use pathdiff::diff_paths;
use walkdir::WalkDir;
use crate::models::sync::{SyncAction, SyncConfig, SyncReport};
use crate::utils::utils::ProgressManager;

pub const ICON_DIR_NAME: &str = "icon";

/// 同步服務：把資源目錄樹中目的地缺少的檔案複製到 `<目的地>/icon/<相對路徑>`
pub struct SyncService;

impl SyncService {
    pub fn new() -> Self {
        SyncService
    }

    pub fn sync_files(&self, config: &SyncConfig) -> io::Result<SyncReport> {
        let resource_dir = &config.resource_dir;
        if !resource_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("資源目錄 '{}' 不存在", resource_dir.display()),
            ));
        }

        let icon_dir = config.destination_dir.join(ICON_DIR_NAME);
        if !icon_dir.exists() {
            if config.test_mode {
                println!("測試模式：將建立目錄 {}", icon_dir.display());
            } else {
                fs::create_dir_all(&icon_dir)?;
                println!("已建立目錄：{}", icon_dir.display());
            }
        }

        let pm = ProgressManager::new(0, config.no_progress);
        let mut report = SyncReport::default();
        let walker = WalkDir::new(resource_dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("無法讀取資源項目：{}", e);
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| resource_dir.clone());
                    report.record(path.clone(), path, SyncAction::Failed(e.to_string()));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            let source = entry.path();
            let relative = diff_paths(source, resource_dir)
                .unwrap_or_else(|| entry.file_name().into());
            let destination = icon_dir.join(&relative);

            let action = if destination.exists() {
                pm.println(format!("跳過：{}（目的地已存在）", source.display()));
                SyncAction::Skipped
            } else if config.test_mode {
                pm.println(format!("測試模式：將複製 {} -> {}", source.display(), destination.display()));
                SyncAction::WouldCopy
            } else {
                match copy_preserving_mtime(source, &destination) {
                    Ok(()) => {
                        pm.println(format!("已複製：{} -> {}", source.display(), destination.display()));
                        SyncAction::Copied
                    }
                    Err(e) => {
                        warn!("複製 {} 失敗: {}", source.display(), e);
                        SyncAction::Failed(e.to_string())
                    }
                }
            };
            report.record(source.to_path_buf(), destination, action);
            pm.update(report.entries.len() as u64, "同步中");
        }

        pm.finish(format!(
            "完成，複製 {}，跳過 {}，失敗 {}",
            report.summary.copied, report.summary.skipped, report.summary.failed
        ));
        info!("同步完成：{:?}", report.summary);
        Ok(report)
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new()
    }
}

/// 複製檔案並保留修改時間，必要時建立上層目錄
pub fn copy_preserving_mtime(source: &Path, destination: &Path) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, destination)?;
    let modified = fs::metadata(source)?.modified()?;
    let file = OpenOptions::new().write(true).open(destination)?;
    file.set_modified(modified)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copy_keeps_modification_time() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.png");
        fs::write(&source, b"png").unwrap();
        let destination = dir.path().join("out").join("nested").join("a.png");

        copy_preserving_mtime(&source, &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"png");
        assert_eq!(
            fs::metadata(&source).unwrap().modified().unwrap(),
            fs::metadata(&destination).unwrap().modified().unwrap()
        );
    }
}
