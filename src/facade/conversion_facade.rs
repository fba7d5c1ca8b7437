use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{error, info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConversionError;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{
    BatchReport, ConversionInput, ConversionOutcome, ConversionOutput, ConversionRequest, InputTarget,
    SkipReason,
};
use crate::models::file::{FileCollectInput, FilterSpec};
use crate::service::file::FileService;
use crate::service::traits::i_service::{FileServiceTrait, TranscodeServiceTrait};
use crate::service::transcode::TranscodeService;
use crate::utils::path::{default_batch_output_dir, derive_output_path, is_same_path};
use crate::utils::utils::{create_progress_bar, format_file_size, ProgressManager};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    transcode_service: Box<dyn TranscodeServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        transcode_service: Box<dyn TranscodeServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            transcode_service,
        }
    }
}

impl Default for ConversionFacade {
    fn default() -> Self {
        ConversionFacade::new(Box::new(FileService::new()), Box::new(TranscodeService::new()))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> Result<ConversionOutput, ConversionError> {
        match &input.target {
            InputTarget::File(path) => self.process_single(path, &input),
            InputTarget::Directory(dir) => self.process_batch(dir, &input),
        }
    }
}

impl ConversionFacade {
    /// 批次轉換：先建立輸出目錄（失敗即中止），之後逐檔處理，任何單檔結果都不會中斷後續檔案
    pub fn run_batch(
        &self,
        inputs: &[PathBuf],
        source_encoding: &str,
        target_encoding: &str,
        output_base_dir: &Path,
        overwrite: bool,
        no_progress: bool,
    ) -> Result<BatchReport, ConversionError> {
        fs::create_dir_all(output_base_dir).map_err(|source| ConversionError::OutputDirectory {
            path: output_base_dir.to_path_buf(),
            source,
        })?;
        info!("輸出目錄已就緒：{}", output_base_dir.display());

        let total_files = inputs.len();
        let pm = create_progress_bar(total_files as u64, no_progress);
        let mut report = BatchReport::default();
        for (index, input_path) in inputs.iter().enumerate() {
            let output_path = derive_output_path(input_path, target_encoding, None, true, Some(output_base_dir));
            let request = ConversionRequest {
                input_path: input_path.clone(),
                output_path: output_path.clone(),
                source_encoding: source_encoding.to_string(),
                target_encoding: target_encoding.to_string(),
            };
            let outcome = self.convert_guarded(&request, overwrite, &pm);
            report.record(input_path.clone(), output_path, outcome);
            pm.update((index + 1) as u64, &format!("處理檔案 {}/{}", index + 1, total_files));
        }
        pm.finish(format!(
            "處理完成：轉換 {}，跳過 {}，失敗 {}",
            report.summary.converted, report.summary.skipped, report.summary.failed
        ));
        Ok(report)
    }

    fn process_single(&self, input_path: &Path, input: &ConversionInput) -> Result<ConversionOutput, ConversionError> {
        if !input_path.is_file() {
            error!("輸入檔案不存在或不是檔案：{}", input_path.display());
            return Err(ConversionError::NotFound {
                path: input_path.to_path_buf(),
            });
        }

        let output_path = derive_output_path(
            input_path,
            &input.target_encoding,
            input.output.as_deref(),
            false,
            None,
        );
        info!("開始單檔轉換，輸入：{}，輸出：{}", input_path.display(), output_path.display());

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConversionError::OutputDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let pm = create_progress_bar(1, input.no_progress);
        let request = ConversionRequest {
            input_path: input_path.to_path_buf(),
            output_path: output_path.clone(),
            source_encoding: input.source_encoding.clone(),
            target_encoding: input.target_encoding.clone(),
        };
        let outcome = self.convert_guarded(&request, input.overwrite, &pm);
        pm.update(1, "處理檔案 1/1");
        pm.finish("處理完成".to_string());

        let mut report = BatchReport::default();
        report.record(input_path.to_path_buf(), output_path.clone(), outcome);
        Ok(ConversionOutput { output_path, report })
    }

    fn process_batch(&self, input_dir: &Path, input: &ConversionInput) -> Result<ConversionOutput, ConversionError> {
        let filters = FilterSpec::new(&input.filters)?;
        let output_base_dir = input
            .output
            .clone()
            .unwrap_or_else(|| default_batch_output_dir(input_dir, &input.target_encoding));
        info!(
            "開始批次轉換，輸入目錄：{}，輸出目錄：{}，過濾模式：{}",
            input_dir.display(),
            output_base_dir.display(),
            filters.patterns().join(", ")
        );

        let selection = self.file_service.select_batch_inputs(FileCollectInput {
            directory: input_dir.to_path_buf(),
            filters,
        })?;

        if selection.files.is_empty() {
            warn!("目錄 '{}' 中沒有符合過濾條件的檔案", input_dir.display());
            return Ok(ConversionOutput {
                output_path: output_base_dir,
                report: BatchReport::default(),
            });
        }
        info!(
            "正在處理 {} 個檔案，總大小：{}",
            selection.files.len(),
            format_file_size(selection.total_size)
        );

        let report = self.run_batch(
            &selection.files,
            &input.source_encoding,
            &input.target_encoding,
            &output_base_dir,
            input.overwrite,
            input.no_progress,
        )?;
        Ok(ConversionOutput {
            output_path: output_base_dir,
            report,
        })
    }

    /// 覆寫保護 → 已存在檢查 → 轉碼；錯誤轉為 Failed 結果
    fn convert_guarded(&self, request: &ConversionRequest, overwrite: bool, pm: &ProgressManager) -> ConversionOutcome {
        let file_name = display_name(&request.input_path);
        pm.println(format!("處理 '{}'...", file_name));

        if is_same_path(&request.input_path, &request.output_path) {
            let reason = SkipReason::WouldOverwriteInput;
            warn!("跳過 {}：{}", request.input_path.display(), reason);
            pm.println(format!("  跳過：'{}' {}", request.output_path.display(), reason));
            return ConversionOutcome::Skipped(reason);
        }
        if !overwrite && request.output_path.exists() {
            let reason = SkipReason::OutputExists;
            info!("跳過 {}：{}", request.input_path.display(), reason);
            pm.println(format!("  跳過：'{}' {}", request.output_path.display(), reason));
            return ConversionOutcome::Skipped(reason);
        }

        match self.transcode_service.convert_one(request) {
            Ok(bytes_written) => {
                info!(
                    "轉換完成：{} → {}（{}）",
                    request.input_path.display(),
                    request.output_path.display(),
                    format_file_size(bytes_written)
                );
                pm.println(format!("  成功轉換為 '{}'", display_name(&request.output_path)));
                ConversionOutcome::Converted
            }
            Err(e) => {
                error!("處理檔案 {} 失敗: {}", request.input_path.display(), e);
                pm.println(format!("  失敗：{}", e));
                ConversionOutcome::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 執行轉換的 ConversionPort 實作，將 AppConfig 交給 ConversionFacade
pub struct ConversionAdapter {
    facade: Box<dyn ConversionFacadeTrait>,
}

impl ConversionAdapter {
    pub fn new(facade: Box<dyn ConversionFacadeTrait>) -> Self {
        ConversionAdapter { facade }
    }
}

impl Default for ConversionAdapter {
    fn default() -> Self {
        ConversionAdapter::new(Box::new(ConversionFacade::default()))
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let output = self.facade.execute_conversion(config.into_conversion_input())?;
        Ok(output)
    }
}
