use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::ConversionError;
use crate::models::file::{FileCollectInput, FileCollectOutput, FilterSpec};
use crate::service::traits::i_service::FileServiceTrait;

/// File 服務，負責批次模式的檔案挑選並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn select_batch_inputs(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConversionError> {
        let files = collect_files(&input.directory, &input.filters)?;
        let total_size = files
            .iter()
            .filter_map(|path| fs::metadata(path).ok())
            .map(|meta| meta.len() as usize)
            .sum();
        Ok(FileCollectOutput { files, total_size })
    }
}

pub fn read_file_content(file_path: &Path) -> io::Result<(Vec<u8>, usize)> {
    let mut file = File::open(file_path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let file_size = buffer.len();
    Ok((buffer, file_size))
}

pub fn write_file_content(file_path: &Path, data: &[u8]) -> io::Result<()> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// 目錄中直接的一般檔案，且檔名符合任一過濾模式；結果依檔名排序
pub fn collect_files(directory: &Path, filters: &FilterSpec) -> Result<Vec<PathBuf>, ConversionError> {
    if !directory.is_dir() {
        return Err(ConversionError::NotFound {
            path: directory.to_path_buf(),
        });
    }

    let entries = fs::read_dir(directory).map_err(|e| ConversionError::failure(directory, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConversionError::failure(directory, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if filters.is_match(&file_name.to_string_lossy()) {
            files.push(path);
        } else {
            debug!("略過不符合過濾條件的檔案：{}", path.display());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
