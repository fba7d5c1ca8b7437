use log::debug;
use crate::error::ConversionError;
use crate::models::conversion::ConversionRequest;
use crate::service::codec::Codec;
use crate::service::file::{read_file_content, write_file_content};
use crate::service::traits::i_service::TranscodeServiceTrait;

/// 轉碼服務，實現 TranscodeServiceTrait
pub struct TranscodeService;

impl TranscodeService {
    pub fn new() -> Self {
        TranscodeService
    }
}

impl Default for TranscodeService {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscodeServiceTrait for TranscodeService {
    fn convert_one(&self, request: &ConversionRequest) -> Result<usize, ConversionError> {
        convert_one(request)
    }
}

/// 讀取整個輸入檔、解碼後以目標編碼寫出。輸入檔不會被修改；
/// 寫入中途失敗時輸出檔保留當下狀態。
pub fn convert_one(request: &ConversionRequest) -> Result<usize, ConversionError> {
    let input_path = &request.input_path;
    if !input_path.is_file() {
        return Err(ConversionError::NotFound {
            path: input_path.clone(),
        });
    }

    let source = Codec::for_label(&request.source_encoding)?;
    let target = Codec::for_label(&request.target_encoding)?;

    let (data, file_size) =
        read_file_content(input_path).map_err(|e| ConversionError::failure(input_path, e))?;
    debug!("讀取檔案：{}，原始大小：{} 位元組", input_path.display(), file_size);

    let text = source.decode(&data).ok_or_else(|| ConversionError::Encoding {
        message: format!(
            "以 '{}' 解碼 '{}' 失敗：含有無效的位元組序列",
            request.source_encoding,
            input_path.display()
        ),
    })?;

    let encoded = target.encode(&text).map_err(|c| ConversionError::Encoding {
        message: format!(
            "無法以 '{}' 編碼 '{}'：字元 {:?} (U+{:04X}) 無法表示",
            request.target_encoding,
            input_path.display(),
            c,
            c as u32
        ),
    })?;

    write_file_content(&request.output_path, &encoded)
        .map_err(|e| ConversionError::failure(input_path, e))?;
    debug!(
        "寫入檔案：{}（{} → {}），大小：{} 位元組",
        request.output_path.display(),
        source.name(),
        target.name(),
        encoded.len()
    );
    Ok(encoded.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn request(dir: &Path, input: &str, output: &str, source: &str, target: &str) -> ConversionRequest {
        ConversionRequest {
            input_path: dir.join(input),
            output_path: dir.join(output),
            source_encoding: source.to_string(),
            target_encoding: target.to_string(),
        }
    }

    #[test]
    fn converts_gbk_to_utf8() {
        let dir = TempDir::new().unwrap();
        let (gbk, _, _) = encoding_rs::GBK.encode("歌詞 lyrics");
        fs::write(dir.path().join("in.lrc"), &gbk).unwrap();

        let written = convert_one(&request(dir.path(), "in.lrc", "out.lrc", "gbk", "utf-8")).unwrap();

        let out = fs::read(dir.path().join("out.lrc")).unwrap();
        assert_eq!(out, "歌詞 lyrics".as_bytes());
        assert_eq!(written, out.len());
        assert_eq!(fs::read(dir.path().join("in.lrc")).unwrap(), &gbk[..]);
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = convert_one(&request(dir.path(), "none.txt", "out.txt", "gbk", "utf-8")).unwrap_err();
        assert!(matches!(err, ConversionError::NotFound { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn undecodable_bytes_are_an_encoding_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.txt"), [0xFFu8, 0xFE, 0xFD]).unwrap();
        let err = convert_one(&request(dir.path(), "in.txt", "out.txt", "utf-8", "gbk")).unwrap_err();
        assert!(matches!(err, ConversionError::Encoding { .. }));
    }

    #[test]
    fn ascii_source_rejects_non_ascii_bytes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.txt"), [0x63u8, 0x61, 0x66, 0xE9]).unwrap();
        let err = convert_one(&request(dir.path(), "in.txt", "out.txt", "ascii", "utf-8")).unwrap_err();
        assert!(matches!(err, ConversionError::Encoding { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn utf16_source_with_big_endian_bom() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.txt"), [0xFEu8, 0xFF, 0x00, 0x41]).unwrap();
        convert_one(&request(dir.path(), "in.txt", "out.txt", "utf-16", "utf-8")).unwrap();
        assert_eq!(fs::read(dir.path().join("out.txt")).unwrap(), b"A");
    }

    #[test]
    fn unknown_target_codec_is_an_encoding_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.txt"), b"plain").unwrap();
        let err = convert_one(&request(dir.path(), "in.txt", "out.txt", "utf-8", "klingon")).unwrap_err();
        assert!(matches!(err, ConversionError::Encoding { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn write_failure_is_a_conversion_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.txt"), b"plain").unwrap();
        let req = ConversionRequest {
            output_path: dir.path().join("missing_dir").join("out.txt"),
            ..request(dir.path(), "in.txt", "unused", "utf-8", "gbk")
        };
        let err = convert_one(&req).unwrap_err();
        assert!(matches!(err, ConversionError::ConversionFailure { .. }));
    }
}
