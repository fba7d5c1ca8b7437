use crate::error::ConversionError;
use crate::models::conversion::ConversionRequest;
use crate::models::file::{FileCollectInput, FileCollectOutput};

// File 服務接口，負責批次模式的檔案挑選
pub trait FileServiceTrait: Send + Sync {
    /// 列出目錄中（不遞迴）符合過濾條件的一般檔案
    /// # 參數
    /// - input: 目錄與過濾條件
    /// # 回傳
    /// - 依檔名排序的檔案列表與總大小；目錄不存在時回傳 NotFound
    fn select_batch_inputs(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConversionError>;
}

// 轉碼服務接口，負責單一檔案的解碼與重新編碼
pub trait TranscodeServiceTrait: Send + Sync {
    /// 以來源編碼讀取輸入檔，並以目標編碼寫入輸出檔
    /// # 回傳
    /// - 成功時返回寫入的位元組數
    fn convert_one(&self, request: &ConversionRequest) -> Result<usize, ConversionError>;
}
