use crate::error::ConversionError;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調編碼轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行編碼轉換，依輸入對象選擇單檔或批次流程
    /// # 參數
    /// - input: 轉換所需的輸入參數
    /// # 回傳
    /// - 成功時返回每個檔案的結果；輸入不存在或無法建立輸出目錄時返回錯誤
    fn execute_conversion(&self, input: ConversionInput) -> Result<ConversionOutput, ConversionError>;
}
