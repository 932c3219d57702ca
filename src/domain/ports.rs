use crate::utils::error::Result;

/// 讀取輸入資料的來源
pub trait Storage {
    /// 一次讀完整個檔案並切成行
    fn read_lines(&self, path: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn center(&self) -> &str;
    fn delimiter(&self) -> char;
    fn cycle_check(&self) -> bool;
}
