use crate::utils::error::{OrbitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OrbitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OrbitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 分隔字元可以是任何可見字元、空白或 tab；換行等控制字元會破壞逐行切分
pub fn validate_delimiter(field_name: &str, delimiter: char) -> Result<()> {
    if delimiter.is_control() && delimiter != '\t' {
        return Err(OrbitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.escape_default().to_string(),
            reason: "Delimiter cannot be a control character other than tab".to_string(),
        });
    }
    Ok(())
}

/// 從設定字串取出單一字元的分隔符號
pub fn parse_delimiter(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(OrbitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter must be exactly one character".to_string(),
        }),
    }
}
