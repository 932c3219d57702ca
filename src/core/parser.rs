use crate::domain::model::OrbitPair;
use crate::utils::error::{OrbitError, Result};

pub const DEFAULT_DELIMITER: char = ')';

/// 把 `A)B` 形式的每一行轉成 [`OrbitPair`]。
///
/// 只做結構檢查：任何一行沒有分隔字元就整批失敗，不回傳部分結果。
/// 重複、自己環繞自己等語意問題不在這裡處理。
pub fn parse_orbit_pairs<I, S>(lines: I, delimiter: char) -> Result<Vec<OrbitPair>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = Vec::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let line = strip_line_ending(raw.as_ref());

        match line.split_once(delimiter) {
            Some((center, satellite)) => pairs.push(OrbitPair::new(center, satellite)),
            None => {
                tracing::debug!(
                    "Line {} has no '{}' delimiter, aborting parse",
                    index + 1,
                    delimiter
                );
                return Err(OrbitError::MalformedLine {
                    line_number: index + 1,
                    line: line.to_string(),
                    delimiter,
                });
            }
        }
    }

    Ok(pairs)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
