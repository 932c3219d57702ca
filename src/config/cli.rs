use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// 本機檔案系統；相對路徑以 `base_path` 為根
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());

        let content = fs::read_to_string(full_path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("data.txt"), "COM)B\nB)C\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let lines = storage.read_lines("data.txt").unwrap();

        assert_eq!(lines, vec!["COM)B", "B)C"]);
    }

    #[test]
    fn test_blank_line_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("data.txt"), "COM)B\n\nB)C\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        assert_eq!(storage.read_lines("data.txt").unwrap(), vec!["COM)B", "", "B)C"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(matches!(
            storage.read_lines("nope.txt"),
            Err(crate::utils::error::OrbitError::IoError(_))
        ));
    }
}
