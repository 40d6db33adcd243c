//! words.js 解析
//!
//! 词表以脚本形式保存（如 `const WORDS = [\n  "kot",\n  "pies",\n];`），
//! 取第一个 `[` 到最后一个 `]` 之间的内容，去掉末尾多余的逗号后按 JSON 字符串数组解析。

use std::path::Path;

use crate::core::{PickerError, WordCatalog};

pub fn parse_catalog(source: &str, path: &Path) -> Result<WordCatalog, PickerError> {
    let malformed = |reason: &str| PickerError::MalformedCatalog {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let start = source.find('[').ok_or_else(|| malformed("no opening '['"))?;
    let end = source.rfind(']').ok_or_else(|| malformed("no closing ']'"))?;
    if end < start {
        return Err(malformed("closing ']' before opening '['"));
    }

    let body = source[start + 1..end].trim_end();
    let body = body.strip_suffix(',').unwrap_or(body);
    let words: Vec<String> = serde_json::from_str(&format!("[{}]", body))
        .map_err(|e| PickerError::json(path, e))?;
    Ok(WordCatalog::new(words))
}

pub fn load_catalog(path: &Path) -> Result<WordCatalog, PickerError> {
    let source = std::fs::read_to_string(path).map_err(|e| PickerError::io(path, e))?;
    let catalog = parse_catalog(&source, path)?;
    tracing::info!("Loaded {} words from {}", catalog.len(), path.display());
    Ok(catalog)
}
