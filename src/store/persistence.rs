//! 数据文件读写
//!
//! 所有 JSON 文件都是单个数组；写回时使用两空格缩进。任何文件缺失或格式错误都视为致命错误。

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DataSection;
use crate::core::{PickerError, WordCatalog};
use crate::store::words::load_catalog;
use crate::store::RoundRecord;

/// 数据目录下五个文件的访问入口
#[derive(Debug, Clone)]
pub struct DataStore {
    data: DataSection,
}

impl DataStore {
    pub fn new(data: DataSection) -> Self {
        Self { data }
    }

    /// 以目录为根、文件名全部取默认值
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DataSection {
            dir: dir.into(),
            ..DataSection::default()
        })
    }

    pub fn load_catalog(&self) -> Result<WordCatalog, PickerError> {
        load_catalog(&self.data.words_path())
    }

    pub fn load_history(&self) -> Result<Vec<RoundRecord>, PickerError> {
        read_json(&self.data.history_path())
    }

    pub fn load_solutions(&self) -> Result<Vec<RoundRecord>, PickerError> {
        read_json(&self.data.solution_path())
    }

    pub fn load_pool(&self) -> Result<Vec<usize>, PickerError> {
        read_json(&self.data.pool_path())
    }

    pub fn load_rejected(&self) -> Result<BTreeSet<usize>, PickerError> {
        let list: Vec<usize> = read_json(&self.data.rejected_path())?;
        Ok(list.into_iter().collect())
    }

    pub fn save_history(&self, history: &[RoundRecord]) -> Result<(), PickerError> {
        write_json(&self.data.history_path(), history)
    }

    pub fn save_solutions(&self, solutions: &[RoundRecord]) -> Result<(), PickerError> {
        write_json(&self.data.solution_path(), solutions)
    }

    pub fn save_pool(&self, pool: &[usize]) -> Result<(), PickerError> {
        write_json(&self.data.pool_path(), pool)
    }

    /// 写入前排序，保证输出与集合顺序无关
    pub fn save_rejected(&self, rejected: &[usize]) -> Result<(), PickerError> {
        let mut sorted = rejected.to_vec();
        sorted.sort_unstable();
        write_json(&self.data.rejected_path(), &sorted)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PickerError> {
    let data = std::fs::read_to_string(path).map_err(|e| PickerError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| PickerError::json(path, e))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PickerError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PickerError::io(parent, e))?;
    }
    let data = serde_json::to_string_pretty(value).map_err(|e| PickerError::json(path, e))?;
    std::fs::write(path, data).map_err(|e| PickerError::io(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
