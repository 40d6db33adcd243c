//! 词表：有序、不可变，词以其下标（word index）标识
//!
//! 下标在多次运行之间保持稳定（词表顺序不变），所有持久化文件只记录下标。

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<String>,
    positions: HashMap<String, usize>,
}

impl WordCatalog {
    /// 重复词只记录第一次出现的位置
    pub fn new(words: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(words.len());
        for (i, w) in words.iter().enumerate() {
            positions.entry(w.clone()).or_insert(i);
        }
        Self { words, positions }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// 按文本精确查找下标
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }
}

impl<S: Into<String>> FromIterator<S> for WordCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
