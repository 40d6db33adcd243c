//! 筛选会话状态
//!
//! 一次运行只有一个会话：启动时由五个数据源构建，先后交给筛选循环与复核循环修改，结束时提交。
//! - `additions`：本次新增到 pool 的下标，按决定顺序排列，复核阶段可能出现重复
//! - `rejected`：拒绝集合，初值来自 rejected.json，会话中可增可减
//! - `available` + `cursor`：候选序列的工作副本与当前位置；插入待选中的词时会从中移除

use std::collections::BTreeSet;

use crate::core::catalog::WordCatalog;
use crate::core::error::{InjectRefusal, PickerError};
use crate::core::exclusion::ExclusionIndex;

#[derive(Debug, Clone)]
pub struct TriageSession {
    catalog: WordCatalog,
    exclusion: ExclusionIndex,
    base_pool: Vec<usize>,
    rejected: BTreeSet<usize>,
    additions: Vec<usize>,
    available: Vec<usize>,
    cursor: usize,
}

/// 提交结果：写回 pool.json 与 rejected.json 的完整内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub pool: Vec<usize>,
    pub rejected: Vec<usize>,
}

impl TriageSession {
    pub fn new(
        catalog: WordCatalog,
        exclusion: ExclusionIndex,
        base_pool: Vec<usize>,
        rejected: BTreeSet<usize>,
        candidates: Vec<usize>,
    ) -> Self {
        Self {
            catalog,
            exclusion,
            base_pool,
            rejected,
            additions: Vec::new(),
            available: candidates,
            cursor: 0,
        }
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// 会话开始时 pool.json 的内容
    pub fn base_pool(&self) -> &[usize] {
        &self.base_pool
    }

    pub fn additions(&self) -> &[usize] {
        &self.additions
    }

    pub fn rejected(&self) -> &BTreeSet<usize> {
        &self.rejected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 尚未过目的候选数（含当前）
    pub fn remaining(&self) -> usize {
        self.available.len().saturating_sub(self.cursor)
    }

    pub fn is_retracted(&self, index: usize) -> bool {
        self.rejected.contains(&index)
    }

    /// 当前候选；游标走到末尾时为 None
    pub fn current(&self) -> Option<usize> {
        self.available.get(self.cursor).copied()
    }

    /// 展示当前候选前调用：清除它之前的任何决定，使「回退」成为真正的撤销
    pub fn present(&mut self) -> Option<usize> {
        let index = self.current()?;
        self.additions.retain(|&i| i != index);
        self.rejected.remove(&index);
        Some(index)
    }

    pub fn accept(&mut self) {
        if let Some(index) = self.current() {
            self.additions.push(index);
            self.cursor += 1;
        }
    }

    pub fn reject(&mut self) {
        if let Some(index) = self.current() {
            self.rejected.insert(index);
            self.cursor += 1;
        }
    }

    /// 回退一格；已在开头时原地不动
    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 跳出顺序直接加入一个词。成功后游标仍指向原来展示的候选
    /// （若插入的正是当前候选，则指向下一个）。
    pub fn inject(&mut self, word: &str) -> Result<usize, InjectRefusal> {
        let index = self
            .catalog
            .index_of(word)
            .ok_or_else(|| InjectRefusal::UnknownWord(word.to_string()))?;
        if self.additions.contains(&index) {
            return Err(InjectRefusal::AlreadyAdded(word.to_string()));
        }
        if self.exclusion.contains(index) {
            return Err(InjectRefusal::AlreadyUsed(word.to_string()));
        }

        self.rejected.remove(&index);
        if let Some(pos) = self.available.iter().position(|&i| i == index) {
            self.available.remove(pos);
            if pos < self.cursor {
                self.cursor -= 1;
            }
        }
        self.additions.push(index);
        Ok(index)
    }

    /// 复核：按位置撤回一条新增（只标记为拒绝，列表本身不变）
    pub fn retract(&mut self, position: usize) -> Result<usize, PickerError> {
        let index = *self
            .additions
            .get(position)
            .ok_or_else(|| PickerError::AmendmentOutOfRange {
                position,
                len: self.additions.len(),
            })?;
        self.rejected.insert(index);
        Ok(index)
    }

    /// 复核：按词补加；已在列表中时会产生重复条目
    pub fn amend(&mut self, word: &str) -> Option<usize> {
        let index = self.catalog.index_of(word)?;
        self.rejected.remove(&index);
        self.additions.push(index);
        Some(index)
    }

    /// 拒绝优先：同时出现在新增与拒绝集合中的下标不写入 pool
    pub fn commit(&self) -> Commit {
        let mut pool = self.base_pool.clone();
        pool.extend(
            self.additions
                .iter()
                .copied()
                .filter(|i| !self.rejected.contains(i)),
        );
        Commit {
            pool,
            rejected: self.rejected.iter().copied().collect(),
        }
    }
}
