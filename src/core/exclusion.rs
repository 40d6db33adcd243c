//! 排除索引与候选序列
//!
//! 排除索引 = history ∪ pool ∪ solution 中出现过的下标，启动时构建一次，之后只读。
//! 候选序列 = 全部下标去掉排除索引与已拒绝集合，再均匀洗牌一次。

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::store::RoundRecord;

#[derive(Debug, Clone, Default)]
pub struct ExclusionIndex {
    indices: HashSet<usize>,
}

impl ExclusionIndex {
    /// 合并三个来源；history / solution 中缺少 index 的记录忽略
    pub fn build(history: &[RoundRecord], pool: &[usize], solutions: &[RoundRecord]) -> Self {
        let indices = history
            .iter()
            .chain(solutions)
            .filter_map(|r| r.index)
            .chain(pool.iter().copied())
            .collect();
        Self { indices }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromIterator<usize> for ExclusionIndex {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// 本次会话要过目的候选下标，已随机打乱
pub fn candidate_sequence<R: Rng + ?Sized>(
    catalog_len: usize,
    exclusion: &ExclusionIndex,
    rejected: &BTreeSet<usize>,
    rng: &mut R,
) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..catalog_len)
        .filter(|i| !exclusion.contains(*i) && !rejected.contains(i))
        .collect();
    candidates.shuffle(rng);
    candidates
}
