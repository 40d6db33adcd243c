//! 会话主流程
//!
//! 读取数据文件 → 构建排除索引与候选序列 → 筛选循环 → 复核循环 → 一次性写回 pool 与 rejected。
//! 任一环节出错都在写回之前返回，磁盘上的文件保持原样。

use rand::Rng;

use crate::core::exclusion::{candidate_sequence, ExclusionIndex};
use crate::core::review::review_loop;
use crate::core::session::{Commit, TriageSession};
use crate::core::triage::{triage_loop, TriageEnd};
use crate::core::PickerError;
use crate::store::DataStore;
use crate::ui::Console;

/// 一次会话的结果
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub end: TriageEnd,
    pub commit: Commit,
    /// 实际写入 pool 的新增条数
    pub added: usize,
    /// dry-run 时为 false
    pub written: bool,
}

/// 数据目录的概况（不修改任何文件）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStatus {
    pub words: usize,
    pub excluded: usize,
    pub rejected: usize,
    pub pool: usize,
    pub candidates: usize,
}

/// 从数据目录构建会话；候选顺序由 rng 决定
pub fn open_session<R: Rng + ?Sized>(
    store: &DataStore,
    rng: &mut R,
) -> Result<TriageSession, PickerError> {
    let catalog = store.load_catalog()?;
    let history = store.load_history()?;
    let pool = store.load_pool()?;
    let solutions = store.load_solutions()?;
    let rejected = store.load_rejected()?;

    let exclusion = ExclusionIndex::build(&history, &pool, &solutions);
    let candidates = candidate_sequence(catalog.len(), &exclusion, &rejected, rng);
    tracing::info!(
        "{} candidates ({} excluded, {} rejected)",
        candidates.len(),
        exclusion.len(),
        rejected.len()
    );

    Ok(TriageSession::new(catalog, exclusion, pool, rejected, candidates))
}

pub fn run_session<C, R>(
    store: &DataStore,
    console: &mut C,
    rng: &mut R,
    dry_run: bool,
) -> Result<SessionOutcome, PickerError>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = open_session(store, rng)?;
    console.show(&format!("{} words to review", session.remaining()));

    let end = triage_loop(&mut session, console)?;
    review_loop(&mut session, console)?;

    let commit = session.commit();
    let added = commit.pool.len() - session.base_pool().len();

    if dry_run {
        tracing::info!("Dry run: {} additions not written", added);
    } else {
        store.save_pool(&commit.pool)?;
        store.save_rejected(&commit.rejected)?;
        tracing::info!(
            "Committed {} pool additions, {} rejected in total",
            added,
            commit.rejected.len()
        );
    }

    Ok(SessionOutcome {
        end,
        commit,
        added,
        written: !dry_run,
    })
}

pub fn catalog_status(store: &DataStore) -> Result<CatalogStatus, PickerError> {
    let catalog = store.load_catalog()?;
    let history = store.load_history()?;
    let pool = store.load_pool()?;
    let solutions = store.load_solutions()?;
    let rejected = store.load_rejected()?;

    let exclusion = ExclusionIndex::build(&history, &pool, &solutions);
    let candidates = (0..catalog.len())
        .filter(|i| !exclusion.contains(*i) && !rejected.contains(i))
        .count();

    Ok(CatalogStatus {
        words: catalog.len(),
        excluded: exclusion.len(),
        rejected: rejected.len(),
        pool: pool.len(),
        candidates,
    })
}
