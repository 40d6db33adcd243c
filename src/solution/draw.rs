//! 抽题：从 pool 随机取出一个下标，追加为 solution.json 的新题
//!
//! 新题的过期日 = 当前 UTC 时间加 lead_hours 后的日期，后附时区标签（如 `2024-05-07 GMT+1`）。
//! 提前量保证在目标时区的午夜前后运行都会落到「明天」。

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::SolutionSection;
use crate::core::PickerError;
use crate::store::{DataStore, RoundRecord};

pub fn expiration_label(now: DateTime<Utc>, lead_hours: i64, zone_label: &str) -> String {
    let target = now + Duration::hours(lead_hours);
    format!("{} {}", target.format("%Y-%m-%d"), zone_label)
}

/// 从 pool 中移除一个随机条目并追加到 solutions，返回抽中的下标
pub fn draw_solution<R: Rng>(
    pool: &mut Vec<usize>,
    solutions: &mut Vec<RoundRecord>,
    expiration: String,
    rng: &mut R,
) -> Result<usize, PickerError> {
    if pool.is_empty() {
        return Err(PickerError::EmptyPool);
    }
    let index = pool.remove(rng.gen_range(0..pool.len()));
    solutions.push(RoundRecord::new(index, expiration));
    Ok(index)
}

pub fn run_draw<R: Rng>(
    store: &DataStore,
    settings: &SolutionSection,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<RoundRecord, PickerError> {
    let mut pool = store.load_pool()?;
    let mut solutions = store.load_solutions()?;

    let expiration = expiration_label(now, settings.lead_hours, &settings.zone_label);
    draw_solution(&mut pool, &mut solutions, expiration, rng)?;

    store.save_pool(&pool)?;
    store.save_solutions(&solutions)?;

    let drawn = solutions.last().cloned().unwrap_or_default();
    tracing::info!(
        "Drew word {:?} expiring {:?}, {} left in pool",
        drawn.index,
        drawn.expiration,
        pool.len()
    );
    Ok(drawn)
}
