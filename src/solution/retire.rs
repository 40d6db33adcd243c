//! 归档：solution.json 只保留过期日最晚的一题，其余追加到 history.json
//!
//! 正常情况下每天运行时 solution.json 中有两题（昨天的与刚抽出的）。
//! 过期日相同时取靠后的一条；无法解析的过期日不参与比较；全部无法解析时保留第一条。

use chrono::{NaiveDate, NaiveTime};

use crate::core::PickerError;
use crate::store::{DataStore, RoundRecord};

/// 解析 `YYYY-MM-DD [GMT|UTC][+-H]`，返回 UTC 秒数
pub fn parse_expiration(text: &str) -> Option<i64> {
    let text = text.trim();
    let (date, zone) = match text.split_once(' ') {
        Some((date, zone)) => (date, zone.trim()),
        None => (text, ""),
    };
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let offset_hours = parse_zone(zone)?;
    let midnight = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    Some(midnight - offset_hours * 3600)
}

fn parse_zone(zone: &str) -> Option<i64> {
    let rest = zone
        .strip_prefix("GMT")
        .or_else(|| zone.strip_prefix("UTC"))
        .unwrap_or(zone);
    if rest.is_empty() {
        return Some(0);
    }
    let (sign, digits) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    digits.parse::<i64>().ok().map(|h| sign * h)
}

/// 过期日最晚的那一题的位置
pub fn latest_position(solutions: &[RoundRecord]) -> usize {
    let mut latest = 0;
    let mut latest_at: Option<i64> = None;
    for (pos, record) in solutions.iter().enumerate() {
        let Some(at) = record.expiration.as_deref().and_then(parse_expiration) else {
            continue;
        };
        if latest_at.map_or(true, |best| at >= best) {
            latest = pos;
            latest_at = Some(at);
        }
    }
    latest
}

/// 返回保留下来的题目列表；被归档的题目按原顺序追加到 history
pub fn retire_solutions(
    solutions: Vec<RoundRecord>,
    history: &mut Vec<RoundRecord>,
) -> Vec<RoundRecord> {
    if solutions.is_empty() {
        return solutions;
    }
    let keep = latest_position(&solutions);
    let mut kept = Vec::with_capacity(1);
    for (pos, record) in solutions.into_iter().enumerate() {
        if pos == keep {
            kept.push(record);
        } else {
            history.push(record);
        }
    }
    kept
}

/// 返回归档的题目数
pub fn run_retire(store: &DataStore) -> Result<usize, PickerError> {
    let solutions = store.load_solutions()?;
    if solutions.is_empty() {
        tracing::warn!("No solutions to retire");
        return Ok(0);
    }
    let mut history = store.load_history()?;
    let before = solutions.len();

    let kept = retire_solutions(solutions, &mut history);
    store.save_history(&history)?;
    store.save_solutions(&kept)?;

    let retired = before - kept.len();
    tracing::info!("Retired {} solutions, history now {}", retired, history.len());
    Ok(retired)
}
