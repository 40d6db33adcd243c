//! 会话全流程集成测试：临时数据目录 + 脚本控制台

use std::collections::BTreeSet;
use std::path::Path;

use picker::core::{
    candidate_sequence, catalog_status, run_session, ExclusionIndex, PickerError, TriageEnd,
};
use picker::solution::{run_draw, run_retire};
use picker::store::{DataStore, RoundRecord};
use picker::ui::ScriptedConsole;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

const WORDS_JS: &str = "const WORDS = [\n  \"cat\",\n  \"dog\",\n  \"emu\",\n  \"yak\",\n];\n";

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

fn read_ints(dir: &Path, name: &str) -> Vec<usize> {
    serde_json::from_str(&read(dir, name)).unwrap()
}

/// yak (3) 已在 pool 中，其余三个词为候选
fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "words.js", WORDS_JS);
    write(dir.path(), "history.json", "[]");
    write(dir.path(), "pool.json", "[\n  3\n]");
    write(dir.path(), "solution.json", "[]");
    write(dir.path(), "rejected.json", "[]");
    dir
}

/// 找一个让候选顺序恰好为 cat, dog, emu 的种子
fn in_order_seed() -> u64 {
    let exclusion: ExclusionIndex = [3].into_iter().collect();
    (0..10_000)
        .find(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            candidate_sequence(4, &exclusion, &BTreeSet::new(), &mut rng) == vec![0, 1, 2]
        })
        .expect("some seed yields identity order")
}

fn run(dir: &Path, inputs: &[&str], dry_run: bool) -> Result<picker::SessionOutcome, PickerError> {
    let store = DataStore::in_dir(dir);
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let mut rng = StdRng::seed_from_u64(in_order_seed());
    run_session(&store, &mut console, &mut rng, dry_run)
}

#[test]
fn test_accept_reject_quit_scenario() {
    let dir = setup();
    let outcome = run(dir.path(), &["a", "", "q", ""], false).unwrap();

    assert_eq!(outcome.end, TriageEnd::Quit);
    assert_eq!(outcome.added, 1);
    assert_eq!(read_ints(dir.path(), "pool.json"), vec![3, 0]);
    assert_eq!(read_ints(dir.path(), "rejected.json"), vec![1]);
}

#[test]
fn test_back_then_reject_scenario() {
    let dir = setup();
    run(dir.path(), &["a", "r", "", "q", ""], false).unwrap();

    assert_eq!(read_ints(dir.path(), "pool.json"), vec![3]);
    assert_eq!(read_ints(dir.path(), "rejected.json"), vec![0]);
}

#[test]
fn test_zero_decisions_round_trip() {
    let dir = setup();
    write(dir.path(), "rejected.json", "[\n  2,\n  1\n]");
    let pool_before = read(dir.path(), "pool.json");

    run(dir.path(), &["q", ""], false).unwrap();

    assert_eq!(read(dir.path(), "pool.json"), pool_before);
    assert_eq!(read(dir.path(), "rejected.json"), "[\n  1,\n  2\n]");
}

#[test]
fn test_review_retract_and_amend() {
    let dir = setup();
    // accept all three, retract dog, re-add emu by name
    run(dir.path(), &["a", "a", "a", "1", "emu", ""], false).unwrap();

    assert_eq!(read_ints(dir.path(), "pool.json"), vec![3, 0, 2, 2]);
    assert_eq!(read_ints(dir.path(), "rejected.json"), vec![1]);
}

#[test]
fn test_injection_of_used_word_is_refused() {
    let dir = setup();
    let store = DataStore::in_dir(dir.path());
    let mut console = ScriptedConsole::new(["c yak", "c emu", "a", "q", ""]);
    let mut rng = StdRng::seed_from_u64(in_order_seed());
    run_session(&store, &mut console, &mut rng, false).unwrap();

    assert!(console.saw("'yak' was already used"));
    assert!(console.saw("+ emu"));
    // emu injected, cat accepted, then quit on dog
    assert_eq!(read_ints(dir.path(), "pool.json"), vec![3, 2, 0]);
    assert!(read_ints(dir.path(), "rejected.json").is_empty());
}

#[test]
fn test_out_of_range_amendment_writes_nothing() {
    let dir = setup();
    let pool_before = read(dir.path(), "pool.json");
    let rejected_before = read(dir.path(), "rejected.json");

    let err = run(dir.path(), &["a", "", "q", "7"], false).unwrap_err();
    assert!(matches!(err, PickerError::AmendmentOutOfRange { position: 7, len: 1 }));
    assert_eq!(read(dir.path(), "pool.json"), pool_before);
    assert_eq!(read(dir.path(), "rejected.json"), rejected_before);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = setup();
    let outcome = run(dir.path(), &["a", "a", "a", ""], true).unwrap();

    assert!(!outcome.written);
    assert_eq!(outcome.commit.pool, vec![3, 0, 1, 2]);
    assert_eq!(read_ints(dir.path(), "pool.json"), vec![3]);
}

#[test]
fn test_missing_source_aborts_before_triage() {
    let dir = setup();
    std::fs::remove_file(dir.path().join("history.json")).unwrap();
    let err = run(dir.path(), &["a"], false).unwrap_err();
    assert!(matches!(err, PickerError::Io { .. }));
}

#[test]
fn test_status_counts() {
    let dir = setup();
    write(
        dir.path(),
        "history.json",
        r#"[{"index": 0, "expiration": "2024-01-01 GMT+1"}, {"note": "no index"}]"#,
    );
    write(dir.path(), "rejected.json", "[1]");

    let status = catalog_status(&DataStore::in_dir(dir.path())).unwrap();
    assert_eq!(status.words, 4);
    assert_eq!(status.excluded, 2);
    assert_eq!(status.rejected, 1);
    assert_eq!(status.pool, 1);
    assert_eq!(status.candidates, 1);
}

#[test]
fn test_draw_then_retire() {
    use chrono::TimeZone;

    let dir = setup();
    write(
        dir.path(),
        "solution.json",
        r#"[{"index": 1, "expiration": "2024-05-06 GMT+1", "id": 41}]"#,
    );
    let store = DataStore::in_dir(dir.path());
    let settings = picker::config::SolutionSection::default();
    let now = chrono::Utc.with_ymd_and_hms(2024, 5, 6, 20, 0, 0).unwrap();

    let drawn = run_draw(&store, &settings, now, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(drawn, RoundRecord::new(3, "2024-05-07 GMT+1"));
    assert!(read_ints(dir.path(), "pool.json").is_empty());

    assert_eq!(run_retire(&store).unwrap(), 1);
    let solutions: Vec<RoundRecord> = serde_json::from_str(&read(dir.path(), "solution.json")).unwrap();
    assert_eq!(solutions, vec![RoundRecord::new(3, "2024-05-07 GMT+1")]);

    let history: Vec<serde_json::Value> = serde_json::from_str(&read(dir.path(), "history.json")).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["index"], 1);
    assert_eq!(history[0]["id"], 41);
}
