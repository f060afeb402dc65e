//! Event log tests - records written by the driver end up as JSON lines.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use stream_tetris::core::State;
use stream_tetris::engine::{Driver, EngineConfig, EventLog, EventRecord};
use stream_tetris::types::GameAction;
use tokio::sync::mpsc;

fn temp_log_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!(
        "stream-tetris-{}-{}-{}.jsonl",
        name,
        std::process::id(),
        nanos
    ))
}

fn read_lines(path: &PathBuf) -> Vec<Value> {
    let text = std::fs::read_to_string(path).unwrap();
    text.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn log_writes_one_line_per_record() {
    let path = temp_log_path("records");
    let log = EventLog::spawn(&path);
    log.record(EventRecord::Reset {
        episode: 1,
        high_score: 40,
    });
    log.record(EventRecord::GameOver {
        episode: 1,
        score: 80,
        high_score: 80,
    });
    log.close().await;

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "reset");
    assert_eq!(lines[0]["high_score"], 40);
    assert_eq!(lines[1]["event"], "game_over");
    assert_eq!(lines[1]["score"], 80);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn driver_logs_each_lock() {
    let path = temp_log_path("driver");
    let config = EngineConfig {
        log_path: Some(path.to_string_lossy().into_owned()),
        ..EngineConfig::default()
    };

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(GameAction::HardDrop).unwrap();
    tx.send(GameAction::Rotate).unwrap();
    tx.send(GameAction::HardDrop).unwrap();
    drop(tx);

    let start = State::new(4242);
    let first_kind = start.current.kind();
    let last = Driver::new(config)
        .run(start, rx, |_| Ok(ControlFlow::Continue(())))
        .await
        .unwrap();
    assert_eq!(last.pieces_locked, 2);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line["event"], "lock");
        assert_eq!(line["action"], "hardDrop");
        assert_eq!(line["episode"], 0);
    }
    assert_eq!(lines[0]["piece"], first_kind.as_str());

    let _ = std::fs::remove_file(&path);
}
