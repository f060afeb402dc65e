//! Append-only JSON-lines log of significant transitions.
//!
//! Records are derived by comparing consecutive states and handed to a tokio
//! task that owns the file. A failing write stops the writer; the game never
//! waits on it.

use std::path::PathBuf;

use arrayvec::ArrayVec;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::State;
use crate::types::GameAction;

/// One log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    Lock {
        episode: u32,
        action: &'static str,
        piece: &'static str,
        rows_cleared: u32,
        points: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        episode: u32,
        score: u32,
        high_score: u32,
    },
    Reset {
        episode: u32,
        high_score: u32,
    },
}

impl EventRecord {
    /// Records for the transition `prev --action--> next`, in order.
    pub fn between(prev: &State, next: &State, action: GameAction) -> ArrayVec<EventRecord, 2> {
        let mut out = ArrayVec::new();

        if next.episode != prev.episode {
            out.push(EventRecord::Reset {
                episode: next.episode,
                high_score: next.high_score,
            });
            return out;
        }

        if next.pieces_locked != prev.pieces_locked {
            if let Some(lock) = next.last_lock {
                out.push(EventRecord::Lock {
                    episode: next.episode,
                    action: action.as_str(),
                    piece: lock.kind.as_str(),
                    rows_cleared: lock.rows_cleared,
                    points: lock.points,
                    score: next.score,
                    level: next.level,
                });
            }
        }

        if next.game_end && !prev.game_end {
            out.push(EventRecord::GameOver {
                episode: next.episode,
                score: next.score,
                high_score: next.high_score.max(next.score),
            });
        }

        out
    }
}

/// Handle to the background writer task.
pub struct EventLog {
    tx: mpsc::UnboundedSender<EventRecord>,
    task: JoinHandle<()>,
}

impl EventLog {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, mut rx) = mpsc::unbounded_channel::<EventRecord>();

        let task = tokio::spawn(async move {
            let mut file = match OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
            {
                Ok(f) => f,
                Err(_) => return,
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });

        Self { tx, task }
    }

    pub fn record(&self, rec: EventRecord) {
        let _ = self.tx.send(rec);
    }

    /// Close the channel and wait until every queued record is written.
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}
