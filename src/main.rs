//! Terminal Tetris runner (default binary).
//!
//! Keyboard input is read on a dedicated thread and forwarded as actions; the
//! driver merges them with the tick timer and every resulting state is drawn
//! through the framebuffer renderer.

use std::ops::ControlFlow;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;

use stream_tetris::core::State;
use stream_tetris::engine::{Driver, EngineConfig};
use stream_tetris::input::spawn_reader;
use stream_tetris::term::{FrameBuffer, GameView, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    let driver = Driver::new(EngineConfig::from_env());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&driver, &mut term).await;

    // Always try to restore terminal state.
    let _ = term.exit();

    let state = result?;
    println!(
        "score {}  high {}  level {}  rows {}",
        state.score,
        state.high_score.max(state.score),
        state.level,
        state.rows_cleared
    );
    Ok(())
}

async fn run(driver: &Driver, term: &mut TerminalRenderer) -> Result<State> {
    let (tx, rx) = mpsc::unbounded_channel();
    let reader = spawn_reader(tx);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let state = driver
        .run(driver.initial_state(), rx, |state| {
            let viewport = term.viewport()?;
            view.render_into(state, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            Ok(ControlFlow::Continue(()))
        })
        .await?;

    // The action stream only closes once the reader has returned.
    reader
        .join()
        .map_err(|_| anyhow!("input thread panicked"))??;

    Ok(state)
}
