//! Slide Core Demo
//!
//! Loads a small level and plays a scripted sequence of moves, logging
//! the events a presentation layer would consume.

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use slide_core::{BlockId, Direction, Engine, EngineEvent, LevelData, VERSION};

const DEMO_LEVEL: &str = r#"{
    "MoveLimit": 5,
    "RowCount": 6,
    "ColCount": 6,
    "MovableInfo": [
        {"Row": 2, "Col": 0, "Direction": [1, 3], "Length": 2, "Colors": 0},
        {"Row": 0, "Col": 4, "Direction": [0, 2], "Length": 2, "Colors": 1}
    ],
    "ExitInfo": [
        {"Row": 2, "Col": 5, "Direction": 1, "Colors": 0},
        {"Row": 5, "Col": 4, "Direction": 2, "Colors": 1}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Slide Core v{}", VERSION);

    let level = LevelData::from_json(DEMO_LEVEL).context("failed to parse demo level")?;
    let mut engine = Engine::new(&level, false).context("failed to build demo level")?;

    info!(
        cols = engine.board().cols(),
        rows = engine.board().rows(),
        blocks = engine.board().block_count(),
        moves = ?engine.remaining_moves(),
        "level loaded"
    );

    let script = [
        (BlockId(0), Direction::Up),    // rejected: not in the allowed set
        (BlockId(0), Direction::Left),  // no-op: flush against the wall
        (BlockId(0), Direction::Right), // exits through the red gate
        (BlockId(1), Direction::Down),  // exits through the green gate
    ];

    for (block_id, direction) in script {
        let report = engine
            .try_move(block_id, direction)
            .context("move request failed")?;
        info!(?block_id, ?direction, outcome = ?report.outcome, "move resolved");
        for event in &report.events {
            match event {
                EngineEvent::ValidMove => info!("event: valid move"),
                EngineEvent::BlockExited {
                    block_id,
                    color,
                    direction,
                } => info!(?block_id, ?color, ?direction, "event: block exited"),
                EngineEvent::GameStateChanged(state) => {
                    info!(?state, "event: game state changed")
                }
            }
        }
    }

    info!(
        state = ?engine.state(),
        remaining_blocks = engine.board().block_count(),
        remaining_moves = ?engine.remaining_moves(),
        "demo finished"
    );
    Ok(())
}
