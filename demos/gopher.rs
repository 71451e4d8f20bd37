//! Headless gopher scene.
//!
//! Drives the scene for a couple of seconds of wall-clock time against the
//! recording engine, scrolling a sawtooth ground under the gopher. Run with
//! `RUST_LOG=debug cargo run --example gopher` to watch the frames go by.

use std::ops::ControlFlow;

use sprite_ngin::{Context, FrameClock, FsAssets, Game, RecordingEngine, Sawtooth, run};

const FRAMES: u64 = 120;

fn main() -> anyhow::Result<()> {
    let ctx = Context::default();
    let assets = if FsAssets::default().root().exists() {
        FsAssets::default()
    } else {
        FsAssets::bundled()
    };
    let clock = FrameClock::from_millis(ctx.tick_duration_millis);
    let mut engine = RecordingEngine::new();
    let mut game = Game::with_transition(&ctx.layout, Sawtooth);

    let stats = run(&ctx, &mut engine, &assets, &clock, &mut game, |report| {
        log::debug!(
            "frame {} at {}: {} ticks",
            report.frame,
            report.now,
            report.ticks
        );
        if report.frame + 1 >= FRAMES {
            return ControlFlow::Break(());
        }
        std::thread::sleep(clock.tick_duration());
        ControlFlow::Continue(())
    })?;

    println!(
        "{} frames, {} ticks, {} nodes, ground: {:?}",
        stats.frames,
        stats.ticks,
        engine.node_count(),
        game.state().ground()
    );
    Ok(())
}
