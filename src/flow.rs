//! Frame advance and the host loop.
//!
//! [`Game`] owns the simulation state and the last processed tick. Each frame
//! the host reads its clock and hands the tick to [`Game::update`], which
//! replays every tick that has passed since the previous call, exactly once
//! and in order. Only then is the scene arranged, so arrangers always see the
//! state for the current frame.
//!
//! # Lifecycle
//!
//! 1. [`Game::new`] (or [`Game::with_transition`]) sets every ground slot to
//!    the baseline
//! 2. [`Game::scene`] loads the atlas and registers the node tree, once
//! 3. every frame: [`Game::frame`] = [`Game::update`] then
//!    [`Scene::arrange`]
//! 4. [`Game::discard_scene`] hands the scene back so a new one may be built
//!
//! [`run`] wires all of that to a [`Clock`] for hosts that don't need
//! anything more elaborate.

use std::{
    ops::ControlFlow,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    clock::{Clock, Tick},
    context::{Context, TileLayout},
    data_structures::{
        scene_graph::{Scene, build_scene},
        simulation::{Hold, SimulationState, Transition},
    },
    error::SceneError,
    render::Engine,
    resources::AssetSource,
};

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

pub struct Game<T = Hold> {
    id: u64,
    state: SimulationState,
    last_calc: Tick,
    transition: T,
    scene_built: bool,
}

impl Game<Hold> {
    pub fn new(layout: &TileLayout) -> Self {
        Self::with_transition(layout, Hold)
    }
}

impl<T: Transition> Game<T> {
    pub fn with_transition(layout: &TileLayout, transition: T) -> Self {
        Self {
            id: NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed),
            state: SimulationState::new(layout),
            last_calc: Tick::ZERO,
            transition,
            scene_built: false,
        }
    }

    /// Restores the baseline ground. The tick counter is left alone.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The last tick whose transition has been applied.
    pub fn last_calc(&self) -> Tick {
        self.last_calc
    }

    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Computes the game state up to `now`.
    ///
    /// Applies the transition once for every tick in `(last_calc, now]` and
    /// returns how many that was. A `now` at or behind `last_calc` does
    /// nothing.
    pub fn update(&mut self, now: Tick) -> u64 {
        let pending = now.ticks_since(self.last_calc);
        while self.last_calc < now {
            self.transition.step(&mut self.state);
            self.last_calc = self.last_calc.next();
        }
        if pending > 0 {
            log::trace!("advanced {} ticks to {}", pending, now);
        }
        pending
    }

    /// Builds the scene for this game.
    ///
    /// Only one scene may be alive per game; building a second one fails with
    /// [`SceneError::SceneAlreadyBuilt`] until the first is passed to
    /// [`discard_scene`](Self::discard_scene).
    pub fn scene<E, A>(
        &mut self,
        engine: &mut E,
        assets: &A,
        ctx: &Context,
    ) -> Result<Scene, SceneError>
    where
        E: Engine + ?Sized,
        A: AssetSource + ?Sized,
    {
        if self.scene_built {
            return Err(SceneError::SceneAlreadyBuilt);
        }
        let mut scene = build_scene(engine, assets, ctx, &self.state)?;
        scene.owner = self.id;
        self.scene_built = true;
        Ok(scene)
    }

    /// Drops `scene` so a new one may be built.
    ///
    /// A scene built by a different game is handed back inside
    /// [`SceneError::ForeignScene`] and this game's guard stays in place.
    pub fn discard_scene(&mut self, scene: Scene) -> Result<(), SceneError> {
        if scene.owner != self.id {
            return Err(SceneError::ForeignScene(Box::new(scene)));
        }
        drop(scene);
        self.scene_built = false;
        Ok(())
    }

    /// Advances to `now`, then arranges every node of `scene`.
    ///
    /// Returns the number of ticks processed.
    pub fn frame<E: Engine + ?Sized>(&mut self, engine: &mut E, scene: &Scene, now: Tick) -> u64 {
        let ticks = self.update(now);
        scene.arrange(engine, &self.state, now);
        ticks
    }
}

/// Per-frame information passed to the [`run`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// 0-based frame number.
    pub frame: u64,
    pub now: Tick,
    /// Ticks processed this frame.
    pub ticks: u64,
}

/// Totals returned by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub ticks: u64,
}

/// Installs the platform logger, warning if one is already in place.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {}", e);
        }
    }
}

/// Builds the scene and drives `game` from `clock` until `on_frame` breaks.
///
/// Every iteration reads the clock once, advances, arranges, then reports the
/// frame. The callback is where a host paces the loop or decides to stop.
pub fn run<E, A, C, T, F>(
    ctx: &Context,
    engine: &mut E,
    assets: &A,
    clock: &C,
    game: &mut Game<T>,
    mut on_frame: F,
) -> anyhow::Result<FrameStats>
where
    E: Engine + ?Sized,
    A: AssetSource + ?Sized,
    C: Clock + ?Sized,
    T: Transition,
    F: FnMut(&FrameReport) -> ControlFlow<()>,
{
    init_logging();

    let scene = game.scene(engine, assets, ctx)?;
    let mut stats = FrameStats::default();
    loop {
        let now = clock.now();
        let ticks = game.frame(engine, &scene, now);
        let report = FrameReport {
            frame: stats.frames,
            now,
            ticks,
        };
        stats.frames += 1;
        stats.ticks += ticks;
        if on_frame(&report).is_break() {
            break;
        }
    }
    log::info!(
        "stopped after {} frames, {} ticks (last tick {})",
        stats.frames,
        stats.ticks,
        game.last_calc()
    );
    game.discard_scene(scene)?;
    Ok(stats)
}
