//! Simulation state and the per-tick transition.
//!
//! [`SimulationState`] is the only mutable data the scene reads. It is written
//! exclusively by a [`Transition`] driven from the frame advancer
//! ([`Game::update`](crate::flow::Game::update)) and read by the arrangers.

use crate::context::TileLayout;

/// Ground y-offsets, one per ground column (visible columns plus overscan).
///
/// The number of slots is fixed at construction. Slots are exposed as slices
/// so callers can change values but never the length.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    ground_y: Box<[f32]>,
    baseline: f32,
}

impl SimulationState {
    pub fn new(layout: &TileLayout) -> Self {
        Self::with_baseline(layout.columns(), layout.init_ground_y())
    }

    pub fn with_baseline(columns: usize, baseline: f32) -> Self {
        Self {
            ground_y: vec![baseline; columns].into_boxed_slice(),
            baseline,
        }
    }

    /// Puts every slot back to the baseline, in place.
    pub fn reset(&mut self) {
        self.ground_y.fill(self.baseline);
    }

    pub fn len(&self) -> usize {
        self.ground_y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ground_y.is_empty()
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn ground_y(&self, column: usize) -> Option<f32> {
        self.ground_y.get(column).copied()
    }

    pub fn ground(&self) -> &[f32] {
        &self.ground_y
    }

    pub fn ground_mut(&mut self) -> &mut [f32] {
        &mut self.ground_y
    }

    /// Bit patterns of every slot, for exact replay comparisons.
    pub fn to_bits(&self) -> Vec<u32> {
        self.ground_y.iter().map(|y| y.to_bits()).collect()
    }
}

/// Computes the next simulation state from the current one.
///
/// Implementations must be deterministic: the result may depend only on the
/// state passed in (and on data captured at construction), never on
/// wall-clock time. Replaying the same number of steps from the same state
/// must give bitwise identical results.
///
/// Any `Fn(&mut SimulationState)` closure is a transition.
pub trait Transition {
    fn step(&self, state: &mut SimulationState);
}

/// The identity transition: the ground stays where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hold;

impl Transition for Hold {
    fn step(&self, _: &mut SimulationState) {}
}

impl<F> Transition for F
where
    F: Fn(&mut SimulationState),
{
    fn step(&self, state: &mut SimulationState) {
        self(state)
    }
}

/// Scrolls the ground one column per tick and grows a sawtooth hill at the
/// far edge: each new column is 8 units above the previous one until it is
/// 32 above the baseline, then it drops back.
///
/// States with fewer than two columns are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sawtooth;

impl Transition for Sawtooth {
    fn step(&self, state: &mut SimulationState) {
        let baseline = state.baseline();
        let ground = state.ground_mut();
        if ground.len() < 2 {
            return;
        }
        ground.rotate_left(1);
        let last = ground.len() - 1;
        let prev = ground[last - 1];
        ground[last] = if prev <= baseline - 32.0 {
            baseline
        } else {
            prev - 8.0
        };
    }
}
