/// The embeddable simulation: one owned state, its tuning, its RNG and the
/// driver's hooks behind the call surface a frame loop needs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::compute::{self, TickOutcome};
use crate::entities::{Bullet, Enemy, Phase, Player};
use crate::hooks::Hooks;
use crate::rules::RuleCode;
use crate::snapshot::Snapshot;
use crate::state::SimState;
use crate::tuning::Tuning;

/// ```
/// use plane_shooter::{Simulation, Tuning};
///
/// let mut sim = Simulation::seeded(Tuning::default(), 7);
/// sim.initialize(480.0, 720.0);
/// sim.shoot();
/// sim.update(1.0 / 60.0);
/// assert_eq!(sim.bullets().len(), 1);
/// ```
#[derive(Debug)]
pub struct Simulation<R = StdRng> {
    state: SimState,
    tuning: Tuning,
    rng: R,
    hooks: Hooks,
}

impl Simulation<StdRng> {
    /// Entropy-seeded RNG.
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Uninitialized until `initialize` is called.
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            state: SimState::uninitialized(&tuning),
            tuning,
            rng,
            hooks: Hooks::default(),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    pub fn initialize(&mut self, width: f64, height: f64) {
        self.state.initialize(width, height, &self.tuning);
        info!(width, height, "simulation initialized");
    }

    /// Reset everything but the world bounds.
    pub fn restart(&mut self) {
        compute::restart(&mut self.state, &self.tuning);
    }

    /// Advance by `dt` seconds; a no-op unless running.
    pub fn update(&mut self, dt: f64) -> TickOutcome {
        compute::update(&mut self.state, &self.tuning, &mut self.rng, &mut self.hooks, dt)
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    pub fn move_player(&mut self, dir: f64) {
        compute::move_player(&mut self.state, dir);
    }

    pub fn shoot(&mut self) {
        compute::shoot(&mut self.state, &self.tuning);
    }

    pub fn can_shoot(&self) -> bool {
        compute::can_shoot(&self.state)
    }

    // ── Hooks ────────────────────────────────────────────────────────────────

    pub fn set_on_enemy_killed(&mut self, f: impl FnMut(f64, f64) + 'static) {
        self.hooks.set_on_enemy_killed(f);
    }

    pub fn set_on_more_enemy(&mut self, f: impl FnMut() + 'static) {
        self.hooks.set_on_more_enemy(f);
    }

    pub fn clear_hooks(&mut self) {
        self.hooks.clear();
    }

    // ── Published state ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.state.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn validate(&self) -> Result<(), RuleCode> {
        self.state.validate(&self.tuning)
    }
}
