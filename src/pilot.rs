/// Autopilot that plays the simulation in place of a human.
///
/// Per frame: pick a movement intent, fire on a fixed cadence, then compare
/// published state with the previous frame to find game-over and milestone
/// edges.  It only reads state and calls `Simulation`'s actions.

use std::cell::Cell;
use std::rc::Rc;

use plane_shooter::{Simulation, TickOutcome};
use rand::Rng;
use tracing::{info, warn};

/// Seconds between auto-fire attempts.
const SHOOT_INTERVAL: f64 = 0.2;

/// Stop steering when this close to the target column.
const DEAD_ZONE: f64 = 8.0;

/// Shared counters written by the simulation's hooks.
#[derive(Clone, Default)]
pub struct HookCounters {
    pub kills: Rc<Cell<u32>>,
    pub milestone_pending: Rc<Cell<bool>>,
}

impl HookCounters {
    pub fn attach<R: Rng>(&self, sim: &mut Simulation<R>) {
        let kills = Rc::clone(&self.kills);
        sim.set_on_enemy_killed(move |_, _| kills.set(kills.get() + 1));
        let pending = Rc::clone(&self.milestone_pending);
        sim.set_on_more_enemy(move || pending.set(true));
    }
}

/// What happened in one driven frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// `game_over` went false → true this frame.
    pub game_over_edge: bool,
    /// A milestone notification for a score not seen before.
    pub milestone: bool,
    pub enemy_escaped: bool,
}

#[derive(Default)]
pub struct Autopilot {
    shoot_timer: f64,
    last_game_over: bool,
    last_milestone_score: Option<u32>,
}

impl Autopilot {
    /// Forget per-run edges; call alongside `Simulation::restart`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Steer toward the enemy closest to the bottom edge.
    fn steer<R: Rng>(sim: &Simulation<R>) -> f64 {
        let target = sim
            .enemies()
            .iter()
            .min_by(|a, b| a.y.total_cmp(&b.y))
            .map(|e| e.x);

        match target {
            Some(x) if x < sim.player().x - DEAD_ZONE => -1.0,
            Some(x) if x > sim.player().x + DEAD_ZONE => 1.0,
            _ => 0.0,
        }
    }

    pub fn frame<R: Rng>(
        &mut self,
        sim: &mut Simulation<R>,
        counters: &HookCounters,
        dt: f64,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        let dir = Self::steer(sim);
        sim.move_player(dir);

        if sim.update(dt) == TickOutcome::EnemyEscaped {
            report.enemy_escaped = true;
        }

        self.shoot_timer += dt;
        if self.shoot_timer >= SHOOT_INTERVAL && sim.can_shoot() {
            sim.shoot();
            self.shoot_timer = 0.0;
        }

        if counters.milestone_pending.replace(false)
            && self.last_milestone_score != Some(sim.score())
        {
            self.last_milestone_score = Some(sim.score());
            report.milestone = true;
            info!(score = sim.score(), "more enemies incoming");
        }

        if !self.last_game_over && sim.game_over() {
            report.game_over_edge = true;
            warn!(score = sim.score(), "player destroyed");
        }
        self.last_game_over = sim.game_over();

        report
    }
}
