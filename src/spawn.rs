/// Timer-driven enemy generation.
///
/// All randomness comes through the injected `rng` so callers control
/// determinism (tests use a seeded or stepping RNG).

use rand::Rng;
use tracing::debug;

use crate::entities::Enemy;
use crate::state::SimState;
use crate::tuning::Tuning;

/// Advance the spawn timer by `dt`.  When it reaches the current interval the
/// timer restarts from zero, one enemy is spawned and the interval steps down
/// toward its floor.  Returns `true` if an enemy was spawned.
pub fn advance_spawn_timer(
    state: &mut SimState,
    tuning: &Tuning,
    rng: &mut impl Rng,
    dt: f64,
) -> bool {
    state.spawn_timer += dt;
    if state.spawn_timer < state.spawn_interval {
        return false;
    }

    state.spawn_timer = 0.0;
    spawn_enemy(state, tuning, rng);
    state.spawn_interval =
        (state.spawn_interval - tuning.spawn.interval_step).max(tuning.spawn.interval_floor);
    true
}

/// Append one enemy just above the top edge at a random x.
///
/// Speed is `base + uniform(0, jitter) + score × factor`, so enemies get
/// faster as the score climbs independently of the spawn-rate ramp.
pub fn spawn_enemy(state: &mut SimState, tuning: &Tuning, rng: &mut impl Rng) {
    let lo = -state.half_width() + tuning.spawn.margin;
    let hi = state.half_width() - tuning.spawn.margin;
    // Not gen_range: a world narrower than both margins still spawns.
    let x = lo + rng.gen::<f64>() * (hi - lo);
    let y = state.half_height() + tuning.spawn.height_offset;

    let e = &tuning.enemy;
    let speed =
        e.base_speed + rng.gen::<f64>() * e.speed_jitter + state.score as f64 * e.speed_score_factor;

    debug!(x, y, speed, interval = state.spawn_interval, "enemy spawned");
    state.enemies.push(Enemy::new(x, y, speed, e.hp_max));
}
