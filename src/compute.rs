/// Game-logic operations on a `SimState`.
///
/// `update` advances one tick; the action functions record intent or spawn a
/// bullet and are consumed by the next tick.  Randomness is injected through
/// `rng` and notifications go out through `hooks`.

use rand::Rng;
use tracing::{debug, trace};

use crate::collision::resolve_collisions;
use crate::entities::Bullet;
use crate::hooks::Hooks;
use crate::spawn::advance_spawn_timer;
use crate::state::SimState;
use crate::tuning::Tuning;

/// How a tick ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or already over: nothing changed.
    Skipped,
    /// An enemy left through the bottom edge; collisions and the milestone
    /// check did not run this tick.
    EnemyEscaped,
    Completed,
}

// ── Action interface ─────────────────────────────────────────────────────────

/// Store movement intent verbatim; it scales player speed on the next tick.
pub fn move_player(state: &mut SimState, dir: f64) {
    state.player.move_dir = dir;
}

pub fn can_shoot(state: &SimState) -> bool {
    state.is_live() && state.player.cooldown <= 0.0
}

/// Fire one bullet from just above the player, then start the cooldown.
/// A no-op while `can_shoot` is false.
pub fn shoot(state: &mut SimState, tuning: &Tuning) {
    if !can_shoot(state) {
        return;
    }
    state.bullets.push(Bullet {
        x: state.player.x,
        y: state.player.y + tuning.player.muzzle_offset,
    });
    state.player.cooldown = tuning.player.fire_cooldown;
}

pub fn restart(state: &mut SimState, tuning: &Tuning) {
    state.reset(tuning);
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds.
///
/// Fixed order: cooldown, player movement, spawning, bullets, enemies,
/// collisions, milestone check.
pub fn update(
    state: &mut SimState,
    tuning: &Tuning,
    rng: &mut impl Rng,
    hooks: &mut Hooks,
    dt: f64,
) -> TickOutcome {
    if !state.is_live() {
        return TickOutcome::Skipped;
    }
    trace!(dt, enemies = state.enemies.len(), bullets = state.bullets.len(), "tick");

    // ── 1. Fire cooldown ─────────────────────────────────────────────────────
    state.player.cooldown = (state.player.cooldown - dt).max(0.0);

    // ── 2. Player movement ───────────────────────────────────────────────────
    if state.player.move_dir != 0.0 {
        let (min_x, max_x) = state.player_range(tuning);
        let x = state.player.x + state.player.move_dir * tuning.player.speed * dt;
        // Not f64::clamp: a world narrower than both margins must not panic.
        state.player.x = x.max(min_x).min(max_x);
    }

    // ── 3. Spawning ──────────────────────────────────────────────────────────
    advance_spawn_timer(state, tuning, rng, dt);

    // ── 4. Bullets ───────────────────────────────────────────────────────────
    let ceiling = state.bullet_ceiling(tuning);
    let step = tuning.bullet.speed * dt;
    state.bullets.retain_mut(|b| {
        b.y += step;
        b.y <= ceiling
    });

    // ── 5. Enemies (newest first) ────────────────────────────────────────────
    let floor = state.enemy_floor(tuning);
    for i in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[i];
        enemy.y -= enemy.speed * dt;
        if enemy.y < floor {
            let escaped = state.enemies.remove(i);
            debug!(x = escaped.x, y = escaped.y, "enemy escaped, tick cut short");
            return TickOutcome::EnemyEscaped;
        }
    }

    // ── 6. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(state, tuning, hooks);

    // ── 7. Milestone ─────────────────────────────────────────────────────────
    // A zero milestone never fires.
    if state.score > 0 && state.score.checked_rem(tuning.scoring.milestone) == Some(0) {
        debug!(score = state.score, "milestone reached");
        hooks.more_enemy();
    }

    TickOutcome::Completed
}
