/// Collision resolution: bullets ↔ enemies, then enemies ↔ player.
///
/// Both passes mutate the state in place and report kills through `hooks`.

use tracing::{debug, info};

use crate::hooks::Hooks;
use crate::state::SimState;
use crate::tuning::Tuning;

/// Axis-aligned overlap test with strict inequality on both axes.
#[inline]
pub fn boxes_overlap(ax: f64, ay: f64, bx: f64, by: f64, half_extents: (f64, f64)) -> bool {
    (ax - bx).abs() < half_extents.0 && (ay - by).abs() < half_extents.1
}

/// Run both passes in order.
pub fn resolve_collisions(state: &mut SimState, tuning: &Tuning, hooks: &mut Hooks) {
    resolve_bullet_hits(state, tuning, hooks);
    resolve_player_contact(state, tuning, hooks);
}

/// For each enemy (newest first) consume at most one overlapping bullet
/// (newest first), apply bullet damage and remove the enemy once its `hp`
/// hits zero.  Each bullet kill scores `kill_score` and fires the kill hook.
///
/// Returns the number of enemies destroyed.
pub fn resolve_bullet_hits(state: &mut SimState, tuning: &Tuning, hooks: &mut Hooks) -> u32 {
    let half = tuning.bullet.hit_half_extents;
    let mut kills = 0;

    for ei in (0..state.enemies.len()).rev() {
        let (ex, ey) = (state.enemies[ei].x, state.enemies[ei].y);
        let Some(bi) = state
            .bullets
            .iter()
            .rposition(|b| boxes_overlap(ex, ey, b.x, b.y, half))
        else {
            continue;
        };

        state.bullets.remove(bi);
        if state.enemies[ei].take_damage(tuning.bullet.damage) {
            let enemy = state.enemies.remove(ei);
            state.score += tuning.scoring.kill_score;
            kills += 1;
            debug!(x = enemy.x, y = enemy.y, score = state.score, "enemy shot down");
            hooks.enemy_killed(enemy.x, enemy.y);
        }
    }

    kills
}

/// Find the oldest enemy touching the player, apply contact damage, destroy
/// that enemy and stop: at most one contact is resolved per tick.  Ends the
/// run when the player's `hp` reaches zero.
///
/// Returns `true` if a contact happened.
pub fn resolve_player_contact(state: &mut SimState, tuning: &Tuning, hooks: &mut Hooks) -> bool {
    let (px, py) = (state.player.x, state.player.y);
    let half = tuning.player.contact_half_extents;

    let Some(ei) = state
        .enemies
        .iter()
        .position(|e| boxes_overlap(e.x, e.y, px, py, half))
    else {
        return false;
    };

    let dead = state.player.take_damage(tuning.player.contact_damage);
    debug!(hp = state.player.hp(), "player hit");
    if dead {
        state.game_over = true;
        state.running = false;
        info!(score = state.score, "game over");
    }

    let mut enemy = state.enemies.remove(ei);
    enemy.set_hp(0);
    hooks.enemy_killed(enemy.x, enemy.y);
    true
}
