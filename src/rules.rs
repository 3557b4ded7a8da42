/// Invariant checks over a `SimState`, reported as the first broken rule.

use std::fmt;

use crate::state::SimState;
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCode {
    PlayerHpRange,
    PlayerHpRatio,
    PlayerBounds,
    EnemyHpRange,
    EnemyHpRatio,
    BulletAboveCeiling,
    EnemyBelowFloor,
    NegativeCooldown,
    GameOverWhileRunning,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerHpRange => write!(f, "PLAYER_HP_RANGE"),
            Self::PlayerHpRatio => write!(f, "PLAYER_HP_RATIO"),
            Self::PlayerBounds => write!(f, "PLAYER_BOUNDS"),
            Self::EnemyHpRange => write!(f, "ENEMY_HP_RANGE"),
            Self::EnemyHpRatio => write!(f, "ENEMY_HP_RATIO"),
            Self::BulletAboveCeiling => write!(f, "BULLET_ABOVE_CEILING"),
            Self::EnemyBelowFloor => write!(f, "ENEMY_BELOW_FLOOR"),
            Self::NegativeCooldown => write!(f, "NEGATIVE_COOLDOWN"),
            Self::GameOverWhileRunning => write!(f, "GAME_OVER_WHILE_RUNNING"),
        }
    }
}

impl std::error::Error for RuleCode {}

const RATIO_EPSILON: f64 = 1e-6;

fn ratio_matches(hp: u32, hp_max: u32, ratio: f64) -> bool {
    let expected = if hp_max == 0 { 0.0 } else { hp as f64 / hp_max as f64 };
    (0.0..=1.0).contains(&ratio) && (ratio - expected).abs() <= RATIO_EPSILON
}

impl SimState {
    /// Check every state invariant.  An uninitialized state has no world and
    /// only the flag rule applies.
    pub fn validate(&self, tuning: &Tuning) -> Result<(), RuleCode> {
        if self.game_over && self.running {
            return Err(RuleCode::GameOverWhileRunning);
        }
        if self.width <= 0.0 && self.height <= 0.0 {
            return Ok(());
        }

        let p = &self.player;
        if p.hp() > p.hp_max() {
            return Err(RuleCode::PlayerHpRange);
        }
        if !ratio_matches(p.hp(), p.hp_max(), p.hp_ratio()) {
            return Err(RuleCode::PlayerHpRatio);
        }
        if p.cooldown < 0.0 {
            return Err(RuleCode::NegativeCooldown);
        }
        let (min_x, max_x) = self.player_range(tuning);
        if min_x <= max_x && (p.x < min_x || p.x > max_x) {
            return Err(RuleCode::PlayerBounds);
        }

        for e in &self.enemies {
            if e.hp() > e.hp_max() {
                return Err(RuleCode::EnemyHpRange);
            }
            if !ratio_matches(e.hp(), e.hp_max(), e.hp_ratio()) {
                return Err(RuleCode::EnemyHpRatio);
            }
        }

        let ceiling = self.bullet_ceiling(tuning);
        if self.bullets.iter().any(|b| b.y > ceiling) {
            return Err(RuleCode::BulletAboveCeiling);
        }
        let floor = self.enemy_floor(tuning);
        if self.enemies.iter().any(|e| e.y < floor) {
            return Err(RuleCode::EnemyBelowFloor);
        }
        Ok(())
    }
}
