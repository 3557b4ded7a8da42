/// Gameplay tuning.
///
/// Every constant the simulation uses lives here so a TOML file can rebalance
/// a run without touching code.  Groups mirror the entity they govern; any
/// field left out of the file keeps its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ── Per-concern groups ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal speed in units per second.
    pub speed: f64,
    pub hp_max: u32,
    /// Damage taken per enemy contact.
    pub contact_damage: u32,
    /// Distance kept from the left/right world edge.
    pub margin: f64,
    /// Height of the player above the bottom edge.
    pub bottom_offset: f64,
    /// Bullets appear this far above the player.
    pub muzzle_offset: f64,
    /// Seconds between shots.
    pub fire_cooldown: f64,
    /// Half-extents (x, y) of the enemy↔player contact box.
    pub contact_half_extents: (f64, f64),
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 260.0,
            hp_max: 200,
            contact_damage: 20,
            margin: 20.0,
            bottom_offset: 80.0,
            muzzle_offset: 20.0,
            fire_cooldown: 0.2,
            contact_half_extents: (55.0, 65.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f64,
    pub damage: u32,
    /// Bullets above `half_height + exit_margin` are culled.
    pub exit_margin: f64,
    /// Half-extents (x, y) of the bullet↔enemy hit box.
    pub hit_half_extents: (f64, f64),
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 480.0,
            damage: 25,
            exit_margin: 40.0,
            hit_half_extents: (54.0, 54.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub hp_max: u32,
    pub base_speed: f64,
    /// Upper bound of the uniform speed bonus rolled at spawn.
    pub speed_jitter: f64,
    /// Extra speed per point of score at spawn time.
    pub speed_score_factor: f64,
    /// Enemies below `-half_height - exit_margin` are culled.
    pub exit_margin: f64,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            hp_max: 50,
            base_speed: 80.0,
            speed_jitter: 60.0,
            speed_score_factor: 0.3,
            exit_margin: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Seconds between spawns at the start of a run.
    pub initial_interval: f64,
    /// Subtracted from the interval after every spawn.
    pub interval_step: f64,
    pub interval_floor: f64,
    /// Spawn x is kept this far from either edge.
    pub margin: f64,
    /// Enemies appear this far above the top edge.
    pub height_offset: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            initial_interval: 0.8,
            interval_step: 0.01,
            interval_floor: 0.35,
            margin: 40.0,
            height_offset: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Awarded per enemy destroyed by a bullet.
    pub kill_score: u32,
    /// `on_more_enemy` fires while the score is a non-zero multiple of this.
    pub milestone: u32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            kill_score: 10,
            milestone: 230,
        }
    }
}

// ── Aggregate ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub scoring: ScoringTuning,
}

#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tuning file: {err}"),
            Self::Parse(err) => write!(f, "malformed tuning file: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for TuningError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

impl Tuning {
    /// Parse and validate a (possibly partial) TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = toml::from_str(src)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.player;
        let b = &self.bullet;
        let e = &self.enemy;
        let s = &self.spawn;

        let floats = [
            ("player.speed", p.speed),
            ("player.margin", p.margin),
            ("player.bottom_offset", p.bottom_offset),
            ("player.muzzle_offset", p.muzzle_offset),
            ("player.fire_cooldown", p.fire_cooldown),
            ("player.contact_half_extents", p.contact_half_extents.0),
            ("player.contact_half_extents", p.contact_half_extents.1),
            ("bullet.speed", b.speed),
            ("bullet.exit_margin", b.exit_margin),
            ("bullet.hit_half_extents", b.hit_half_extents.0),
            ("bullet.hit_half_extents", b.hit_half_extents.1),
            ("enemy.base_speed", e.base_speed),
            ("enemy.speed_jitter", e.speed_jitter),
            ("enemy.speed_score_factor", e.speed_score_factor),
            ("enemy.exit_margin", e.exit_margin),
            ("spawn.initial_interval", s.initial_interval),
            ("spawn.interval_step", s.interval_step),
            ("spawn.interval_floor", s.interval_floor),
            ("spawn.margin", s.margin),
            ("spawn.height_offset", s.height_offset),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(field, "must be a finite number"));
        }

        if p.hp_max == 0 {
            return Err(invalid("player.hp_max", "must be positive"));
        }
        if e.hp_max == 0 {
            return Err(invalid("enemy.hp_max", "must be positive"));
        }
        if p.speed < 0.0 || b.speed < 0.0 || e.base_speed < 0.0 {
            return Err(invalid("speed", "speeds must not be negative"));
        }
        if e.speed_jitter < 0.0 || e.speed_score_factor < 0.0 {
            return Err(invalid("enemy.speed_jitter", "speed bonuses must not be negative"));
        }
        if p.fire_cooldown < 0.0 {
            return Err(invalid("player.fire_cooldown", "must not be negative"));
        }
        if s.interval_floor <= 0.0 {
            return Err(invalid("spawn.interval_floor", "must be positive"));
        }
        if s.interval_floor > s.initial_interval {
            return Err(invalid(
                "spawn.interval_floor",
                "must not exceed spawn.initial_interval",
            ));
        }
        if s.interval_step < 0.0 {
            return Err(invalid("spawn.interval_step", "must not be negative"));
        }
        if self.scoring.milestone == 0 {
            return Err(invalid("scoring.milestone", "must be positive"));
        }
        Ok(())
    }
}
