/// Simulation entity types: plain data, plus the health bookkeeping that
/// keeps `hp` and `hp_ratio` in lockstep.

use serde::Serialize;

/// Lifecycle phase, derived from the `running` / `game_over` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// `initialize` has not been called yet.
    Uninitialized,
    Running,
    /// Terminal until `restart`.
    GameOver,
}

/// Ratio helper shared by the player and enemies.  A zero maximum reads as
/// an empty bar rather than NaN.
fn ratio(hp: u32, hp_max: u32) -> f64 {
    if hp_max == 0 {
        0.0
    } else {
        (hp as f64 / hp_max as f64).clamp(0.0, 1.0)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet travelling straight up at the simulation-wide speed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    /// Fixed at initialization; never integrated.
    pub y: f64,
    hp: u32,
    hp_max: u32,
    hp_ratio: f64,
    /// Movement intent, stored verbatim. Only -1, 0 and 1 are meaningful.
    pub move_dir: f64,
    /// Seconds until the next shot is allowed.
    pub cooldown: f64,
}

impl Player {
    pub fn new(x: f64, y: f64, hp_max: u32) -> Self {
        Self {
            x,
            y,
            hp: hp_max,
            hp_max,
            hp_ratio: ratio(hp_max, hp_max),
            move_dir: 0.0,
            cooldown: 0.0,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn hp_max(&self) -> u32 {
        self.hp_max
    }

    pub fn hp_ratio(&self) -> f64 {
        self.hp_ratio
    }

    /// Overwrite `hp` (clamped to `[0, hp_max]`) and refresh the ratio.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.hp_max);
        self.hp_ratio = ratio(self.hp, self.hp_max);
    }

    /// Subtract `amount`, flooring at zero. Returns `true` once `hp` is 0.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.set_hp(self.hp.saturating_sub(amount));
        self.hp == 0
    }

    /// Back to full health with a refreshed ratio.
    pub fn heal_full(&mut self) {
        self.set_hp(self.hp_max);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    /// Downward speed in units per second.
    pub speed: f64,
    hp: u32,
    hp_max: u32,
    hp_ratio: f64,
}

impl Enemy {
    /// A fresh enemy at full health.
    pub fn new(x: f64, y: f64, speed: f64, hp_max: u32) -> Self {
        Self {
            x,
            y,
            speed,
            hp: hp_max,
            hp_max,
            hp_ratio: ratio(hp_max, hp_max),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn hp_max(&self) -> u32 {
        self.hp_max
    }

    pub fn hp_ratio(&self) -> f64 {
        self.hp_ratio
    }

    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.hp_max);
        self.hp_ratio = ratio(self.hp, self.hp_max);
    }

    /// Subtract `amount`, flooring at zero. Returns `true` once `hp` is 0.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.set_hp(self.hp.saturating_sub(amount));
        self.hp == 0
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
