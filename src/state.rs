/// The simulation aggregate.
///
/// `SimState` exclusively owns every entity.  Fields are public so the update
/// loop and resolver can work on them directly; callers outside the crate only
/// ever see it through `&SimState` (see `Simulation::state`).

use tracing::debug;

use crate::entities::{Bullet, Enemy, Phase, Player};
use crate::tuning::Tuning;

#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub player: Player,
    /// Creation order; newest last.
    pub bullets: Vec<Bullet>,
    /// Creation order; newest last.
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub game_over: bool,
    /// Gates every mutation from `update` and `shoot`.
    pub running: bool,
    pub width: f64,
    pub height: f64,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f64,
    /// Current spawn interval; ramps down toward the floor.
    pub spawn_interval: f64,
}

impl SimState {
    /// A state that has not been initialized: no world, nothing running.
    pub fn uninitialized(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(0.0, 0.0, tuning.player.hp_max),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            game_over: false,
            running: false,
            width: 0.0,
            height: 0.0,
            spawn_timer: 0.0,
            spawn_interval: tuning.spawn.initial_interval,
        }
    }

    /// Build the initial state for a world of `width` × `height` centred on
    /// the origin.
    pub fn new(width: f64, height: f64, tuning: &Tuning) -> Self {
        let mut state = Self::uninitialized(tuning);
        state.initialize(width, height, tuning);
        state
    }

    /// Set world bounds, place the player at the bottom centre and reset.
    pub fn initialize(&mut self, width: f64, height: f64, tuning: &Tuning) {
        self.width = width;
        self.height = height;
        self.player = Player::new(
            0.0,
            -height / 2.0 + tuning.player.bottom_offset,
            tuning.player.hp_max,
        );
        self.reset(tuning);
    }

    /// Return to the post-initialize state, keeping the world bounds and the
    /// player's fixed vertical position.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.game_over = false;
        self.running = true;
        self.bullets.clear();
        self.enemies.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = tuning.spawn.initial_interval;

        self.player.x = 0.0;
        self.player.cooldown = 0.0;
        self.player.move_dir = 0.0;
        self.player.heal_full();

        debug!(width = self.width, height = self.height, "simulation reset");
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Horizontal range the player is clamped to.
    pub fn player_range(&self, tuning: &Tuning) -> (f64, f64) {
        let m = tuning.player.margin;
        (-self.half_width() + m, self.half_width() - m)
    }

    /// Bullets strictly above this are culled.
    pub fn bullet_ceiling(&self, tuning: &Tuning) -> f64 {
        self.half_height() + tuning.bullet.exit_margin
    }

    /// Enemies strictly below this are culled.
    pub fn enemy_floor(&self, tuning: &Tuning) -> f64 {
        -self.half_height() - tuning.enemy.exit_margin
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.running {
            Phase::Running
        } else {
            Phase::Uninitialized
        }
    }

    /// `update` and `shoot` only act while this holds.
    pub fn is_live(&self) -> bool {
        self.running && !self.game_over
    }
}
