/// Callback slots the embedding driver registers before the run starts.
///
/// Deduplicating repeated milestone notifications for the same score is left
/// to the driver.

use std::fmt;

pub type EnemyKilledFn = Box<dyn FnMut(f64, f64)>;
pub type MoreEnemyFn = Box<dyn FnMut()>;

#[derive(Default)]
pub struct Hooks {
    on_enemy_killed: Option<EnemyKilledFn>,
    on_more_enemy: Option<MoreEnemyFn>,
}

impl Hooks {
    pub fn set_on_enemy_killed(&mut self, f: impl FnMut(f64, f64) + 'static) {
        self.on_enemy_killed = Some(Box::new(f));
    }

    pub fn set_on_more_enemy(&mut self, f: impl FnMut() + 'static) {
        self.on_more_enemy = Some(Box::new(f));
    }

    pub fn clear(&mut self) {
        self.on_enemy_killed = None;
        self.on_more_enemy = None;
    }

    /// Fired once per kill, with the enemy's position at removal.
    pub(crate) fn enemy_killed(&mut self, x: f64, y: f64) {
        if let Some(f) = self.on_enemy_killed.as_mut() {
            f(x, y);
        }
    }

    pub(crate) fn more_enemy(&mut self) {
        if let Some(f) = self.on_more_enemy.as_mut() {
            f();
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_enemy_killed", &self.on_enemy_killed.is_some())
            .field("on_more_enemy", &self.on_more_enemy.is_some())
            .finish()
    }
}
