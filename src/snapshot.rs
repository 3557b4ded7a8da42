/// Owned, read-only copy of everything a renderer needs for one frame.

use serde::Serialize;

use crate::entities::{Bullet, Phase};
use crate::state::SimState;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnemyView {
    pub x: f64,
    pub y: f64,
    pub hp_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub game_over: bool,
    pub running: bool,
    pub player_x: f64,
    pub player_y: f64,
    pub player_hp: u32,
    pub player_hp_max: u32,
    pub player_hp_ratio: f64,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<EnemyView>,
}

impl From<&SimState> for Snapshot {
    fn from(state: &SimState) -> Self {
        Self {
            phase: state.phase(),
            score: state.score,
            game_over: state.game_over,
            running: state.running,
            player_x: state.player.x,
            player_y: state.player.y,
            player_hp: state.player.hp(),
            player_hp_max: state.player.hp_max(),
            player_hp_ratio: state.player.hp_ratio(),
            bullets: state.bullets.clone(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    x: e.x,
                    y: e.y,
                    hp_ratio: e.hp_ratio(),
                })
                .collect(),
        }
    }
}
