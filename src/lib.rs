//! Real-time simulation core for a vertical arcade shooter.
//!
//! Modules, leaves first:
//! - `entities`: player, bullet and enemy records
//! - `tuning`: every gameplay constant, loadable from TOML
//! - `state`: the aggregate that owns all entities
//! - `spawn` / `collision`: enemy generation and hit resolution
//! - `compute`: the per-tick update and the action interface
//! - `sim`: the embeddable `Simulation` driving all of the above

pub mod collision;
pub mod compute;
pub mod entities;
pub mod hooks;
pub mod rules;
pub mod sim;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tuning;

pub use compute::TickOutcome;
pub use entities::{Bullet, Enemy, Phase, Player};
pub use hooks::Hooks;
pub use rules::RuleCode;
pub use sim::Simulation;
pub use snapshot::{EnemyView, Snapshot};
pub use state::SimState;
pub use tuning::{Tuning, TuningError};
