use plane_shooter::spawn::*;
use plane_shooter::state::SimState;
use plane_shooter::tuning::Tuning;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state(tuning: &Tuning) -> SimState {
    SimState::new(480.0, 720.0, tuning)
}

/// Every `gen::<f64>()` yields 0.0.
fn low_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// Every `gen::<f64>()` yields just under 1.0.
fn high_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn spawn_at_low_end_of_ranges() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    spawn_enemy(&mut s, &tuning, &mut low_rng());

    let e = &s.enemies[0];
    assert_eq!(e.x, -200.0); // -half_width + 40
    assert_eq!(e.y, 390.0); // half_height + 30
    assert_eq!(e.speed, 80.0);
    assert_eq!(e.hp(), 50);
    assert_eq!(e.hp_max(), 50);
    assert_eq!(e.hp_ratio(), 1.0);
}

#[test]
fn spawn_at_high_end_of_ranges() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    spawn_enemy(&mut s, &tuning, &mut high_rng());

    let e = &s.enemies[0];
    assert_close(e.x, 200.0);
    assert!(e.x < 200.0);
    assert_close(e.speed, 140.0);
}

#[test]
fn spawn_speed_scales_with_score() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    s.score = 100;
    spawn_enemy(&mut s, &tuning, &mut low_rng());
    assert_close(s.enemies[0].speed, 110.0); // 80 + 100 × 0.3
}

#[test]
fn seeded_spawns_stay_in_range() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        spawn_enemy(&mut s, &tuning, &mut rng);
    }
    for e in &s.enemies {
        assert!((-200.0..=200.0).contains(&e.x));
        assert!((80.0..=140.0).contains(&e.speed));
    }
}

#[test]
fn spawns_append_in_creation_order() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    spawn_enemy(&mut s, &tuning, &mut low_rng());
    spawn_enemy(&mut s, &tuning, &mut high_rng());
    assert!(s.enemies[0].x < s.enemies[1].x);
}

#[test]
fn narrow_world_still_spawns() {
    let tuning = Tuning::default();
    let mut s = SimState::new(40.0, 720.0, &tuning);
    spawn_enemy(&mut s, &tuning, &mut StdRng::seed_from_u64(1));
    let x = s.enemies[0].x;
    assert!((-20.0..=20.0).contains(&x));
}

// ── advance_spawn_timer ───────────────────────────────────────────────────────

#[test]
fn timer_accumulates_below_interval() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    assert!(!advance_spawn_timer(&mut s, &tuning, &mut low_rng(), 0.3));
    assert!(!advance_spawn_timer(&mut s, &tuning, &mut low_rng(), 0.3));
    assert_close(s.spawn_timer, 0.6);
    assert!(s.enemies.is_empty());
}

#[test]
fn timer_resets_to_zero_not_remainder() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    assert!(advance_spawn_timer(&mut s, &tuning, &mut low_rng(), 1.5));
    assert_eq!(s.spawn_timer, 0.0);
    assert_eq!(s.enemies.len(), 1); // one spawn per tick, however large dt is
}

#[test]
fn interval_ramps_to_floor() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    let mut last = s.spawn_interval;
    for _ in 0..100 {
        advance_spawn_timer(&mut s, &tuning, &mut low_rng(), 1.0);
        assert!(s.spawn_interval <= last);
        assert!(s.spawn_interval >= 0.35);
        last = s.spawn_interval;
    }
    assert_eq!(s.spawn_interval, 0.35);
}

#[test]
fn first_spawn_lands_on_frame_48_at_60_fps() {
    let tuning = Tuning::default();
    let mut s = make_state(&tuning);
    let spawn_frame = (1..=60)
        .find(|_| advance_spawn_timer(&mut s, &tuning, &mut low_rng(), 1.0 / 60.0))
        .expect("spawned within a second");
    assert_eq!(spawn_frame, 48); // 48 × (1/60) reaches 0.8 in double precision
}
