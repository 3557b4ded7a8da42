use plane_shooter::entities::*;
use plane_shooter::state::SimState;
use plane_shooter::tuning::Tuning;

#[test]
fn player_starts_at_full_health() {
    let p = Player::new(0.0, -280.0, 200);
    assert_eq!(p.hp(), 200);
    assert_eq!(p.hp_max(), 200);
    assert_eq!(p.hp_ratio(), 1.0);
    assert_eq!(p.move_dir, 0.0);
    assert_eq!(p.cooldown, 0.0);
}

#[test]
fn player_damage_updates_ratio() {
    let mut p = Player::new(0.0, 0.0, 200);
    assert!(!p.take_damage(20));
    assert_eq!(p.hp(), 180);
    assert!((p.hp_ratio() - 0.9).abs() < 1e-6);
}

#[test]
fn player_damage_floors_at_zero() {
    let mut p = Player::new(0.0, 0.0, 200);
    p.set_hp(10);
    assert!(p.take_damage(20)); // overkill, no underflow
    assert_eq!(p.hp(), 0);
    assert_eq!(p.hp_ratio(), 0.0);
}

#[test]
fn set_hp_clamps_to_max() {
    let mut p = Player::new(0.0, 0.0, 200);
    p.set_hp(999);
    assert_eq!(p.hp(), 200);
    assert_eq!(p.hp_ratio(), 1.0);

    let mut e = Enemy::new(0.0, 0.0, 80.0, 50);
    e.set_hp(51);
    assert_eq!(e.hp(), 50);
}

#[test]
fn heal_full_restores_ratio() {
    let mut p = Player::new(0.0, 0.0, 200);
    p.take_damage(150);
    p.heal_full();
    assert_eq!(p.hp(), 200);
    assert_eq!(p.hp_ratio(), 1.0);
}

#[test]
fn enemy_two_bullets_kill() {
    let mut e = Enemy::new(10.0, 20.0, 80.0, 50);
    assert!(!e.take_damage(25));
    assert_eq!(e.hp_ratio(), 0.5);
    assert!(e.take_damage(25));
    assert!(e.is_dead());
    assert_eq!(e.hp_ratio(), 0.0);
}

#[test]
fn zero_max_reads_as_empty_bar() {
    let e = Enemy::new(0.0, 0.0, 80.0, 0);
    assert_eq!(e.hp_ratio(), 0.0);
}

#[test]
fn phase_follows_flags() {
    let tuning = Tuning::default();
    let mut s = SimState::uninitialized(&tuning);
    assert_eq!(s.phase(), Phase::Uninitialized);
    assert!(!s.is_live());

    s.initialize(480.0, 720.0, &tuning);
    assert_eq!(s.phase(), Phase::Running);
    assert!(s.is_live());

    s.game_over = true;
    s.running = false;
    assert_eq!(s.phase(), Phase::GameOver);
    assert!(!s.is_live());
}

#[test]
fn state_clone_is_independent() {
    let original = SimState::new(480.0, 720.0, &Tuning::default());
    let mut cloned = original.clone();

    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(5.0, 5.0, 80.0, 50));

    assert_eq!(original.player.x, 0.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
