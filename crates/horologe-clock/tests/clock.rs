use std::f32::consts::{PI, TAU};

use glam::Vec3;

use horologe_clock::angles::{Direction, HandAngles, HOUR_STEP, MINUTE_STEP, SECOND_STEP};
use horologe_clock::compose::compose_clock;
use horologe_clock::ticks::{generate_ticks, TickCategory, TickLayout};
use horologe_clock::time::TimeSample;
use horologe_clock::watcher::SecondWatcher;
use horologe_clock::{ClockConfig, ConfigError};
use horologe_engine::geometry::MeshLibrary;
use horologe_engine::scene::{NodeId, Scene};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Accumulated sums lose absolute precision; compare relative to size.
fn rel_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}

fn same_place(a: f32, b: f32) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < 1e-3 || TAU - d < 1e-3
}

fn position(scene: &Scene, id: NodeId) -> Vec3 {
    scene.get(id).map(|n| n.transform.position).unwrap()
}

// ── scenarios ─────────────────────────────────────────────────────────────

#[test]
fn midnight() {
    let a = HandAngles::from_time(TimeSample::MIDNIGHT, Direction::Front);
    assert!(approx_eq(a.seconds, 0.0) && approx_eq(a.minutes, 0.0) && approx_eq(a.hours, 0.0));

    let ticks = generate_ticks(&TickLayout::default());
    assert_eq!(ticks[0].category, TickCategory::Zero);
    assert_eq!(ticks[5].category, TickCategory::Hour);
}

#[test]
fn three_fifteen_thirty() {
    let a = HandAngles::from_time(TimeSample::new(3, 15, 30), Direction::Front);
    assert!(approx_eq(a.seconds, -PI));
    assert!(approx_eq(a.minutes, -(PI / 2.0 + PI / 60.0)));
}

#[test]
fn rollover_is_a_single_step() {
    let mut scene = Scene::new();
    let mut meshes = MeshLibrary::new();
    let mut state = compose_clock(&mut scene, &mut meshes, &ClockConfig::default());

    let before = TimeSample::new(7, 12, 59);
    state.apply_initial(&mut scene, before);
    let angles = state.front;

    let after = before.plus_seconds(1);
    assert_eq!(after.seconds, 0);
    assert!(state.tick(&mut scene, after));
    assert!(!state.tick(&mut scene, after));
    assert_eq!(state.front, angles.advance_seconds(1, Direction::Front));
}

// ── gearing ───────────────────────────────────────────────────────────────

#[test]
fn gearing_over_ten_minutes() {
    let start = TimeSample::new(9, 0, 0);
    let mut a = HandAngles::from_time(start, Direction::Back);
    let a0 = a;
    for _ in 0..600 {
        a = a.advance_one_second(Direction::Back);
    }
    let (ds, dm, dh) = (a.seconds - a0.seconds, a.minutes - a0.minutes, a.hours - a0.hours);
    assert!(rel_eq(ds, 600.0 * SECOND_STEP));
    assert!(rel_eq(dm, 600.0 * MINUTE_STEP));
    assert!(rel_eq(dh, 600.0 * HOUR_STEP));
    assert!(rel_eq(dm * 60.0, ds));
    assert!(rel_eq(dh * 12.0, dm));
}

#[test]
fn sixty_increments_equal_a_fresh_computation() {
    for start in [TimeSample::MIDNIGHT, TimeSample::new(3, 15, 30), TimeSample::new(23, 59, 30)] {
        let mut a = HandAngles::from_time(start, Direction::Front);
        for _ in 0..60 {
            a = a.advance_one_second(Direction::Front);
        }
        let b = HandAngles::from_time(start.plus_seconds(60), Direction::Front);
        assert!(same_place(a.seconds, b.seconds));
        assert!(same_place(a.minutes, b.minutes));
        assert!(same_place(a.hours, b.hours));
    }
}

// ── mirroring ─────────────────────────────────────────────────────────────

#[test]
fn front_and_back_mirror() {
    let t = TimeSample::new(14, 7, 48);
    let front = HandAngles::from_time(t, Direction::Front);
    let back = HandAngles::from_time(t, Direction::Back);
    assert_eq!(front.seconds, -back.seconds);
}

#[test]
fn composed_hands_mirror_in_the_scene() {
    let mut scene = Scene::new();
    let mut meshes = MeshLibrary::new();
    let config = ClockConfig { back_zone_offset_hours: 0, ..ClockConfig::default() };
    let mut state = compose_clock(&mut scene, &mut meshes, &config);
    state.apply_initial(&mut scene, TimeSample::new(2, 40, 10));

    // Same zone on both faces: the back hand is the front one reflected through
    // the dial plane and across the vertical axis seen from behind.
    for pair in state.hands {
        let f = position(&scene, pair.front);
        let b = position(&scene, pair.back);
        assert!(approx_eq(f.x, -b.x));
        assert!(approx_eq(f.y, b.y));
        assert!(approx_eq(f.z, -b.z));
    }
}

// ── ticks ─────────────────────────────────────────────────────────────────

#[test]
fn tick_layout_for_sixty() {
    let ticks = generate_ticks(&TickLayout::default());
    assert_eq!(ticks.len(), 60);
    for t in &ticks {
        let expected = match t.index {
            0 => TickCategory::Zero,
            i if i % 5 == 0 => TickCategory::Hour,
            _ => TickCategory::Minute,
        };
        assert_eq!(t.category, expected);
        assert!(approx_eq(t.rotation_z, -(t.index as f32) * PI / 30.0));
    }
}

#[test]
fn bad_tick_count_is_a_config_error() {
    assert_eq!(TickLayout::new(30, 9.0), Err(ConfigError::TickCount(30)));
}

// ── watcher ───────────────────────────────────────────────────────────────

#[test]
fn watcher_counts_boundaries_over_a_minute() {
    let start = TimeSample::new(5, 5, 0);
    let mut w = SecondWatcher::primed(start);
    let mut boundaries = 0;
    for s in 0..=60 {
        // Several frames per second.
        for _ in 0..3 {
            if w.observe(start.plus_seconds(s)) {
                boundaries += 1;
            }
        }
    }
    assert_eq!(boundaries, 60);
}
