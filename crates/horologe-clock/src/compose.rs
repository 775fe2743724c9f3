//! Scene composition and hand placement.
//!
//! Builds the dial into an engine [`Scene`] and keeps the hands in step with
//! the wall clock. The dial lies in the XY plane facing +Z; every hand turns
//! about the Z axis through the dial center.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat2, Quat, Vec2, Vec3};

use horologe_engine::geometry::{cuboid, cylinder, lathe, sphere, MeshId, MeshLibrary};
use horologe_engine::paint::Color;
use horologe_engine::scene::{Node, NodeId, Scene, Transform};

use crate::angles::{Direction, HandAngles};
use crate::config::{ClockConfig, HandStyle};
use crate::ticks::{generate_ticks, TickCategory};
use crate::time::TimeSample;
use crate::watcher::SecondWatcher;

const PANEL_RADIUS: f32 = 10.0;
const PANEL_THICKNESS: f32 = 0.9;
const RING_RADIUS: f32 = PANEL_RADIUS + 0.05;
const RING_HALF_HEIGHT: f32 = 1.0;
const ROUND_SEGMENTS: u32 = 64;

const TICK_WIDTH: f32 = 0.1;
const TICK_HEIGHT: f32 = 1.0;
const ZERO_TICK_EXTRA: f32 = 0.5;

// Primitives are built upright (axis +Y); this tips them onto the dial.
const DIAL_TIP: f32 = FRAC_PI_2;

fn tipped(position: Vec3) -> Transform {
    let mut t = Transform::from_position(position);
    t.rotate_local_x(DIAL_TIP);
    t
}

// ── rotation ──────────────────────────────────────────────────────────────

/// What [`rotate_about_center`] did to a transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationDelta {
    /// Position after the rotation.
    pub position: Vec3,
    /// Angle added to the orientation about scene +Z.
    pub orientation_delta: f32,
}

/// Turns a node about the Z axis through the scene origin.
///
/// The position's XY part is rotated by the 2D matrix for `angle` (Z is
/// kept) and the orientation is spun by the same angle, so the node keeps
/// pointing away from the center.
pub fn rotate_about_center(transform: &mut Transform, angle: f32) -> RotationDelta {
    let p = transform.position;
    let xy = Mat2::from_angle(angle) * Vec2::new(p.x, p.y);
    transform.position = Vec3::new(xy.x, xy.y, p.z);
    transform.rotate_world_z(angle);

    RotationDelta {
        position: transform.position,
        orientation_delta: angle,
    }
}

// ── hands ─────────────────────────────────────────────────────────────────

/// Mesh plus style for one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    pub mesh: MeshId,
    pub style: HandStyle,
}

/// Front and back copies of one hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HandPair {
    pub front: NodeId,
    pub back: NodeId,
}

/// Adds the two copies of a hand at twelve o'clock, front at `+depth` and
/// back at `-depth`. Both share the same mesh.
pub fn make_mirrored_hand(scene: &mut Scene, hand: &HandSpec) -> HandPair {
    let style = &hand.style;
    let place = |z: f32| {
        Node::new(hand.mesh, style.color)
            .with_transform(tipped(Vec3::new(0.0, style.length_offset, z)).with_scale(style.scale))
    };

    HandPair {
        front: scene.add(place(style.depth)),
        back: scene.add(place(-style.depth)),
    }
}

// ── dial ──────────────────────────────────────────────────────────────────

/// Static parts of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    pub panel: NodeId,
    pub ring: NodeId,
    pub blob: NodeId,
    pub ticks: Vec<NodeId>,
}

/// Everything the controller needs to keep the hands moving.
///
/// `hands` and both [`HandAngles`] are ordered seconds, minutes, hours. The
/// angles track what has been applied to the scene so far, reduced into one
/// turn. They are derived from the angles set by the last
/// [`apply_initial`](Self::apply_initial) plus the steps taken since.
#[derive(Debug, Clone)]
pub struct ClockDisplayState {
    pub dial: Dial,
    pub hands: [HandPair; 3],
    pub front: HandAngles,
    pub back: HandAngles,
    pub watcher: SecondWatcher,
    origin: (HandAngles, HandAngles),
    steps: u64,
    back_zone_offset_hours: i32,
}

/// Builds the dial, ticks and both hand sets into `scene`.
///
/// Hands start at twelve o'clock; call [`ClockDisplayState::apply_initial`]
/// to set the time. `config` is expected to be validated.
pub fn compose_clock(
    scene: &mut Scene,
    meshes: &mut MeshLibrary,
    config: &ClockConfig,
) -> ClockDisplayState {
    let palette = &config.palette;

    let panel_mesh = meshes.insert(cylinder(
        PANEL_RADIUS,
        PANEL_RADIUS,
        PANEL_THICKNESS,
        ROUND_SEGMENTS,
    ));
    let panel = scene.add(Node::new(panel_mesh, palette.panel).with_transform(tipped(Vec3::ZERO)));

    // Zig-zag profile sweeps a double-walled band around the panel rim.
    let profile = [
        Vec2::new(RING_RADIUS, RING_HALF_HEIGHT),
        Vec2::new(RING_RADIUS, -RING_HALF_HEIGHT),
        Vec2::new(RING_RADIUS, RING_HALF_HEIGHT),
        Vec2::new(RING_RADIUS, -RING_HALF_HEIGHT),
        Vec2::new(RING_RADIUS, RING_HALF_HEIGHT),
    ];
    let ring_mesh = meshes.insert(lathe(&profile, ROUND_SEGMENTS));
    let ring = scene.add(Node::new(ring_mesh, palette.ring).with_transform(tipped(Vec3::ZERO)));

    let blob_mesh = meshes.insert(sphere(PANEL_RADIUS / 16.0, ROUND_SEGMENTS, ROUND_SEGMENTS));
    let blob = scene.add(Node::new(blob_mesh, palette.blob).with_transform(tipped(Vec3::ZERO)));

    let ticks = add_ticks(scene, meshes, config);

    let second = HandSpec {
        mesh: meshes.insert(cuboid(0.1, 0.015, 4.5)),
        style: config.second_hand,
    };
    let minute = HandSpec {
        mesh: meshes.insert(sphere(0.036, 64, 32)),
        style: config.minute_hand,
    };
    let hour = HandSpec {
        mesh: meshes.insert(sphere(0.025, 64, 32)),
        style: config.hour_hand,
    };

    let hands = [
        make_mirrored_hand(scene, &second),
        make_mirrored_hand(scene, &minute),
        make_mirrored_hand(scene, &hour),
    ];

    log::debug!(
        "composed clock: {} nodes, {} meshes, {} ticks",
        scene.len(),
        meshes.len(),
        ticks.len()
    );

    ClockDisplayState {
        dial: Dial { panel, ring, blob, ticks },
        hands,
        front: HandAngles::ZERO,
        back: HandAngles::ZERO,
        watcher: SecondWatcher::new(),
        origin: (HandAngles::ZERO, HandAngles::ZERO),
        steps: 0,
        back_zone_offset_hours: config.back_zone_offset_hours,
    }
}

fn add_ticks(scene: &mut Scene, meshes: &mut MeshLibrary, config: &ClockConfig) -> Vec<NodeId> {
    let layout = &config.tick_layout;
    let palette = &config.palette;
    let depth = layout.radius() / 9.0;

    let mut mesh_for = |height: f32| meshes.insert(cuboid(TICK_WIDTH, height, depth));
    let zero = (mesh_for(TICK_HEIGHT + ZERO_TICK_EXTRA), palette.zero_tick);
    let hour = (mesh_for(TICK_HEIGHT), palette.hour_tick);
    let minute = (mesh_for(TICK_HEIGHT - ZERO_TICK_EXTRA), palette.minute_tick);

    generate_ticks(layout)
        .into_iter()
        .map(|tick| {
            let (mesh, color): (MeshId, Color) = match tick.category {
                TickCategory::Zero => zero,
                TickCategory::Hour => hour,
                TickCategory::Minute => minute,
            };
            let transform = Transform::from_position(tick.offset.extend(0.0))
                .with_rotation(Quat::from_rotation_z(tick.rotation_z));
            scene.add(Node::new(mesh, color).with_transform(transform))
        })
        .collect()
}

impl ClockDisplayState {
    /// Turns both hand sets to the absolute angles for `sample` (front zone)
    /// and primes the second watcher.
    ///
    /// Each hand turns the short way from where it was, so calling this
    /// again re-synchronizes a display that has missed seconds.
    pub fn apply_initial(&mut self, scene: &mut Scene, sample: TimeSample) {
        let back_sample = sample.shift_hours(self.back_zone_offset_hours);
        let front = HandAngles::from_time(sample, Direction::Front).wrapped();
        let back = HandAngles::from_time(back_sample, Direction::Back).wrapped();

        self.turn(scene, shortest_turn(self.front, front), shortest_turn(self.back, back));
        self.front = front;
        self.back = back;
        self.origin = (front, back);
        self.steps = 0;
        self.watcher = SecondWatcher::primed(sample);

        log::debug!("clock set to {sample} (back face {back_sample})");
    }

    /// Advances every hand one second if `sample` crossed a second boundary.
    ///
    /// Returns `true` when a step was applied.
    pub fn tick(&mut self, scene: &mut Scene, sample: TimeSample) -> bool {
        if !self.watcher.observe(sample) {
            return false;
        }

        self.turn(
            scene,
            HandAngles::step(Direction::Front),
            HandAngles::step(Direction::Back),
        );
        self.steps += 1;
        self.front = self.origin.0.advance_seconds(self.steps, Direction::Front);
        self.back = self.origin.1.advance_seconds(self.steps, Direction::Back);

        log::trace!("second step at {sample}");
        true
    }

    pub fn back_zone_offset_hours(&self) -> i32 {
        self.back_zone_offset_hours
    }

    fn turn(&self, scene: &mut Scene, front: HandAngles, back: HandAngles) {
        for ((pair, f), b) in self.hands.iter().zip(front.to_array()).zip(back.to_array()) {
            for (id, angle) in [(pair.front, f), (pair.back, b)] {
                match scene.get_mut(id) {
                    Some(node) => {
                        rotate_about_center(&mut node.transform, angle);
                    }
                    None => log::warn!("hand node {id:?} missing from scene"),
                }
            }
        }
    }
}

/// Per-hand rotation from `from` to `to`, reduced into `(-π, π]`.
fn shortest_turn(from: HandAngles, to: HandAngles) -> HandAngles {
    let reduce = |d: f32| {
        let d = d.rem_euclid(TAU);
        if d > PI { d - TAU } else { d }
    };
    HandAngles {
        seconds: reduce(to.seconds - from.seconds),
        minutes: reduce(to.minutes - from.minutes),
        hours: reduce(to.hours - from.hours),
    }
}
