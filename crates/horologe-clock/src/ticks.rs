use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::error::ConfigError;

/// Visual class of a tick mark.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickCategory {
    /// Twelve o'clock.
    Zero,
    Hour,
    Minute,
}

/// Where one tick sits on the dial.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickPlacement {
    pub index: u32,
    pub category: TickCategory,
    /// Center of the tick in the dial plane.
    pub offset: Vec2,
    /// Spin about the dial axis that keeps the tick radial.
    pub rotation_z: f32,
}

/// Number of ticks and the radius they sit on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickLayout {
    count: u32,
    radius: f32,
}

impl Default for TickLayout {
    fn default() -> Self {
        Self { count: 60, radius: 9.0 }
    }
}

impl TickLayout {
    /// `count` must be a positive multiple of 12 so every hour lands on a tick.
    pub fn new(count: u32, radius: f32) -> Result<Self, ConfigError> {
        if count == 0 || count % 12 != 0 {
            return Err(ConfigError::TickCount(count));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::TickRadius(radius));
        }
        Ok(Self { count, radius })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angle between neighbouring ticks.
    pub fn spacing(&self) -> f32 {
        TAU / self.count as f32
    }

    fn category(&self, index: u32) -> TickCategory {
        if index == 0 {
            TickCategory::Zero
        } else if index % (self.count / 12) == 0 {
            TickCategory::Hour
        } else {
            TickCategory::Minute
        }
    }
}

/// Places every tick clockwise from twelve o'clock.
pub fn generate_ticks(layout: &TickLayout) -> Vec<TickPlacement> {
    let spacing = layout.spacing();
    let r = layout.radius;

    (0..layout.count)
        .map(|index| {
            let angle = index as f32 * spacing;
            let phi = -angle + FRAC_PI_2;
            TickPlacement {
                index,
                category: layout.category(index),
                offset: Vec2::new(r * phi.cos(), r * phi.sin()),
                rotation_z: -angle,
            }
        })
        .collect()
}
