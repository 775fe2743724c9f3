use glam::Vec3;

use horologe_engine::paint::Color;

use crate::error::ConfigError;
use crate::ticks::TickLayout;
use crate::time::check_offset;

/// Shape and placement of one hand.
///
/// `length_offset` is the distance from the dial center to the hand's own
/// center at twelve o'clock; `depth` is how far in front of the dial the
/// front copy floats (the back copy sits at `-depth`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub scale: Vec3,
    pub length_offset: f32,
    pub depth: f32,
    pub color: Color,
}

/// Colors of the static dial parts and tick categories.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub ring: Color,
    pub blob: Color,
    pub zero_tick: Color,
    pub hour_tick: Color,
    pub minute_tick: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            panel: Color::BLACK,
            ring: Color::from_srgb_u8(0x71, 0x80, 0x93, 0xff),
            blob: Color::from_srgb_u8(0xc2, 0x36, 0x16, 0xff),
            zero_tick: Color::from_srgb_u8(0xff, 0x00, 0x00, 0xff),
            hour_tick: Color::from_srgb_u8(0xff, 0xff, 0x00, 0xff),
            minute_tick: Color::from_srgb_u8(0x00, 0x80, 0x00, 0xff),
        }
    }
}

/// Everything the scene composition needs to build and drive the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub tick_layout: TickLayout,
    /// Zone shown on the front face.
    pub front_utc_offset_hours: i32,
    /// How far ahead of the front face the back face runs.
    pub back_zone_offset_hours: i32,

    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,

    pub palette: Palette,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_layout: TickLayout::default(),
            front_utc_offset_hours: 1,
            back_zone_offset_hours: 1,
            hour_hand: HandStyle {
                scale: Vec3::new(2.0, 0.01, 100.0),
                length_offset: 2.0,
                depth: 0.5,
                color: Color::from_srgb_u8(0x00, 0x80, 0x00, 0xff),
            },
            minute_hand: HandStyle {
                scale: Vec3::new(1.5, 0.01, 120.0),
                length_offset: 4.0,
                depth: 0.6,
                color: Color::from_srgb_u8(0x80, 0x00, 0x80, 0xff),
            },
            second_hand: HandStyle {
                scale: Vec3::new(0.5, 0.01, 2.1),
                length_offset: 4.5,
                depth: 0.61,
                color: Color::from_srgb_u8(0x80, 0x80, 0x80, 0xff),
            },
            palette: Palette::default(),
        }
    }
}

impl ClockConfig {
    /// Checks every field a running clock relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        TickLayout::new(self.tick_layout.count(), self.tick_layout.radius())?;

        check_offset("front UTC", self.front_utc_offset_hours)?;
        check_offset("back zone", self.back_zone_offset_hours)?;

        for (hand, style) in [
            ("hour", &self.hour_hand),
            ("minute", &self.minute_hand),
            ("second", &self.second_hand),
        ] {
            if !style.depth.is_finite() {
                return Err(ConfigError::HandDepth { hand, depth: style.depth });
            }
        }

        Ok(())
    }

    /// Offset from UTC of the zone shown on the back face.
    pub fn back_utc_offset_hours(&self) -> i32 {
        self.front_utc_offset_hours + self.back_zone_offset_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(ClockConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_zones_are_one_hour_apart() {
        let c = ClockConfig::default();
        assert_eq!(c.back_utc_offset_hours(), 2);
    }

    #[test]
    fn zone_offsets_are_bounded() {
        let c = ClockConfig { back_zone_offset_hours: 24, ..ClockConfig::default() };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZoneOffset { which: "back zone", hours: 24 })
        );

        let c = ClockConfig { front_utc_offset_hours: -30, ..ClockConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::ZoneOffset { which: "front UTC", .. })));
    }

    #[test]
    fn non_finite_depth_rejected() {
        let mut c = ClockConfig::default();
        c.minute_hand.depth = f32::INFINITY;
        assert!(matches!(c.validate(), Err(ConfigError::HandDepth { hand: "minute", .. })));
    }

    #[test]
    fn palette_matches_css_names() {
        let p = Palette::default();
        assert_eq!(Color::named("green"), Ok(p.minute_tick));
        assert_eq!(Color::named("red"), Ok(p.zero_tick));
        assert_eq!(Color::from_hex("#718093"), Ok(p.ring));
    }
}
