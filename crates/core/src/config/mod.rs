use std::fs;
use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::object::Color;
use crate::Result;

/// Pause durations and animation run-time presets, in seconds.
///
/// These are intentionally simple defaults; they are guidelines for pacing,
/// not strict rules, and can be tweaked as the visual style evolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pacing {
    /// Short pauses for small beats/gestures.
    pub pause_short: f64,
    /// Medium pauses for letting an idea land.
    pub pause_med: f64,
    /// Longer pauses for important visuals / narration beats.
    pub pause_long: f64,
    pub anim_fast: f64,
    pub anim_med: f64,
    pub anim_slow: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pause_short: 0.5,
            pause_med: 1.0,
            pause_long: 2.0,
            anim_fast: 0.7,
            anim_med: 1.2,
            anim_slow: 1.8,
        }
    }
}

/// Logical coordinate ranges for wide shots, assuming a standard 16:9 frame
/// (e.g. 1280x720, 1920x1080): 8 units tall, about 14.2 units wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            x_range: (-7.0, 7.0),
            y_range: (-4.0, 4.0),
        }
    }
}

impl Layout {
    pub fn width(&self) -> f64 {
        self.x_range.1 - self.x_range.0
    }

    pub fn height(&self) -> f64 {
        self.y_range.1 - self.y_range.0
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.x_range.0 + self.x_range.1) / 2.0,
            (self.y_range.0 + self.y_range.1) / 2.0,
        )
    }

    /// Point on the vertical center line, `buff` units below the top edge.
    pub fn top_edge(&self, buff: f64) -> Point {
        Point::new(0.0, self.y_range.1 - buff)
    }

    /// Point on the vertical center line, `buff` units above the bottom edge.
    pub fn bottom_edge(&self, buff: f64) -> Point {
        Point::new(0.0, self.y_range.0 + buff)
    }
}

/// Top-level configuration shared by every beat. Fixed at startup and never
/// mutated while a phase runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    pub pacing: Pacing,
    pub layout: Layout,
    /// Background color for most scenes (individual beats may override).
    pub background: Color,
    /// Seed for the intro starfield layout. Kept explicit so tests and the
    /// CLI can pin or vary it per invocation.
    pub starfield_seed: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            layout: Layout::default(),
            background: Color::BLACK,
            starfield_seed: 1,
        }
    }
}

impl StageConfig {
    /// Loads a configuration preset from a JSON file.
    pub fn from_preset(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_defaults_preserve_ordering() {
        let pacing = Pacing::default();

        for value in [
            pacing.pause_short,
            pacing.pause_med,
            pacing.pause_long,
            pacing.anim_fast,
            pacing.anim_med,
            pacing.anim_slow,
        ] {
            assert!(value > 0.0);
        }
        assert!(pacing.pause_long >= pacing.pause_med);
        assert!(pacing.pause_med >= pacing.pause_short);
        assert!(pacing.anim_slow >= pacing.anim_med);
        assert!(pacing.anim_med >= pacing.anim_fast);
    }

    #[test]
    fn layout_defaults_form_a_wide_frame() {
        let layout = Layout::default();

        assert!(layout.x_range.0 < layout.x_range.1);
        assert!(layout.y_range.0 < layout.y_range.1);
        // 16:9 wide shot: wider than tall, centered on the origin.
        assert!(layout.width() > layout.height());
        assert_eq!(layout.center(), Point::ORIGIN);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = StageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: StageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.background, config.background);
        assert_eq!(back.starfield_seed, config.starfield_seed);
        assert_eq!(back.pacing.pause_long, config.pacing.pause_long);
    }
}
