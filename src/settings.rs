//! Puzzle size chosen by the player
//!
//! Values outside the allowed ranges are clamped rather than rejected.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BALLS_PER_COLOR, MAX_COLORS, MIN_BALLS_PER_COLOR, MIN_COLORS};

/// Default number of colors when the form field is empty or unreadable
pub const DEFAULT_COLOR_COUNT: usize = 3;
/// Default balls per color when the form field is empty or unreadable
pub const DEFAULT_BALLS_PER_COLOR: usize = 12;

/// Number of colors and balls per color for a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSettings")]
pub struct Settings {
    color_count: usize,
    balls_per_color: usize,
}

/// Unchecked wire form; deserialized values go through `Settings::new`
#[derive(Deserialize)]
struct RawSettings {
    color_count: usize,
    balls_per_color: usize,
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        Settings::new(raw.color_count, raw.balls_per_color)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            balls_per_color: DEFAULT_BALLS_PER_COLOR,
        }
    }
}

impl Settings {
    /// Build settings, clamping both counts into their allowed ranges
    pub fn new(color_count: usize, balls_per_color: usize) -> Self {
        let clamped = Self {
            color_count: color_count.clamp(MIN_COLORS, MAX_COLORS),
            balls_per_color: balls_per_color.clamp(MIN_BALLS_PER_COLOR, MAX_BALLS_PER_COLOR),
        };
        if clamped.color_count != color_count || clamped.balls_per_color != balls_per_color {
            log::warn!(
                "Settings {}x{} out of range, using {}x{}",
                color_count,
                balls_per_color,
                clamped.color_count,
                clamped.balls_per_color
            );
        }
        clamped
    }

    /// Parse the two text inputs of the settings form
    ///
    /// Empty or non-numeric fields fall back to the defaults, negative
    /// numbers clamp to the minimum.
    pub fn from_form(color_count: &str, balls_per_color: &str) -> Self {
        Self::new(
            parse_count(color_count, DEFAULT_COLOR_COUNT),
            parse_count(balls_per_color, DEFAULT_BALLS_PER_COLOR),
        )
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn balls_per_color(&self) -> usize {
        self.balls_per_color
    }

    /// Population size for these settings
    pub fn total_balls(&self) -> usize {
        self.color_count * self.balls_per_color
    }
}

/// Read a leading integer the way a browser number field would hand it over
fn parse_count(text: &str, default: usize) -> usize {
    let text = text.trim();
    if text.is_empty() {
        return default;
    }

    let digits_end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    match text[..digits_end].parse::<i64>() {
        Ok(n) if n <= 0 => 0,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        // Too many digits still names a count; let clamping bound it
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => 0,
        Err(_) => default,
    }
}
