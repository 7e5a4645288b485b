//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_DISTANCE_EPSILON, REFERENCE_FRAME_MS};

/// 2D position in world space (pixels). The world is unbounded.
/// x = right, y = down (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per reference frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of playing ticks advanced so far.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
    /// Duration of the most recent tick in milliseconds.
    pub frame_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Angle from this position toward another (radians, atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Unit vector toward `other` plus the distance to it.
    ///
    /// Below `MIN_DISTANCE_EPSILON` the direction is the zero vector.
    pub fn direction_to(&self, other: &Position) -> (DVec2, f64) {
        let delta = other.as_dvec2() - self.as_dvec2();
        let distance = delta.length();
        if distance < MIN_DISTANCE_EPSILON {
            (DVec2::ZERO, distance)
        } else {
            (delta / distance, distance)
        }
    }

    /// Point at `radius` from this position along `angle`.
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Position {
        Position::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    /// Shortest distance from this point to the segment `start..end`.
    pub fn distance_to_segment(&self, start: &Position, end: &Position) -> f64 {
        let a = start.as_dvec2();
        let ab = end.as_dvec2() - a;
        let len_sq = ab.length_squared();
        if len_sq < MIN_DISTANCE_EPSILON * MIN_DISTANCE_EPSILON {
            return self.distance_to(end);
        }
        let t = ((self.as_dvec2() - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.as_dvec2().distance(a + ab * t)
    }

    /// Advance by `velocity` scaled to the frame length.
    pub fn integrate(&mut self, velocity: &Velocity, frame_scale: f64) {
        self.x += velocity.x * frame_scale;
        self.y += velocity.y * frame_scale;
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Velocity of magnitude `speed` along `angle`.
    pub fn from_polar(speed: f64, angle: f64) -> Self {
        Self::new(angle.cos() * speed, angle.sin() * speed)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Heading in radians (atan2 convention).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Multiply by `factor` once per reference frame.
    pub fn decay(&mut self, factor: f64, frame_scale: f64) {
        let k = factor.powf(frame_scale);
        self.x *= k;
        self.y *= k;
    }
}

impl SimTime {
    /// Ratio of the last tick's length to the reference frame.
    pub fn frame_scale(&self) -> f64 {
        self.frame_ms / REFERENCE_FRAME_MS
    }

    /// Advance by one tick of `frame_ms` milliseconds.
    pub fn advance(&mut self, frame_ms: f64) {
        self.tick += 1;
        self.frame_ms = frame_ms;
        self.elapsed_ms += frame_ms;
    }
}
