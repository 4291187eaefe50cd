//! Geometry vocabulary shared by all components.
//!
//! This module defines the value types that the placement logic and the
//! backends exchange: [`Point`], [`Size`], [`Rect`], [`Monitor`], and
//! [`WindowId`].  It also provides the pure monitor-selection queries
//! ([`monitor_for_rect`], [`monitor_at_point`], [`primary_monitor`]) so
//! their semantics live in one testable place instead of being re-derived
//! by every backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in absolute screen coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// An axis-aligned rectangle in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Exclusive right edge.
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Whether `point` lies inside this rectangle.
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive,
    /// so adjacent monitors never both claim a point on their shared edge.
    pub fn contains(&self, point: Point) -> bool {
        (point.x as i64) >= self.x as i64
            && (point.x as i64) < self.right()
            && (point.y as i64) >= self.y as i64
            && (point.y as i64) < self.bottom()
    }

    /// Area of the intersection with `other`, in square pixels.
    ///
    /// Returns `0` when the rectangles do not overlap.
    pub fn intersection_area(&self, other: &Rect) -> u64 {
        let w = self.right().min(other.right()) - (self.x as i64).max(other.x as i64);
        let h = self.bottom().min(other.bottom()) - (self.y as i64).max(other.y as i64);
        if w <= 0 || h <= 0 {
            0
        } else {
            (w as u64) * (h as u64)
        }
    }

    /// Squared euclidean distance from `point` to the nearest point of this
    /// rectangle.  Zero when the point is inside.
    pub fn distance_squared(&self, point: Point) -> u64 {
        let px = point.x as i64;
        let py = point.y as i64;
        // Degenerate (zero-size) rects collapse to their origin.
        let cx = px.clamp(self.x as i64, (self.right() - 1).max(self.x as i64));
        let cy = py.clamp(self.y as i64, (self.bottom() - 1).max(self.y as i64));
        let dx = (px - cx).unsigned_abs();
        let dy = (py - cy).unsigned_abs();
        dx * dx + dy * dy
    }
}

/// Immutable snapshot of one display monitor.
///
/// A `Monitor` describes where a display sits on the virtual desktop at the
/// moment it was queried; it has no lifecycle beyond the query that produced
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Name the window manager uses for this monitor (e.g. `"DP-1"`).
    pub name: String,
    /// Top-left corner on the virtual desktop.
    pub position: Point,
    /// Resolution in pixels.
    pub size: Size,
    /// Whether this is the designated primary monitor.
    #[serde(default)]
    pub primary: bool,
}

impl Monitor {
    /// The monitor's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{}+{}+{}",
            self.name, self.size.width, self.size.height, self.position.x, self.position.y
        )
    }
}

/// Opaque platform handle for an on-screen window.
///
/// On Hyprland this is the client address string (e.g. `"0x55d2f0a0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//  Monitor selection

/// Return the primary monitor, falling back to the first listed monitor
/// when none carries the primary flag.  `None` only for an empty list.
pub fn primary_monitor(monitors: &[Monitor]) -> Option<&Monitor> {
    monitors.iter().find(|m| m.primary).or_else(|| monitors.first())
}

/// Return the monitor with the greatest intersection area with `rect`.
///
/// If `rect` intersects no monitor, falls back to the primary monitor.
/// Returns `None` only when `monitors` is empty.  Ties are resolved in
/// favour of the earlier-listed monitor.
pub fn monitor_for_rect<'a>(monitors: &'a [Monitor], rect: &Rect) -> Option<&'a Monitor> {
    let mut best: Option<(&Monitor, u64)> = None;
    for m in monitors {
        let area = m.rect().intersection_area(rect);
        if area > 0 && best.map_or(true, |(_, a)| area > a) {
            best = Some((m, area));
        }
    }
    match best {
        Some((m, _)) => Some(m),
        None => primary_monitor(monitors),
    }
}

/// Return the monitor containing `point`.
///
/// If no monitor contains the point, falls back to the nearest monitor by
/// rectangle distance.  Returns `None` only when `monitors` is empty.
pub fn monitor_at_point(monitors: &[Monitor], point: Point) -> Option<&Monitor> {
    if let Some(m) = monitors.iter().find(|m| m.rect().contains(point)) {
        return Some(m);
    }
    monitors.iter().min_by_key(|m| m.rect().distance_squared(point))
}

//  Tests
