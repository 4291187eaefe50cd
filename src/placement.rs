//! The pure placement core: validation and coordinate arithmetic.
//!
//! [`resolve`] turns a [`Placement`] request and a target [`Monitor`] into
//! an absolute [`Destination`].  It performs no I/O and never touches a
//! window, which keeps the contract identical for the blocking and the
//! suspending API surfaces — both wrap this one function.

use crate::types::Monitor;
use serde::{Deserialize, Serialize};

/// How a window should be positioned relative to a monitor's origin.
///
/// Offsets default to zero, which places the window at the monitor's
/// top-left corner.  A zero offset is indistinguishable from an absent
/// one: both add nothing.  `width`/`height` of `None` mean "keep the
/// window's current dimension".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Horizontal offset from the monitor's left edge (pixels).
    pub x: i32,
    /// Vertical offset from the monitor's top edge (pixels).
    pub y: i32,
    /// Resize the window to fill the monitor.  Mutually exclusive with
    /// `width` and `height`.
    pub size_to_monitor: bool,
    /// Explicit target width, or `None` to keep the current width.
    pub width: Option<u32>,
    /// Explicit target height, or `None` to keep the current height.
    pub height: Option<u32>,
}

impl Placement {
    /// Placement at the given offset from the monitor origin, size
    /// unchanged.
    pub fn offset(x: i32, y: i32) -> Self {
        Self { x, y, ..Self::default() }
    }

    /// Placement at the monitor origin, sized to fill the monitor.
    pub fn filling() -> Self {
        Self { size_to_monitor: true, ..Self::default() }
    }
}

/// An absolute move/resize target computed by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Absolute x of the window's top-left corner.
    pub x: i32,
    /// Absolute y of the window's top-left corner.
    pub y: i32,
    /// Target width, or `None` to keep the current width.
    pub width: Option<u32>,
    /// Target height, or `None` to keep the current height.
    pub height: Option<u32>,
}

/// Validation failure for a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// `size_to_monitor` was combined with an explicit dimension.
    #[error("'width' and 'height' are mutually exclusive with 'size_to_monitor'")]
    SizeConflict,
}

/// Compute the absolute destination for `placement` on `monitor`.
///
/// Validation runs before any arithmetic: combining `size_to_monitor` with
/// an explicit `width` or `height` fails with
/// [`PlacementError::SizeConflict`] and callers are guaranteed no window
/// mutation was attempted.
pub fn resolve(monitor: &Monitor, placement: &Placement) -> Result<Destination, PlacementError> {
    if placement.size_to_monitor && (placement.width.is_some() || placement.height.is_some()) {
        return Err(PlacementError::SizeConflict);
    }

    let (width, height) = if placement.size_to_monitor {
        (Some(monitor.size.width), Some(monitor.size.height))
    } else {
        (placement.width, placement.height)
    };

    Ok(Destination {
        x: monitor.position.x + placement.x,
        y: monitor.position.y + placement.y,
        width,
        height,
    })
}

//  Tests
