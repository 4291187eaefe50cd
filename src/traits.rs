//! Capability traits that decouple the placer from any specific window
//! system.
//!
//! Every concrete backend (Hyprland, a test harness, …) implements
//! [`WindowOps`] and [`MonitorSource`].  The
//! [`WindowPlacer`](crate::placer::WindowPlacer) only depends on these
//! abstractions.
//!
//! With the `async` feature enabled, [`AsyncWindowOps`] and
//! [`AsyncMonitorSource`] mirror the same contracts for callers running
//! under a cooperative scheduler.  Both surfaces share the validation and
//! coordinate arithmetic in [`placement`](crate::placement); only the
//! collaborator calls differ in how they wait.

use crate::types::{Monitor, Point, Rect, WindowId};

/// Abstraction over a window system that can inspect and move windows.
///
/// All coordinates are absolute screen coordinates.  Errors are surfaced
/// unchanged to the caller; implementations must not retry or mask
/// platform failures.
pub trait WindowOps {
    /// The error type produced by this backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the currently focused window, or `None` if no window has
    /// focus.
    fn active_window(&self) -> Result<Option<WindowId>, Self::Error>;

    /// Return the bounding rectangle of `window`.
    fn window_rect(&self, window: &WindowId) -> Result<Rect, Self::Error>;

    /// Move `window` so its top-left corner lands at `(x, y)`.
    ///
    /// A `None` dimension leaves that dimension of the window unchanged.
    fn move_window(
        &self,
        window: &WindowId,
        x: i32,
        y: i32,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), Self::Error>;

    /// Return the current pointer position in screen coordinates.
    fn pointer_position(&self) -> Result<Point, Self::Error>;
}

/// Abstraction over a source of monitor geometry snapshots.
pub trait MonitorSource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the monitors the window system knows about.
    ///
    /// At most one monitor should carry the primary flag.
    fn monitors(&self) -> Result<Vec<Monitor>, Self::Error>;
}

/// Suspending variant of [`WindowOps`].
///
/// The contract is identical; every method is a suspension point.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncWindowOps: Send + Sync {
    /// The error type produced by this backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the currently focused window, or `None` if no window has
    /// focus.
    async fn active_window(&self) -> Result<Option<WindowId>, Self::Error>;

    /// Return the bounding rectangle of `window`.
    async fn window_rect(&self, window: &WindowId) -> Result<Rect, Self::Error>;

    /// Move `window` so its top-left corner lands at `(x, y)`.
    ///
    /// A `None` dimension leaves that dimension of the window unchanged.
    async fn move_window(
        &self,
        window: &WindowId,
        x: i32,
        y: i32,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), Self::Error>;

    /// Return the current pointer position in screen coordinates.
    async fn pointer_position(&self) -> Result<Point, Self::Error>;
}

/// Suspending variant of [`MonitorSource`].
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncMonitorSource: Send + Sync {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the monitors the window system knows about.
    async fn monitors(&self) -> Result<Vec<Monitor>, Self::Error>;
}
