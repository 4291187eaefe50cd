//! The composition layer that ties window and monitor capabilities
//! together.
//!
//! [`WindowPlacer`] owns one [`WindowOps`] and one [`MonitorSource`]
//! implementation and exposes the three placement operations: resolve the
//! monitor of a window, resolve the monitor under the pointer, and move a
//! window onto a monitor.  [`AsyncWindowPlacer`] offers the same
//! operations under the suspending contract.
//!
//! Neither placer holds state across calls: every invocation queries fresh
//! snapshots from its collaborators.

use crate::placement::{self, Placement, PlacementError};
use crate::traits::{MonitorSource, WindowOps};
use crate::types::{self, Monitor, WindowId};
use log::debug;

/// Errors from the placement operations.
///
/// Collaborator failures are wrapped unmodified; the original error stays
/// reachable through [`source`](std::error::Error::source).
#[derive(Debug, thiserror::Error)]
pub enum PlacerError {
    /// The placement request was invalid.  No window mutation was
    /// attempted.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// The window backend failed.
    #[error("window backend error: {0}")]
    Windows(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The monitor backend failed.
    #[error("monitor backend error: {0}")]
    Monitors(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An operation needed a focused window but none exists.
    #[error("no window is focused")]
    NoWindow,

    /// The monitor backend reported an empty monitor list.
    #[error("the window system reported no monitors")]
    NoMonitors,
}

impl PlacerError {
    fn windows(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Windows(Box::new(e))
    }

    fn monitors(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Monitors(Box::new(e))
    }
}

/// Monitor-aware window placement over blocking collaborators.
///
/// # Typical usage
///
/// ```ignore
/// let placer = WindowPlacer::new(HyprlandBackend::new(), HyprlandBackend::new());
/// let monitor = placer.monitor_at_pointer()?;
/// placer.move_to_monitor(&window, &monitor, &Placement::filling())?;
/// ```
pub struct WindowPlacer<W, M> {
    windows: W,
    monitors: M,
}

impl<W: WindowOps, M: MonitorSource> WindowPlacer<W, M> {
    /// Create a placer from a window backend and a monitor source.
    ///
    /// The two parameters may be (references to) the same value when one
    /// backend implements both traits.
    pub fn new(windows: W, monitors: M) -> Self {
        Self { windows, monitors }
    }

    /// Query the monitor list, rejecting an empty result.
    fn monitor_list(&self) -> Result<Vec<Monitor>, PlacerError> {
        let monitors = self.monitors.monitors().map_err(PlacerError::monitors)?;
        if monitors.is_empty() {
            return Err(PlacerError::NoMonitors);
        }
        Ok(monitors)
    }

    /// Return the currently focused window.
    pub fn active_window(&self) -> Result<WindowId, PlacerError> {
        self.windows
            .active_window()
            .map_err(PlacerError::windows)?
            .ok_or(PlacerError::NoWindow)
    }

    /// Return the monitors the window system knows about.
    ///
    /// Fails with [`PlacerError::NoMonitors`] on an empty list.
    pub fn monitors(&self) -> Result<Vec<Monitor>, PlacerError> {
        self.monitor_list()
    }

    /// Return the monitor with the greatest intersection with `window`'s
    /// bounding rectangle, falling back to the primary monitor when the
    /// window intersects none.
    pub fn window_monitor(&self, window: &WindowId) -> Result<Monitor, PlacerError> {
        let rect = self.windows.window_rect(window).map_err(PlacerError::windows)?;
        let monitors = self.monitor_list()?;
        types::monitor_for_rect(&monitors, &rect)
            .cloned()
            .ok_or(PlacerError::NoMonitors)
    }

    /// Return the monitor under the current pointer position.
    pub fn monitor_at_pointer(&self) -> Result<Monitor, PlacerError> {
        let pointer = self.windows.pointer_position().map_err(PlacerError::windows)?;
        let monitors = self.monitor_list()?;
        types::monitor_at_point(&monitors, pointer)
            .cloned()
            .ok_or(PlacerError::NoMonitors)
    }

    /// Move `window` onto `monitor` as described by `placement`.
    ///
    /// Validation happens before anything else: on a
    /// [`PlacementError::SizeConflict`] the window backend is never
    /// called, so the window is guaranteed unmodified.
    pub fn move_to_monitor(
        &self,
        window: &WindowId,
        monitor: &Monitor,
        placement: &Placement,
    ) -> Result<(), PlacerError> {
        let dest = placement::resolve(monitor, placement)?;
        debug!(
            "moving {} to {} at ({}, {})",
            window, monitor.name, dest.x, dest.y
        );
        self.windows
            .move_window(window, dest.x, dest.y, dest.width, dest.height)
            .map_err(PlacerError::windows)
    }
}

//  Suspending surface

/// Monitor-aware window placement over suspending collaborators.
///
/// Identical validation and arithmetic to [`WindowPlacer`]; the only
/// difference is that collaborator calls are awaited instead of blocking.
/// Monitor selection itself never suspends.
#[cfg(feature = "async")]
pub struct AsyncWindowPlacer<W, M> {
    windows: W,
    monitors: M,
}

#[cfg(feature = "async")]
impl<W, M> AsyncWindowPlacer<W, M>
where
    W: crate::traits::AsyncWindowOps,
    M: crate::traits::AsyncMonitorSource,
{
    /// Create a placer from a window backend and a monitor source.
    pub fn new(windows: W, monitors: M) -> Self {
        Self { windows, monitors }
    }

    async fn monitor_list(&self) -> Result<Vec<Monitor>, PlacerError> {
        let monitors = self.monitors.monitors().await.map_err(PlacerError::monitors)?;
        if monitors.is_empty() {
            return Err(PlacerError::NoMonitors);
        }
        Ok(monitors)
    }

    /// Return the currently focused window.
    pub async fn active_window(&self) -> Result<WindowId, PlacerError> {
        self.windows
            .active_window()
            .await
            .map_err(PlacerError::windows)?
            .ok_or(PlacerError::NoWindow)
    }

    /// Return the monitors the window system knows about.
    ///
    /// Fails with [`PlacerError::NoMonitors`] on an empty list.
    pub async fn monitors(&self) -> Result<Vec<Monitor>, PlacerError> {
        self.monitor_list().await
    }

    /// Return the monitor with the greatest intersection with `window`'s
    /// bounding rectangle, falling back to the primary monitor.
    pub async fn window_monitor(&self, window: &WindowId) -> Result<Monitor, PlacerError> {
        let rect = self
            .windows
            .window_rect(window)
            .await
            .map_err(PlacerError::windows)?;
        let monitors = self.monitor_list().await?;
        types::monitor_for_rect(&monitors, &rect)
            .cloned()
            .ok_or(PlacerError::NoMonitors)
    }

    /// Return the monitor under the current pointer position.
    pub async fn monitor_at_pointer(&self) -> Result<Monitor, PlacerError> {
        let pointer = self
            .windows
            .pointer_position()
            .await
            .map_err(PlacerError::windows)?;
        let monitors = self.monitor_list().await?;
        types::monitor_at_point(&monitors, pointer)
            .cloned()
            .ok_or(PlacerError::NoMonitors)
    }

    /// Move `window` onto `monitor` as described by `placement`.
    ///
    /// Validation precedes the first suspension point; on a size conflict
    /// nothing is awaited and the window stays unmodified.
    pub async fn move_to_monitor(
        &self,
        window: &WindowId,
        monitor: &Monitor,
        placement: &Placement,
    ) -> Result<(), PlacerError> {
        let dest = placement::resolve(monitor, placement)?;
        debug!(
            "moving {} to {} at ({}, {})",
            window, monitor.name, dest.x, dest.y
        );
        self.windows
            .move_window(window, dest.x, dest.y, dest.width, dest.height)
            .await
            .map_err(PlacerError::windows)
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Rect, Size};
    use std::cell::RefCell;

    #[derive(Debug, thiserror::Error)]
    #[error("fake backend error")]
    struct FakeError;

    /// Recorded arguments of one `move_window` call.
    type MoveCall = (WindowId, i32, i32, Option<u32>, Option<u32>);

    /// Window backend double with scriptable answers and a move log.
    struct FakeWindows {
        active: Option<WindowId>,
        rect: Rect,
        pointer: Point,
        moves: RefCell<Vec<MoveCall>>,
    }

    impl Default for FakeWindows {
        fn default() -> Self {
            Self {
                active: Some(WindowId("0xabc".into())),
                rect: Rect { x: 100, y: 100, width: 800, height: 600 },
                pointer: Point { x: 0, y: 0 },
                moves: RefCell::new(Vec::new()),
            }
        }
    }

    impl WindowOps for FakeWindows {
        type Error = FakeError;

        fn active_window(&self) -> Result<Option<WindowId>, FakeError> {
            Ok(self.active.clone())
        }

        fn window_rect(&self, _window: &WindowId) -> Result<Rect, FakeError> {
            Ok(self.rect)
        }

        fn move_window(
            &self,
            window: &WindowId,
            x: i32,
            y: i32,
            width: Option<u32>,
            height: Option<u32>,
        ) -> Result<(), FakeError> {
            self.moves.borrow_mut().push((window.clone(), x, y, width, height));
            Ok(())
        }

        fn pointer_position(&self) -> Result<Point, FakeError> {
            Ok(self.pointer)
        }
    }

    /// Monitor source double serving a fixed list.
    struct FakeMonitors(Vec<Monitor>);

    impl MonitorSource for FakeMonitors {
        type Error = FakeError;

        fn monitors(&self) -> Result<Vec<Monitor>, FakeError> {
            Ok(self.0.clone())
        }
    }

    fn monitor(name: &str, x: i32, primary: bool) -> Monitor {
        Monitor {
            name: name.into(),
            position: Point { x, y: 0 },
            size: Size { width: 1920, height: 1080 },
            primary,
        }
    }

    fn dual() -> FakeMonitors {
        FakeMonitors(vec![monitor("DP-1", 0, true), monitor("DP-2", 1920, false)])
    }

    fn win() -> WindowId {
        WindowId("0xabc".into())
    }

    #[test]
    fn move_with_defaults_lands_on_monitor_origin() {
        let placer = WindowPlacer::new(FakeWindows::default(), dual());
        let target = monitor("DP-2", 1920, false);
        placer.move_to_monitor(&win(), &target, &Placement::default()).unwrap();

        let moves = placer.windows.moves.borrow();
        assert_eq!(*moves, vec![(win(), 1920, 0, None, None)]);
    }

    #[test]
    fn move_with_offsets_and_fill_sizes_to_monitor() {
        let placer = WindowPlacer::new(FakeWindows::default(), dual());
        let target = monitor("DP-2", 1920, false);
        let placement = Placement { x: 50, y: 50, ..Placement::filling() };
        placer.move_to_monitor(&win(), &target, &placement).unwrap();

        let moves = placer.windows.moves.borrow();
        assert_eq!(*moves, vec![(win(), 1970, 50, Some(1920), Some(1080))]);
    }

    #[test]
    fn size_conflict_fails_without_touching_the_window() {
        let placer = WindowPlacer::new(FakeWindows::default(), dual());
        let target = monitor("DP-2", 1920, false);
        let placement = Placement { width: Some(800), ..Placement::filling() };

        let err = placer.move_to_monitor(&win(), &target, &placement).unwrap_err();
        assert!(matches!(err, PlacerError::Placement(PlacementError::SizeConflict)));
        assert!(placer.windows.moves.borrow().is_empty());
    }

    #[test]
    fn repeated_moves_compute_the_same_destination() {
        let placer = WindowPlacer::new(FakeWindows::default(), dual());
        let target = monitor("DP-2", 1920, false);
        let placement = Placement::offset(50, 50);

        placer.move_to_monitor(&win(), &target, &placement).unwrap();
        placer.move_to_monitor(&win(), &target, &placement).unwrap();

        let moves = placer.windows.moves.borrow();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], moves[1]);
    }

    #[test]
    fn window_monitor_uses_greatest_intersection() {
        let windows = FakeWindows {
            rect: Rect { x: 2000, y: 100, width: 800, height: 600 },
            ..FakeWindows::default()
        };
        let placer = WindowPlacer::new(windows, dual());
        assert_eq!(placer.window_monitor(&win()).unwrap().name, "DP-2");
    }

    #[test]
    fn window_outside_all_monitors_resolves_to_primary() {
        let windows = FakeWindows {
            rect: Rect { x: 20000, y: 20000, width: 100, height: 100 },
            ..FakeWindows::default()
        };
        let placer = WindowPlacer::new(windows, dual());
        assert_eq!(placer.window_monitor(&win()).unwrap().name, "DP-1");
    }

    #[test]
    fn pointer_on_second_monitor_resolves_to_it() {
        let windows = FakeWindows {
            pointer: Point { x: 2000, y: 10 },
            ..FakeWindows::default()
        };
        let placer = WindowPlacer::new(windows, dual());
        assert_eq!(placer.monitor_at_pointer().unwrap().name, "DP-2");
    }

    #[test]
    fn empty_monitor_list_is_an_error() {
        let placer = WindowPlacer::new(FakeWindows::default(), FakeMonitors(Vec::new()));
        assert!(matches!(placer.monitor_at_pointer(), Err(PlacerError::NoMonitors)));
    }

    #[test]
    fn no_focused_window_is_an_error() {
        let windows = FakeWindows { active: None, ..FakeWindows::default() };
        let placer = WindowPlacer::new(windows, dual());
        assert!(matches!(placer.active_window(), Err(PlacerError::NoWindow)));
    }

    #[test]
    fn collaborator_error_is_preserved_as_source() {
        struct FailingMonitors;
        impl MonitorSource for FailingMonitors {
            type Error = FakeError;
            fn monitors(&self) -> Result<Vec<Monitor>, FakeError> {
                Err(FakeError)
            }
        }

        let placer = WindowPlacer::new(FakeWindows::default(), FailingMonitors);
        let err = placer.monitor_at_pointer().unwrap_err();
        let source = std::error::Error::source(&err).expect("source preserved");
        assert_eq!(source.to_string(), "fake backend error");
    }

    //  Suspending surface

    #[cfg(feature = "async")]
    mod suspending {
        use super::*;
        use crate::traits::{AsyncMonitorSource, AsyncWindowOps};
        use std::sync::Mutex;

        struct AsyncFake {
            monitors: Vec<Monitor>,
            pointer: Point,
            moves: Mutex<Vec<MoveCall>>,
        }

        impl AsyncFake {
            fn new() -> Self {
                Self {
                    monitors: vec![monitor("DP-1", 0, true), monitor("DP-2", 1920, false)],
                    pointer: Point { x: 2000, y: 10 },
                    moves: Mutex::new(Vec::new()),
                }
            }
        }

        #[async_trait::async_trait]
        impl AsyncWindowOps for AsyncFake {
            type Error = FakeError;

            async fn active_window(&self) -> Result<Option<WindowId>, FakeError> {
                Ok(Some(win()))
            }

            async fn window_rect(&self, _window: &WindowId) -> Result<Rect, FakeError> {
                Ok(Rect { x: 0, y: 0, width: 800, height: 600 })
            }

            async fn move_window(
                &self,
                window: &WindowId,
                x: i32,
                y: i32,
                width: Option<u32>,
                height: Option<u32>,
            ) -> Result<(), FakeError> {
                self.moves.lock().unwrap().push((window.clone(), x, y, width, height));
                Ok(())
            }

            async fn pointer_position(&self) -> Result<Point, FakeError> {
                Ok(self.pointer)
            }
        }

        #[async_trait::async_trait]
        impl AsyncMonitorSource for AsyncFake {
            type Error = FakeError;

            async fn monitors(&self) -> Result<Vec<Monitor>, FakeError> {
                Ok(self.monitors.clone())
            }
        }

        #[tokio::test]
        async fn async_pointer_monitor_matches_blocking_semantics() {
            let placer = AsyncWindowPlacer::new(AsyncFake::new(), AsyncFake::new());
            assert_eq!(placer.monitor_at_pointer().await.unwrap().name, "DP-2");
        }

        #[tokio::test]
        async fn async_move_applies_offsets_and_fill() {
            let placer = AsyncWindowPlacer::new(AsyncFake::new(), AsyncFake::new());
            let target = monitor("DP-2", 1920, false);
            let placement = Placement { x: 50, y: 50, ..Placement::filling() };
            placer.move_to_monitor(&win(), &target, &placement).await.unwrap();

            let moves = placer.windows.moves.lock().unwrap();
            assert_eq!(*moves, vec![(win(), 1970, 50, Some(1920), Some(1080))]);
        }

        #[tokio::test]
        async fn async_size_conflict_never_awaits_the_backend() {
            let placer = AsyncWindowPlacer::new(AsyncFake::new(), AsyncFake::new());
            let target = monitor("DP-2", 1920, false);
            let placement = Placement { height: Some(600), ..Placement::filling() };

            let err = placer.move_to_monitor(&win(), &target, &placement).await.unwrap_err();
            assert!(matches!(err, PlacerError::Placement(PlacementError::SizeConflict)));
            assert!(placer.windows.moves.lock().unwrap().is_empty());
        }
    }
}
