//! Blocking [`WindowOps`] / [`MonitorSource`] backend over Hyprland IPC.
//!
//! Each method opens a short-lived IPC request; no connection state is
//! held between calls.  No child processes are spawned.

use super::ipc::{self, HyprlandError};
use crate::traits::{MonitorSource, WindowOps};
use crate::types::{Monitor, Point, Rect, WindowId};
use log::debug;

/// Hyprland-backed window and monitor capabilities.
#[derive(Debug, Default)]
pub struct HyprlandBackend;

impl HyprlandBackend {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly; each method call opens a
    /// short-lived IPC request.
    pub fn new() -> Self {
        Self
    }

    /// Send a JSON data query (`j/<command>`) and return the raw JSON.
    fn query(&self, data_command: &str) -> Result<String, HyprlandError> {
        ipc::request(&format!("j/{}", data_command))
    }

    /// Send a dispatch command and check for `"ok"`.
    fn dispatch(&self, args: &str) -> Result<(), HyprlandError> {
        debug!("dispatch {}", args);
        let response = ipc::request(&format!("/dispatch {}", args))?;
        ipc::check_dispatch(&response)
    }
}

impl WindowOps for HyprlandBackend {
    type Error = HyprlandError;

    fn active_window(&self) -> Result<Option<WindowId>, Self::Error> {
        let json = self.query("activewindow")?;
        ipc::parse_active_window(&json)
    }

    fn window_rect(&self, window: &WindowId) -> Result<Rect, Self::Error> {
        let json = self.query("clients")?;
        ipc::parse_client_rect(&json, window)
    }

    fn move_window(
        &self,
        window: &WindowId,
        x: i32,
        y: i32,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), Self::Error> {
        // Hyprland resizes both axes at once, so a missing dimension is
        // filled in from the window's current size before dispatching.
        let size = match (width, height) {
            (None, None) => None,
            (Some(w), Some(h)) => Some((w, h)),
            (w, h) => {
                let rect = self.window_rect(window)?;
                Some((w.unwrap_or(rect.width), h.unwrap_or(rect.height)))
            }
        };
        self.dispatch(&ipc::move_args(window, x, y))?;
        if let Some((w, h)) = size {
            self.dispatch(&ipc::resize_args(window, w, h))?;
        }
        Ok(())
    }

    fn pointer_position(&self) -> Result<Point, Self::Error> {
        let json = self.query("cursorpos")?;
        ipc::parse_cursor(&json)
    }
}

impl MonitorSource for HyprlandBackend {
    type Error = HyprlandError;

    fn monitors(&self) -> Result<Vec<Monitor>, Self::Error> {
        let json = self.query("monitors")?;
        ipc::parse_monitors(&json)
    }
}
