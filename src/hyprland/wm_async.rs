//! Suspending [`AsyncWindowOps`] / [`AsyncMonitorSource`] backend over
//! Hyprland IPC.
//!
//! Same wire format and parsers as the blocking backend in
//! [`wm`](super::wm); the socket I/O goes through
//! [`tokio::net::UnixStream`] so callers inside a runtime never block a
//! worker thread on the compositor.

use super::ipc::{self, HyprlandError};
use crate::traits::{AsyncMonitorSource, AsyncWindowOps};
use crate::types::{Monitor, Point, Rect, WindowId};
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

/// Hyprland-backed window and monitor capabilities for async callers.
#[derive(Debug, Default)]
pub struct AsyncHyprlandBackend;

impl AsyncHyprlandBackend {
    /// Create a new handle.
    pub fn new() -> Self {
        Self
    }

    /// Send a raw command and return the response as a string.
    async fn request(&self, command: &str) -> Result<String, HyprlandError> {
        let path = ipc::socket_path()?;
        let mut stream = UnixStream::connect(&path)
            .await
            .map_err(|e| HyprlandError(format!("connect to {}: {}", path.display(), e)))?;

        stream
            .write_all(command.as_bytes())
            .await
            .map_err(|e| HyprlandError(format!("write: {}", e)))?;

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .await
            .map_err(|e| HyprlandError(format!("read: {}", e)))?;

        String::from_utf8(response).map_err(|e| HyprlandError(format!("utf-8: {}", e)))
    }

    async fn query(&self, data_command: &str) -> Result<String, HyprlandError> {
        self.request(&format!("j/{}", data_command)).await
    }

    async fn dispatch(&self, args: &str) -> Result<(), HyprlandError> {
        debug!("dispatch {}", args);
        let response = self.request(&format!("/dispatch {}", args)).await?;
        ipc::check_dispatch(&response)
    }
}

#[async_trait::async_trait]
impl AsyncWindowOps for AsyncHyprlandBackend {
    type Error = HyprlandError;

    async fn active_window(&self) -> Result<Option<WindowId>, Self::Error> {
        let json = self.query("activewindow").await?;
        ipc::parse_active_window(&json)
    }

    async fn window_rect(&self, window: &WindowId) -> Result<Rect, Self::Error> {
        let json = self.query("clients").await?;
        ipc::parse_client_rect(&json, window)
    }

    async fn move_window(
        &self,
        window: &WindowId,
        x: i32,
        y: i32,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), Self::Error> {
        let size = match (width, height) {
            (None, None) => None,
            (Some(w), Some(h)) => Some((w, h)),
            (w, h) => {
                let rect = self.window_rect(window).await?;
                Some((w.unwrap_or(rect.width), h.unwrap_or(rect.height)))
            }
        };
        self.dispatch(&ipc::move_args(window, x, y)).await?;
        if let Some((w, h)) = size {
            self.dispatch(&ipc::resize_args(window, w, h)).await?;
        }
        Ok(())
    }

    async fn pointer_position(&self) -> Result<Point, Self::Error> {
        let json = self.query("cursorpos").await?;
        ipc::parse_cursor(&json)
    }
}

#[async_trait::async_trait]
impl AsyncMonitorSource for AsyncHyprlandBackend {
    type Error = HyprlandError;

    async fn monitors(&self) -> Result<Vec<Monitor>, Self::Error> {
        let json = self.query("monitors").await?;
        ipc::parse_monitors(&json)
    }
}
