//! Hyprland-specific implementations.
//!
//! This module provides concrete backends for the
//! [`WindowOps`](crate::traits::WindowOps) and
//! [`MonitorSource`](crate::traits::MonitorSource) traits (plus their
//! suspending mirrors), powered by Hyprland's IPC socket.
//!
//! Nothing outside this module should reference Hyprland directly.

mod ipc;
pub mod wm;
#[cfg(feature = "async")]
pub mod wm_async;

pub use ipc::HyprlandError;
pub use wm::HyprlandBackend;
#[cfg(feature = "async")]
pub use wm_async::AsyncHyprlandBackend;
