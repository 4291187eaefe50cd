//! **monplace** — monitor-aware window placement.
//!
//! Resolves which monitor a window (or the mouse pointer) is on and moves
//! windows onto a chosen monitor, with optional offsets and sizing.  All
//! window manipulation and monitor enumeration are delegated to a window
//! system backend; the crate's own logic is parameter validation,
//! coordinate arithmetic, and monitor-selection geometry.
//!
//! # Architecture
//!
//! The crate is organised around two capability traits:
//!
//! * [`traits::WindowOps`] — abstracts window inspection, pointer
//!   queries, and the move/resize primitive.
//! * [`traits::MonitorSource`] — abstracts monitor enumeration.
//!
//! [`placer::WindowPlacer`] composes the two into the placement
//! operations; the pure computation behind them lives in [`placement`]
//! and is shared verbatim with the suspending surface
//! ([`placer::AsyncWindowPlacer`], `async` feature).  A concrete backend
//! for Hyprland IPC lives in [`hyprland`].

pub mod config;
pub mod hyprland;
pub mod placement;
pub mod placer;
pub mod traits;
pub mod types;
