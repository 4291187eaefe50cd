//! Hyprland IPC plumbing shared by the blocking and suspending backends.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.  The response parsers take raw JSON strings so both
//! backends share one implementation of the wire format.

use crate::types::{Monitor, Point, Rect, Size, WindowId};
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandError(pub(crate) String);

/// Resolve the Hyprland command socket path.
///
/// Hyprland ≥ 0.40 stores its sockets at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
pub(crate) fn socket_path() -> Result<PathBuf, HyprlandError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a raw command to the Hyprland command socket and return the
/// response as a string.  Opens a short-lived connection per request.
pub(crate) fn request(command: &str) -> Result<String, HyprlandError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(command.as_bytes())
        .map_err(|e| HyprlandError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandError(format!("utf-8: {}", e)))
}

/// Interpret a `/dispatch` response, which is `"ok"` on success.
pub(crate) fn check_dispatch(response: &str) -> Result<(), HyprlandError> {
    if response.trim() == "ok" {
        Ok(())
    } else {
        Err(HyprlandError(format!("dispatch error: {}", response)))
    }
}

//  Dispatch argument builders

/// `/dispatch` arguments for an absolute window move.
pub(crate) fn move_args(window: &WindowId, x: i32, y: i32) -> String {
    format!("movewindowpixel exact {} {},address:{}", x, y, window.0)
}

/// `/dispatch` arguments for an absolute window resize.
pub(crate) fn resize_args(window: &WindowId, width: u32, height: u32) -> String {
    format!("resizewindowpixel exact {} {},address:{}", width, height, window.0)
}

//  Minimal serde structs for the JSON we care about

/// Subset of the JSON object returned by `j/monitors`.
#[derive(Deserialize)]
struct MonitorJson {
    id: i64,
    name: String,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
}

/// Subset of the JSON object returned by `j/clients` / `j/activewindow`.
#[derive(Deserialize)]
struct ClientJson {
    address: String,
    at: [i32; 2],
    size: [i32; 2],
}

/// JSON object returned by `j/cursorpos`.
#[derive(Deserialize)]
struct CursorJson {
    x: i32,
    y: i32,
}

fn parse_err(e: serde_json::Error) -> HyprlandError {
    HyprlandError(format!("parse: {}", e))
}

//  Response parsers

/// Parse a `j/monitors` response.
///
/// Hyprland has no primary-monitor concept; the monitor with the lowest
/// id is flagged primary so the selection fallbacks have a stable anchor.
pub(crate) fn parse_monitors(json: &str) -> Result<Vec<Monitor>, HyprlandError> {
    let monitors: Vec<MonitorJson> = serde_json::from_str(json).map_err(parse_err)?;
    let primary_id = monitors.iter().map(|m| m.id).min();
    Ok(monitors
        .into_iter()
        .map(|m| Monitor {
            primary: Some(m.id) == primary_id,
            name: m.name,
            position: Point { x: m.x, y: m.y },
            size: Size { width: m.width, height: m.height },
        })
        .collect())
}

/// Parse a `j/activewindow` response into the focused window's id.
///
/// Hyprland returns an empty object `{}` when no window is focused.
pub(crate) fn parse_active_window(json: &str) -> Result<Option<WindowId>, HyprlandError> {
    if json.trim() == "{}" {
        return Ok(None);
    }
    let client: ClientJson = serde_json::from_str(json).map_err(parse_err)?;
    Ok(Some(WindowId(client.address)))
}

/// Parse a `j/clients` response and return the bounding rectangle of the
/// client with the given address.
pub(crate) fn parse_client_rect(json: &str, window: &WindowId) -> Result<Rect, HyprlandError> {
    let clients: Vec<ClientJson> = serde_json::from_str(json).map_err(parse_err)?;
    clients
        .iter()
        .find(|c| c.address == window.0)
        .map(client_rect)
        .ok_or_else(|| HyprlandError(format!("unknown window address: {}", window)))
}

/// Parse a `j/cursorpos` response.
pub(crate) fn parse_cursor(json: &str) -> Result<Point, HyprlandError> {
    let cursor: CursorJson = serde_json::from_str(json).map_err(parse_err)?;
    Ok(Point { x: cursor.x, y: cursor.y })
}

fn client_rect(client: &ClientJson) -> Rect {
    Rect {
        x: client.at[0],
        y: client.at[1],
        width: client.size[0].max(0) as u32,
        height: client.size[1].max(0) as u32,
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_monitors_flags_lowest_id_as_primary() {
        let json = r#"[
            {"id": 1, "name": "HDMI-A-1", "width": 1920, "height": 1080,
             "x": 1920, "y": 0, "focused": false, "scale": 1.0},
            {"id": 0, "name": "DP-1", "width": 2560, "height": 1440,
             "x": 0, "y": 0, "focused": true, "scale": 1.0}
        ]"#;
        let mons = parse_monitors(json).unwrap();
        assert_eq!(mons.len(), 2);
        assert_eq!(mons[0].name, "HDMI-A-1");
        assert!(!mons[0].primary);
        assert!(mons[1].primary);
        assert_eq!(mons[1].size.width, 2560);
        assert_eq!(mons[0].position.x, 1920);
    }

    #[test]
    fn parse_active_window_empty_object_is_none() {
        assert_eq!(parse_active_window("{}\n").unwrap(), None);
    }

    #[test]
    fn parse_active_window_extracts_address() {
        let json = r#"{"address": "0x55d2f0a0", "at": [100, 200],
                       "size": [800, 600], "title": "term", "monitor": 0}"#;
        let id = parse_active_window(json).unwrap().unwrap();
        assert_eq!(id, WindowId("0x55d2f0a0".into()));
    }

    #[test]
    fn parse_client_rect_finds_matching_address() {
        let json = r#"[
            {"address": "0x1", "at": [0, 0], "size": [640, 480]},
            {"address": "0x2", "at": [1950, 30], "size": [800, 600]}
        ]"#;
        let rect = parse_client_rect(json, &WindowId("0x2".into())).unwrap();
        assert_eq!(rect, Rect { x: 1950, y: 30, width: 800, height: 600 });
    }

    #[test]
    fn parse_client_rect_unknown_address_is_an_error() {
        let err = parse_client_rect("[]", &WindowId("0x9".into())).unwrap_err();
        assert!(err.to_string().contains("unknown window address"));
    }

    #[test]
    fn parse_cursor_reads_coordinates() {
        let point = parse_cursor(r#"{"x": 2000, "y": 10}"#).unwrap();
        assert_eq!(point, Point { x: 2000, y: 10 });
    }

    #[test]
    fn dispatch_args_use_exact_positioning() {
        let win = WindowId("0xabc".into());
        assert_eq!(
            move_args(&win, 1920, 0),
            "movewindowpixel exact 1920 0,address:0xabc"
        );
        assert_eq!(
            resize_args(&win, 1920, 1080),
            "resizewindowpixel exact 1920 1080,address:0xabc"
        );
    }

    #[test]
    fn check_dispatch_accepts_ok() {
        assert!(check_dispatch("ok\n").is_ok());
        assert!(check_dispatch("Invalid dispatcher").is_err());
    }

    #[test]
    fn negative_client_size_clamps_to_zero() {
        let json = r#"[{"address": "0x1", "at": [0, 0], "size": [-1, -1]}]"#;
        let rect = parse_client_rect(json, &WindowId("0x1".into())).unwrap();
        assert_eq!((rect.width, rect.height), (0, 0));
    }
}
