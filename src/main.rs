//! Entry point for the **monplace** CLI.
//!
//! One-shot commands against the blocking Hyprland backend:
//!
//! ```text
//! monplace window-monitor
//! monplace pointer-monitor
//! monplace move <monitor-index> [--x N] [--y N] [--fill] [--width N] [--height N]
//! ```
//!
//! `move` acts on the currently focused window.  When no placement flags
//! are given, the default placement from
//! `$XDG_CONFIG_HOME/monplace/config.json` is applied instead.

use log::{error, info};
use monplace::config::Config;
use monplace::hyprland::HyprlandBackend;
use monplace::placement::Placement;
use monplace::placer::{PlacerError, WindowPlacer};

type Placer = WindowPlacer<HyprlandBackend, HyprlandBackend>;

/// Resolve the config directory (`$XDG_CONFIG_HOME/monplace`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("monplace")
}

/// Try to load the config from `$XDG_CONFIG_HOME/monplace/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "usage: monplace <command>\n\
         \n\
         commands:\n\
         \x20 window-monitor   print the monitor of the focused window\n\
         \x20 pointer-monitor  print the monitor under the mouse pointer\n\
         \x20 move <monitor-index> [--x N] [--y N] [--fill] [--width N] [--height N]\n\
         \x20                  move the focused window to the given monitor"
    );
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let placer = WindowPlacer::new(HyprlandBackend::new(), HyprlandBackend::new());

    let result = match args.first().map(String::as_str) {
        Some("window-monitor") => cmd_window_monitor(&placer),
        Some("pointer-monitor") => cmd_pointer_monitor(&placer),
        Some("move") => cmd_move(&placer, &args[1..]),
        _ => usage(),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("monplace: {}", e);
        std::process::exit(1);
    }
}

fn cmd_window_monitor(placer: &Placer) -> Result<(), PlacerError> {
    let window = placer.active_window()?;
    let monitor = placer.window_monitor(&window)?;
    println!("{}", monitor);
    Ok(())
}

fn cmd_pointer_monitor(placer: &Placer) -> Result<(), PlacerError> {
    println!("{}", placer.monitor_at_pointer()?);
    Ok(())
}

fn cmd_move(placer: &Placer, args: &[String]) -> Result<(), PlacerError> {
    let (index, placement) = match parse_move_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("monplace: {}", msg);
            usage();
        }
    };

    let monitors = placer.monitors()?;
    let Some(monitor) = monitors.get(index) else {
        eprintln!(
            "monplace: monitor index {} out of range ({} monitor(s) present)",
            index,
            monitors.len()
        );
        std::process::exit(1);
    };

    let window = placer.active_window()?;
    placer.move_to_monitor(&window, monitor, &placement)?;
    info!("moved {} to {}", window, monitor.name);
    Ok(())
}

/// Parse `move` arguments: one positional monitor index plus placement
/// flags.  With no placement flags, the configured default placement is
/// used.
fn parse_move_args(args: &[String]) -> Result<(usize, Placement), String> {
    let mut index = None;
    let mut placement = Placement::default();
    let mut any_flag = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--x" => {
                placement.x = parse_flag_value(arg, it.next())?;
                any_flag = true;
            }
            "--y" => {
                placement.y = parse_flag_value(arg, it.next())?;
                any_flag = true;
            }
            "--width" => {
                placement.width = Some(parse_flag_value(arg, it.next())?);
                any_flag = true;
            }
            "--height" => {
                placement.height = Some(parse_flag_value(arg, it.next())?);
                any_flag = true;
            }
            "--fill" => {
                placement.size_to_monitor = true;
                any_flag = true;
            }
            other if !other.starts_with('-') && index.is_none() => {
                index = Some(
                    other
                        .parse::<usize>()
                        .map_err(|_| format!("invalid monitor index: {:?}", other))?,
                );
            }
            other => return Err(format!("unexpected argument: {:?}", other)),
        }
    }

    let index = index.ok_or("missing monitor index")?;
    if !any_flag {
        placement = load_config().placement;
    }
    Ok((index, placement))
}

fn parse_flag_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {}: {:?}", flag, value))
}
