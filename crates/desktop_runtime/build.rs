use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const LAYOUT_SCHEMA_VERSION: u32 = 1;
const MIN_WINDOW_SIZE: (i32, i32) = (560, 360);
const MIN_DRAG_EDGE_MARGIN: i32 = 8;

#[derive(Debug, Deserialize)]
struct LayoutWindow {
    key: String,
}

#[derive(Debug, Deserialize)]
struct LayoutPill {
    window: String,
}

#[derive(Debug, Default, Deserialize)]
struct LayoutManager {
    min_width: Option<i32>,
    min_height: Option<i32>,
    drag_edge_margin: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct DesktopLayout {
    schema_version: u32,
    #[serde(default)]
    manager: LayoutManager,
    #[serde(default)]
    windows: Vec<LayoutWindow>,
    #[serde(default)]
    pills: Vec<LayoutPill>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let layout: DesktopLayout = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if layout.schema_version != LAYOUT_SCHEMA_VERSION {
        panic!(
            "layout schema mismatch in {}: expected {LAYOUT_SCHEMA_VERSION} found {}",
            path.display(),
            layout.schema_version
        );
    }

    let manager = &layout.manager;
    let min_size = (
        manager.min_width.unwrap_or(MIN_WINDOW_SIZE.0),
        manager.min_height.unwrap_or(MIN_WINDOW_SIZE.1),
    );
    if min_size.0 < MIN_WINDOW_SIZE.0 || min_size.1 < MIN_WINDOW_SIZE.1 {
        panic!(
            "minimum window size {}x{} in {} is below {}x{}",
            min_size.0,
            min_size.1,
            path.display(),
            MIN_WINDOW_SIZE.0,
            MIN_WINDOW_SIZE.1
        );
    }
    if manager.drag_edge_margin.unwrap_or(MIN_DRAG_EDGE_MARGIN) < MIN_DRAG_EDGE_MARGIN {
        panic!(
            "drag edge margin in {} is below {MIN_DRAG_EDGE_MARGIN}",
            path.display()
        );
    }

    let mut keys = BTreeSet::new();
    for window in &layout.windows {
        if !keys.insert(window.key.as_str()) {
            panic!("duplicate window key `{}` in {}", window.key, path.display());
        }
    }
    for pill in &layout.pills {
        if !keys.contains(pill.window.as_str()) {
            panic!(
                "pill targets unknown window `{}` in {}",
                pill.window,
                path.display()
            );
        }
    }
}
