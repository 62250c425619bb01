use desktop_runtime::{
    reduce_desktop, ConfigError, CssValue, DesktopAction, DesktopConfig, Pill, PillSource, PointerPosition,
    PositionMode, WindowControl, WindowGeometry, WindowId, WindowManager, WindowManagerConfig,
    WindowRect,
};
use pretty_assertions::assert_eq;

const LAYOUT: &str = r#"
schema_version = 1

[[windows]]
key = "window-home"
title = "Portfolio Viewer"

[windows.geometry]
position = "absolute"
left = { percent = 50 }
top = { percent = 46 }
width = { px = 880 }
transform = { raw = "translate(-50%, -50%)" }

[[windows]]
key = "window-work"
title = "Work"

[windows.geometry]
left = { px = 40 }
top = { px = 40 }

[[windows]]
key = "window-about"
title = "About"
controls = ["min", "close"]
resizable = false

[[pills]]
window = "window-home"
label = "Portfolio Viewer"
icon = "assets/mascot_head.svg"
active = true

[[pills]]
window = "window-work"
label = "Work"
icon = "assets/kawaii_folder.png"
"#;

fn desktop() -> WindowManager {
    let config = DesktopConfig::from_toml_str(LAYOUT).expect("layout");
    WindowManager::from_config(&config).expect("manager")
}

fn id(manager: &WindowManager, key: &str) -> WindowId {
    manager.window_id(key).expect("window")
}

fn dispatch(manager: &mut WindowManager, action: DesktopAction) {
    let _ = reduce_desktop(manager, action);
}

fn active_registered_pills(manager: &WindowManager) -> usize {
    manager
        .pills()
        .strip()
        .iter()
        .filter(|pill| manager.pills().is_registered(pill.window_id) && pill.active)
        .count()
}

#[test]
fn untouched_windows_start_normal() {
    let manager = desktop();
    assert_eq!(manager.windows().len(), 3);
    for window in manager.windows() {
        assert!(!window.minimized);
        assert!(!window.maximized);
        assert!(!window.closed);
        assert_eq!(window.saved_geometry, None);
    }
}

#[test]
fn z_order_is_globally_monotonic() {
    let mut manager = desktop();
    let keys = ["window-home", "window-work", "window-about", "window-work", "window-home"];
    let mut issued = Vec::new();

    for key in keys {
        let window_id = id(&manager, key);
        dispatch(&mut manager, DesktopAction::BringToFront { window_id });
        issued.push(manager.window(window_id).expect("window").z_index);
    }

    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    let top = manager
        .windows()
        .iter()
        .max_by_key(|w| w.z_index)
        .expect("top window");
    assert_eq!(top.key, "window-home");
}

#[test]
fn taskbar_restores_minimized_window_and_activates_pill() {
    let mut manager = desktop();
    let work = id(&manager, "window-work");
    dispatch(&mut manager, DesktopAction::Minimize { window_id: work });

    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: work });

    assert!(!manager.window(work).unwrap().minimized);
    let (pill, source) = manager.get_pill(work).expect("pill");
    assert_eq!(source, PillSource::Registry);
    assert!(pill.active);
    assert!(!pill.min_indicator);
}

#[test]
fn taskbar_toggle_twice_minimizes_then_refocuses() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    dispatch(&mut manager, DesktopAction::BringToFront { window_id: home });
    dispatch(&mut manager, DesktopAction::SetActive { window_id: home });
    let z_before = manager.window(home).unwrap().z_index;

    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: home });
    assert!(manager.window(home).unwrap().minimized);
    assert!(!manager.get_pill(home).unwrap().0.active);

    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: home });
    let window = manager.window(home).unwrap();
    assert!(!window.minimized);
    assert!(window.z_index > z_before);
    assert!(manager.get_pill(home).unwrap().0.active);
}

#[test]
fn maximize_round_trip_restores_every_field_including_unset_ones() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    let before = manager.window(home).unwrap().geometry.clone();
    assert_eq!(before.right, None);
    assert_eq!(before.max_height, None);

    dispatch(
        &mut manager,
        DesktopAction::ToggleMaximize {
            window_id: home,
            taskbar_height: Some(72),
        },
    );
    let maximized = manager.window(home).unwrap();
    assert!(maximized.maximized);
    assert_eq!(maximized.geometry.position, Some(PositionMode::Fixed));
    assert_eq!(maximized.geometry.bottom, Some(CssValue::Px(72)));
    assert_eq!(manager.layout().taskbar_height, Some(72));

    dispatch(
        &mut manager,
        DesktopAction::ToggleMaximize {
            window_id: home,
            taskbar_height: Some(72),
        },
    );
    let restored = manager.window(home).unwrap();
    assert!(!restored.maximized);
    assert_eq!(restored.geometry, before);
}

#[test]
fn minimizing_a_maximized_window_leaves_the_maximized_layout() {
    let mut manager = desktop();
    let work = id(&manager, "window-work");
    let before = manager.window(work).unwrap().geometry.clone();

    dispatch(
        &mut manager,
        DesktopAction::WindowControl {
            window_id: work,
            control: WindowControl::Maximize,
            taskbar_height: None,
        },
    );
    dispatch(
        &mut manager,
        DesktopAction::WindowControl {
            window_id: work,
            control: WindowControl::Minimize,
            taskbar_height: None,
        },
    );

    let window = manager.window(work).unwrap();
    assert!(window.minimized && !window.maximized);
    assert_eq!(window.geometry, before);
}

#[test]
fn closed_window_loses_its_pill_in_both_tiers() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    let about = id(&manager, "window-about");
    assert!(manager.attach_unregistered_pill(Pill::new(about, "About", "assets/closed_mail.png")));
    assert_eq!(manager.get_pill(about).unwrap().1, PillSource::Structural);

    dispatch(&mut manager, DesktopAction::Close { window_id: home });
    dispatch(&mut manager, DesktopAction::Close { window_id: about });

    assert!(manager.get_pill(home).is_none());
    assert!(manager.get_pill(about).is_none());

    let pills_before = manager.pills().clone();
    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: home });
    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: home });
    assert_eq!(manager.pills(), &pills_before);
    assert!(manager.window(home).unwrap().closed);
}

#[test]
fn set_active_leaves_exactly_one_active_registered_pill() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    let work = id(&manager, "window-work");
    let about = id(&manager, "window-about");
    dispatch(
        &mut manager,
        DesktopAction::RegisterPill {
            window_id: about,
            pill: Pill::new(about, "About", "assets/closed_mail.png"),
        },
    );

    for window_id in [work, about, home, home, work] {
        dispatch(&mut manager, DesktopAction::SetActive { window_id });
        assert_eq!(active_registered_pills(&manager), 1);
        assert!(manager.get_pill(window_id).unwrap().0.active);
    }
}

#[test]
fn drag_never_places_window_above_or_left_of_margin() {
    let mut manager = desktop();
    let work = id(&manager, "window-work");
    dispatch(
        &mut manager,
        DesktopAction::BeginDrag {
            window_id: work,
            pointer: PointerPosition { x: 60, y: 50 },
            rect: WindowRect {
                x: 40,
                y: 40,
                w: 600,
                h: 400,
            },
        },
    );

    for step in 0..40 {
        let pointer = PointerPosition {
            x: 300 - step * 25,
            y: 200 - step * 17,
        };
        dispatch(&mut manager, DesktopAction::PointerMoved { pointer });
        let geometry = &manager.window(work).unwrap().geometry;
        let (Some(CssValue::Px(left)), Some(CssValue::Px(top))) = (&geometry.left, &geometry.top)
        else {
            panic!("drag writes pixel offsets");
        };
        assert!(*left >= 8, "left {left} at step {step}");
        assert!(*top >= 8, "top {top} at step {step}");
    }

    dispatch(&mut manager, DesktopAction::PointerReleased);
    assert!(manager.interaction().is_idle());
}

#[test]
fn resize_never_shrinks_below_minimum() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    dispatch(
        &mut manager,
        DesktopAction::BeginResize {
            window_id: home,
            pointer: PointerPosition { x: 900, y: 600 },
            rect: WindowRect {
                x: 20,
                y: 40,
                w: 880,
                h: 560,
            },
        },
    );

    for step in 0..30 {
        let pointer = PointerPosition {
            x: 900 - step * 60,
            y: 600 - step * 45,
        };
        dispatch(&mut manager, DesktopAction::PointerMoved { pointer });
        let geometry = &manager.window(home).unwrap().geometry;
        let (Some(CssValue::Px(width)), Some(CssValue::Px(height))) =
            (&geometry.width, &geometry.height)
        else {
            panic!("resize writes pixel sizes");
        };
        assert!(*width >= 560);
        assert!(*height >= 360);
    }
}

#[test]
fn pointer_sessions_are_refused_on_maximized_or_fixed_windows() {
    let mut manager = desktop();
    let home = id(&manager, "window-home");
    let about = id(&manager, "window-about");
    let rect = WindowRect {
        x: 0,
        y: 0,
        w: 600,
        h: 400,
    };
    dispatch(
        &mut manager,
        DesktopAction::ToggleMaximize {
            window_id: home,
            taskbar_height: None,
        },
    );

    let drag = reduce_desktop(
        &mut manager,
        DesktopAction::BeginDrag {
            window_id: home,
            pointer: PointerPosition { x: 10, y: 10 },
            rect,
        },
    );
    let resize_max = reduce_desktop(
        &mut manager,
        DesktopAction::BeginResize {
            window_id: home,
            pointer: PointerPosition { x: 600, y: 400 },
            rect,
        },
    );
    let resize_fixed = reduce_desktop(
        &mut manager,
        DesktopAction::BeginResize {
            window_id: about,
            pointer: PointerPosition { x: 600, y: 400 },
            rect,
        },
    );

    assert!(drag.is_err() && resize_max.is_err() && resize_fixed.is_err());
    assert!(manager.interaction().is_idle());
}

#[test]
fn missing_window_ids_leave_state_untouched() {
    let mut manager = desktop();
    let before = manager.clone();
    let ghost = WindowId(404);

    dispatch(&mut manager, DesktopAction::Minimize { window_id: ghost });
    dispatch(&mut manager, DesktopAction::ToggleTaskbar { window_id: ghost });
    dispatch(
        &mut manager,
        DesktopAction::ToggleMaximize {
            window_id: ghost,
            taskbar_height: None,
        },
    );
    dispatch(&mut manager, DesktopAction::Close { window_id: ghost });

    assert_eq!(manager, before);
}

#[test]
fn blank_geometry_round_trips_through_maximize() {
    let config = DesktopConfig::from_toml_str(
        r#"
schema_version = 1

[[windows]]
key = "window-blank"
title = "Blank"
"#,
    )
    .expect("layout");
    let mut manager = WindowManager::from_config(&config).expect("manager");
    let blank = id(&manager, "window-blank");

    manager.toggle_max(blank, None);
    assert_eq!(
        manager.window(blank).unwrap().saved_geometry,
        Some(WindowGeometry::default())
    );
    manager.toggle_max(blank, None);
    assert_eq!(manager.window(blank).unwrap().geometry, WindowGeometry::default());
}

#[test]
fn layouts_cannot_loosen_size_or_margin_floors() {
    let err = DesktopConfig::from_toml_str(
        r#"
schema_version = 1

[manager]
min_width = 10
min_height = 10
drag_edge_margin = -500
"#,
    )
    .expect_err("loose tunables");
    assert_eq!(
        err,
        ConfigError::MinimumSizeTooSmall {
            width: 10,
            height: 10,
        }
    );

    let err = DesktopConfig::from_toml_str(
        r#"
schema_version = 1

[manager]
drag_edge_margin = -500
"#,
    )
    .expect_err("loose margin");
    assert_eq!(err, ConfigError::DragMarginTooSmall(-500));
}

#[test]
fn z_order_stays_strict_from_the_highest_allowed_base() {
    let mut config = DesktopConfig::from_toml_str(LAYOUT).expect("layout");
    config.manager = WindowManagerConfig {
        base_z_index: 1_000_000,
        ..config.manager
    };
    let mut manager = WindowManager::from_config(&config).expect("manager");
    let home = id(&manager, "window-home");
    let work = id(&manager, "window-work");

    for window_id in [home, work, home] {
        dispatch(&mut manager, DesktopAction::BringToFront { window_id });
    }

    let home_z = manager.window(home).unwrap().z_index;
    let work_z = manager.window(work).unwrap().z_index;
    assert_eq!((work_z, home_z), (1_000_002, 1_000_003));
}

#[test]
fn layouts_cannot_push_base_z_index_past_headroom() {
    let mut config = DesktopConfig::from_toml_str(LAYOUT).expect("layout");
    config.manager.base_z_index = u32::MAX - 1;
    assert_eq!(
        WindowManager::from_config(&config),
        Err(ConfigError::BaseZIndexTooLarge(u32::MAX - 1))
    );
}
