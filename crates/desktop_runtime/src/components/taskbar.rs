use std::time::Duration;

use super::*;
use crate::{
    clock::ClockSnapshot,
    commands::COMMANDS_WINDOW_KEY,
    host::TASKBAR_DOM_ID,
};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let manager = runtime.manager;
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let command_input = create_node_ref::<html::Input>();

    let pill_ids = create_memo(move |_| {
        manager.with(|m| {
            m.pills()
                .strip()
                .iter()
                .map(|pill| pill.window_id)
                .collect::<Vec<WindowId>>()
        })
    });

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let on_command_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let Some(input) = command_input.get_untracked() else {
            return;
        };
        let line = input.value();
        input.set_value("");
        runtime.dispatch_action(DesktopAction::RunCommand(line));
    };

    view! {
        <footer id=TASKBAR_DOM_ID class="taskbar" role="toolbar" aria-label="Desktop taskbar">
            <button
                type="button"
                class="start"
                aria-label="Open Portfolio Viewer"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    open_home_window(runtime);
                }
            >
                <span>"Start"</span>
            </button>

            <div id="taskButtons" class="task-buttons" role="group" aria-label="Open windows">
                <For each=move || pill_ids.get() key=|id| id.0 let:window_id>
                    <TaskbarPill window_id=window_id />
                </For>
            </div>

            <label class="tb-search">
                <input
                    type="search"
                    node_ref=command_input
                    placeholder="type a command… (help)"
                    aria-label="Command"
                    on:keydown=on_command_keydown
                />
            </label>

            <div class="tray">
                <button
                    type="button"
                    aria-label="Show commands"
                    on:click=move |_| open_window_by_key(runtime, COMMANDS_WINDOW_KEY, "Commands.txt")
                >
                    "?"
                </button>
                <span class="clock">{move || clock_now.get().label()}</span>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarPill(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let manager = runtime.manager;
    let pill = create_memo(move |_| {
        manager.with(|m| m.get_pill(window_id).map(|(pill, _)| pill.clone()))
    });
    let data_win = manager.with_untracked(|m| {
        m.window(window_id)
            .map(|w| w.key.clone())
            .unwrap_or_default()
    });

    view! {
        <button
            type="button"
            class=move || pill.get().map(|p| p.class_name()).unwrap_or_default()
            data-win=data_win
            on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTaskbar { window_id })
        >
            <img
                class="task-icon"
                src=move || pill.get().map(|p| p.icon).unwrap_or_default()
                alt=""
            />
            <span class="task-label">{move || pill.get().map(|p| p.label).unwrap_or_default()}</span>
        </button>
    }
}
