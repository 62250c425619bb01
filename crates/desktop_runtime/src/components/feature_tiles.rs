use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::{
    model::FeatureTile,
    tiles::{FeatureTileState, TILE_HIDE_DELAY_MS},
};

#[component]
pub(super) fn FeatureTiles(tiles: Vec<FeatureTile>) -> impl IntoView {
    let state = create_rw_signal(FeatureTileState::default());
    let hide_timer = store_value(None::<TimeoutHandle>);

    let cancel_hide = move || {
        if let Some(handle) = hide_timer.get_value() {
            handle.clear();
            hide_timer.set_value(None);
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || state.with_untracked(|s| s.shown().is_none()) {
            return;
        }
        cancel_hide();
        state.update(FeatureTileState::dismiss);
    });
    on_cleanup(move || escape_listener.remove());

    let chips = tiles
        .iter()
        .map(|tile| {
            let key = store_value(tile.key.clone());
            view! {
                <button
                    type="button"
                    class="chip"
                    role="tab"
                    data-tile=tile.key.clone()
                    aria-controls=tile.panel_id()
                    aria-selected=move || state.with(|s| s.is_selected(&key.get_value())).to_string()
                    on:mouseenter=move |_| {
                        cancel_hide();
                        state.update(|s| {
                            s.preview(&key.get_value());
                        });
                    }
                    on:mouseleave=move |_| {
                        if state.with_untracked(FeatureTileState::is_locked) {
                            return;
                        }
                        cancel_hide();
                        match set_timeout_with_handle(
                            move || {
                                hide_timer.set_value(None);
                                state.update(FeatureTileState::hide_preview);
                            },
                            Duration::from_millis(TILE_HIDE_DELAY_MS),
                        ) {
                            Ok(handle) => hide_timer.set_value(Some(handle)),
                            Err(err) => logging::warn!("failed to schedule tile hide: {err:?}"),
                        }
                    }
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        cancel_hide();
                        state.update(|s| s.toggle_lock(&key.get_value()));
                    }
                >
                    {tile.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = tiles
        .into_iter()
        .map(|tile| {
            let key = store_value(tile.key.clone());
            let visible = move || state.with(|s| s.is_visible(&key.get_value()));
            view! {
                <section
                    id=tile.panel_id()
                    role="tabpanel"
                    class=move || if visible() { "tile is-visible" } else { "tile" }
                    hidden=move || !visible()
                >
                    {tile.body.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="feature-tiles">
            <div class="chips" role="tablist">{chips}</div>
            {panels}
        </div>
    }
}
