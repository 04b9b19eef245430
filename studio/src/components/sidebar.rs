//! Navigation sidebar with chat history.
//!
//! SYSTEM CONTEXT
//! ==============
//! On desktop the sidebar collapses to a narrow rail. On mobile it is an
//! overlay opened from the top bar and closed by its close button, a click on
//! the backdrop, or Escape.

use leptos::prelude::*;

use crate::state::messages::MessageStore;
use crate::state::ui::{SIDEBAR_HISTORY_LIMIT, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<RwSignal<MessageStore>>();

    let collapsed = move || ui.with(|u| u.sidebar_collapsed);
    let mobile_open = move || ui.with(|u| u.mobile_sidebar_open);
    let history = Memo::new(move |_| store.with(|s| s.history_titles(SIDEBAR_HISTORY_LIMIT)));

    let close_mobile = move || {
        ui.update(|u| {
            u.close_mobile_sidebar();
        });
    };

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && ui.with_untracked(|u| u.mobile_sidebar_open) {
            close_mobile();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=mobile_open>
            <div class="sidebar__backdrop" on:click=move |_| close_mobile()></div>
        </Show>
        <aside class="sidebar" class:sidebar--collapsed=collapsed class:sidebar--mobile-open=mobile_open>
            <div class="sidebar__header">
                <Show when=move || !collapsed()>
                    <div class="sidebar__brand">"Ima Studio"</div>
                </Show>
                <button
                    class="sidebar__collapse"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "◧"
                </button>
                <button class="sidebar__close" title="Close menu" on:click=move |_| close_mobile()>
                    "✕"
                </button>
            </div>
            <Show when=move || !collapsed()>
                <nav class="sidebar__nav">
                    <span class="sidebar__nav-item">"Home"</span>
                    <span class="sidebar__nav-item sidebar__nav-item--active">"Create with Ima Agent"</span>
                    <span class="sidebar__nav-item">"Ima Arena"</span>
                </nav>
                <div class="sidebar__history">
                    <p class="sidebar__section-label">"CHAT HISTORY"</p>
                    {move || {
                        let titles = history.get();
                        if titles.is_empty() {
                            return view! { <div class="sidebar__empty">"No chats yet"</div> }.into_any();
                        }
                        titles
                            .into_iter()
                            .enumerate()
                            .map(|(index, title)| {
                                view! {
                                    <div class="sidebar__history-item" class:sidebar__history-item--current=index == 0>
                                        {title}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </aside>
    }
}
