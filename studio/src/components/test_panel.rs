//! Floating panel that fires simulated task events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the task runner: success posts a finished result, failure
//! raises the error banner, plan posts the next bundled planning payload.
//! The panel can be dragged by its handle; the drop position is saved to
//! `localStorage` and restored on the next load.

use leptos::html;
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::state::messages::MessageStore;
use crate::state::notification::NotificationState;
use crate::state::simulate;
use crate::state::ui::UiState;
use crate::util::drag_position::{Bounds, Drag, Position, TEST_PANEL_POSITION};
use crate::util::settings::BrowserStorage;

#[component]
pub fn TestPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();
    let notification = expect_context::<RwSignal<NotificationState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let demo_plans = StoredValue::new(simulate::demo_plans().unwrap_or_else(|e| {
        warn!("test panel: bundled plans unavailable: {e}");
        Vec::new()
    }));

    let panel = NodeRef::<html::Div>::new();
    let position = RwSignal::new(None::<Position>);
    let drag = RwSignal::new(None::<Drag>);

    // Restore once the panel is mounted and measurable.
    Effect::new(move |_| {
        if panel.get().is_none() {
            return;
        }
        if let Some(bounds) = measure(panel) {
            let restored = TEST_PANEL_POSITION.load_or_else(&BrowserStorage, || bounds.default_position());
            position.set(Some(bounds.clamp(restored)));
        }
    });

    let on_grab = move |ev: leptos::ev::PointerEvent| {
        let Some(origin) = position.get_untracked() else {
            return;
        };
        ev.prevent_default();
        drag.set(Some(Drag::start(origin, pointer(&ev))));
    };

    let moving = window_event_listener(leptos::ev::pointermove, move |ev| {
        let Some(active) = drag.get_untracked() else {
            return;
        };
        if let Some(bounds) = measure(panel) {
            position.set(Some(active.move_to(pointer(&ev), &bounds)));
        }
    });
    let released = window_event_listener(leptos::ev::pointerup, move |_| {
        if drag.get_untracked().is_none() {
            return;
        }
        drag.set(None);
        if let Some(pos) = position.get_untracked() {
            TEST_PANEL_POSITION.save_logged(&mut BrowserStorage, &pos);
        }
    });
    on_cleanup(move || {
        moving.remove();
        released.remove();
    });

    let on_success = move |_| {
        store.update(|s| {
            notification.update(|n| {
                simulate::complete_task(s, n);
            });
        });
    };
    let on_failure = move |_| notification.update(simulate::fail_task);
    let on_plan = move |_| {
        let count = demo_plans.with_value(Vec::len);
        let Some(index) = ui.try_update(|u| u.take_demo_plan(count)).flatten() else {
            warn!("test panel: no plans to post");
            return;
        };
        let Some(payload) = demo_plans.with_value(|plans| plans.get(index).cloned()) else {
            return;
        };
        let kind = payload.kind();
        if let Some(id) = store.try_update(|s| simulate::post_plan(s, payload)) {
            log!("test panel: posted {kind} payload as message {id}");
        }
    };

    let style = move || {
        position
            .get()
            .map(|p| format!("left: {}px; top: {}px;", p.x, p.y))
            .unwrap_or_default()
    };

    view! {
        <div
            class="test-panel"
            class:test-panel--placed=move || position.with(Option::is_some)
            class:test-panel--dragging=move || drag.with(Option::is_some)
            style=style
            node_ref=panel
        >
            <span class="test-panel__handle" title="Drag to move" on:pointerdown=on_grab>
                "TEST:"
            </span>
            <button class="test-panel__button test-panel__button--success" title="Test Success" on:click=on_success>
                "✓"
            </button>
            <button class="test-panel__button test-panel__button--failure" title="Test Failure" on:click=on_failure>
                "✕"
            </button>
            <button class="test-panel__button test-panel__button--plan" title="Test Plan" on:click=on_plan>
                "▤"
            </button>
        </div>
    }
}

fn pointer(ev: &leptos::ev::PointerEvent) -> Position {
    Position { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) }
}

fn measure(panel: NodeRef<html::Div>) -> Option<Bounds> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let viewport_width = window.inner_width().ok()?.as_f64()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let rect = panel.get_untracked()?.get_bounding_client_rect();
        Some(Bounds { viewport_width, viewport_height, panel_width: rect.width(), panel_height: rect.height() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = panel;
        None
    }
}
