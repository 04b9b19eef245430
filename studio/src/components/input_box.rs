//! Message composer.

use leptos::logging::log;
use leptos::prelude::*;

use crate::state::messages::MessageStore;
use crate::state::notification::NotificationState;

#[cfg(test)]
#[path = "input_box_test.rs"]
mod input_box_test;

/// Whether a keydown should send the draft.
///
/// Enter sends, Shift+Enter inserts a newline, and Enter while an input
/// method is composing only commits the candidate.
pub fn should_send(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[component]
pub fn InputBox() -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();
    let notification = expect_context::<RwSignal<NotificationState>>();

    let draft = RwSignal::new(String::new());
    let has_error = move || notification.with(NotificationState::is_visible);
    let can_send = move || !draft.with(|d| d.trim().is_empty());

    let do_send = move || {
        let text = draft.get_untracked();
        let sent = store.try_update(|s| s.send(&text)).flatten();
        if let Some(id) = sent {
            log!("input: sent message {id}");
            draft.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if should_send(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="input-box" class:input-box--joined=has_error>
            <div class="input-box__frame">
                <textarea
                    class="input-box__textarea"
                    rows="2"
                    placeholder="Describe what you want to create..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="input-box__toolbar">
                    <div class="input-box__modes">
                        <span class="input-box__mode input-box__mode--active">"Agent"</span>
                        <span class="input-box__mode">"Model"</span>
                    </div>
                    <button
                        class="btn btn--primary input-box__send"
                        title="Send"
                        disabled=move || !can_send()
                        on:click=move |_| do_send()
                    >
                        "➤"
                    </button>
                </div>
            </div>
        </div>
    }
}
