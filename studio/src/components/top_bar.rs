//! Header above the transcript.

use leptos::prelude::*;

use crate::state::feedback_form::FeedbackForm;
use crate::state::messages::MessageStore;
use crate::state::ui::UiState;

const UNTITLED: &str = "New chat";

#[component]
pub fn TopBar() -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = expect_context::<RwSignal<FeedbackForm>>();

    // The conversation is named after its first request.
    let title = move || store.with(|s| s.history_titles(usize::MAX).pop()).unwrap_or_else(|| UNTITLED.to_owned());

    view! {
        <header class="top-bar">
            <div class="top-bar__left">
                <button
                    class="top-bar__icon top-bar__menu"
                    title="Open menu"
                    on:click=move |_| ui.update(UiState::open_mobile_sidebar)
                >
                    "☰"
                </button>
                <h1 class="top-bar__title">{title}</h1>
            </div>
            <div class="top-bar__right">
                <button
                    class="top-bar__icon top-bar__feedback"
                    title="Send feedback"
                    on:click=move |_| form.update(FeedbackForm::open_blank)
                >
                    "✎"
                </button>
            </div>
        </header>
    }
}
