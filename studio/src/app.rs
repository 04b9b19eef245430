//! Root application component, HTML shell and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    chat_area::ChatArea, error_notification::ErrorNotification, feedback_modal::FeedbackModal,
    input_box::InputBox, plan_panel::PlanPanel, sidebar::Sidebar, test_panel::TestPanel, top_bar::TopBar,
};
use crate::state::{
    feedback::FeedbackTracker, feedback_form::FeedbackForm, messages::MessageStore,
    notification::NotificationState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every piece of shared state lives in an `RwSignal` context so sibling
/// components (the banner and the input box, the test panel and the
/// transcript) observe the same values.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(MessageStore::seeded()));
    provide_context(RwSignal::new(FeedbackTracker::default()));
    provide_context(RwSignal::new(NotificationState::default()));
    provide_context(RwSignal::new(FeedbackForm::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ima-studio.css"/>
        <Title text="Ima Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudioPage/>
            </Routes>
        </Router>
    }
}

/// Single-page chat layout.
#[component]
fn StudioPage() -> impl IntoView {
    let notification = expect_context::<RwSignal<NotificationState>>();
    let form = expect_context::<RwSignal<FeedbackForm>>();

    view! {
        <div class="studio">
            <Sidebar/>
            <main class="studio__main">
                <TopBar/>
                <div class="studio__body">
                    <div class="studio__chat">
                        <ChatArea/>
                        <div class="studio__composer">
                            <Show when=move || notification.with(NotificationState::is_visible)>
                                <ErrorNotification/>
                            </Show>
                            <InputBox/>
                        </div>
                    </div>
                    <PlanPanel/>
                </div>
            </main>
            <TestPanel/>
            <button
                class="studio__feedback-fab"
                title="Send feedback"
                on:click=move |_| form.update(FeedbackForm::open_blank)
            >
                "?"
            </button>
            <Show when=move || form.with(|f| f.open)>
                <FeedbackModal/>
            </Show>
        </div>
    }
}
