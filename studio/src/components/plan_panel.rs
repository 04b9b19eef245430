//! Stack of planning cards posted in the conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards appear in posting order. When a card is added the stack scrolls so
//! the new card's top edge sits at the top of the panel; a trailing spacer
//! sized from the newest card keeps that position reachable even when the
//! card is shorter than the panel.

use leptos::html;
use leptos::prelude::*;
use plans::Payload;

use crate::components::script_card::ScriptCard;
use crate::components::storyboard_card::StoryboardCard;
use crate::components::task_planning_card::TaskPlanningCard;
use crate::components::video_planning_card::VideoPlanningCard;
use crate::state::messages::MessageStore;
use crate::util::auto_scroll::Anchor;
use crate::util::pinned_scroll::PinnedScroll;

#[component]
pub fn PlanPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();

    let cards = Memo::new(move |_| {
        store.with(|s| s.with_payloads().map(|(id, payload)| (id, payload.clone())).collect::<Vec<_>>())
    });

    let container = NodeRef::<html::Div>::new();
    let items = NodeRef::<html::Div>::new();
    let spacer = NodeRef::<html::Div>::new();
    let scroll = PinnedScroll::new(Anchor::LatestTop, container, items).with_spacer(spacer);
    scroll.track(move || cards.with(Vec::len));

    view! {
        <Show when=move || cards.with(|c| !c.is_empty())>
            <div
                class="plan-panel"
                node_ref=container
                on:scroll=move |_| scroll.on_scroll()
                on:scrollend=move |_| scroll.on_scroll_end()
            >
                <div class="plan-panel__cards" node_ref=items>
                    <For
                        each=move || cards.get()
                        key=|(id, _)| *id
                        children=move |(_, payload)| view! { <PlanCard payload=payload/> }
                    />
                </div>
                <div class="plan-panel__spacer" node_ref=spacer></div>
            </div>
        </Show>
    }
}

/// Card for one payload.
#[component]
pub fn PlanCard(payload: Payload) -> impl IntoView {
    match payload {
        Payload::TaskPlanning(plan) => view! { <TaskPlanningCard plan=plan/> }.into_any(),
        Payload::VideoPlanning(plan) => view! { <VideoPlanningCard plan=plan/> }.into_any(),
        Payload::Storyboard(plan) => view! { <StoryboardCard plan=plan/> }.into_any(),
        Payload::Script(plan) => view! { <ScriptCard plan=plan/> }.into_any(),
    }
}
