//! Thumbs up/down bar and detail form under the newest assistant message.

use leptos::prelude::*;

use crate::state::feedback::{FeedbackTracker, MessageFeedback, Reaction};
use crate::state::messages::MessageStore;
use crate::util::report::{self, Channel};

#[component]
pub fn MessageFeedbackBar(message_id: u64) -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();
    let feedback = expect_context::<RwSignal<FeedbackTracker>>();

    let entry = Memo::new(move |_| feedback.with(|f| f.entry(message_id)));
    let reaction = move || entry.with(|e| e.reaction);

    let react = move |r: Reaction| {
        feedback.update(|f| {
            store.with_untracked(|s| f.react(s, message_id, r));
        });
    };

    view! {
        <div class="message-feedback">
            <div class="message-feedback__buttons">
                <button
                    class="message-feedback__button message-feedback__button--positive"
                    class:message-feedback__button--active=move || reaction() == Some(Reaction::Positive)
                    on:click=move |_| react(Reaction::Positive)
                >
                    "👍 "
                    {move || if reaction() == Some(Reaction::Positive) { "Satisfied" } else { "Good" }}
                </button>
                <button
                    class="message-feedback__button message-feedback__button--negative"
                    class:message-feedback__button--active=move || reaction() == Some(Reaction::Negative)
                    on:click=move |_| react(Reaction::Negative)
                >
                    "👎 "
                    {move || if reaction() == Some(Reaction::Negative) { "Not satisfied" } else { "Bad" }}
                </button>
            </div>
            <Show when=move || entry.with(MessageFeedback::detail_visible)>
                <FeedbackDetail message_id=message_id entry=entry/>
            </Show>
        </div>
    }
}

#[component]
fn FeedbackDetail(message_id: u64, entry: Memo<MessageFeedback>) -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();
    let feedback = expect_context::<RwSignal<FeedbackTracker>>();

    let toggle_tag = move |tag: &'static str| {
        feedback.update(|f| {
            store.with_untracked(|s| f.toggle_tag(s, message_id, tag));
        });
    };
    let on_comment = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        feedback.update(|f| {
            store.with_untracked(|s| f.set_comment(s, message_id, text));
        });
    };
    let on_skip = move |_| feedback.update(|f| f.close_detail(message_id));
    let on_submit = move |_| {
        let submission = feedback.try_update(|f| store.with_untracked(|s| f.submit(s, message_id))).flatten();
        if let Some(submission) = submission {
            report::emit(Channel::MessageFeedback, &submission);
        }
    };

    view! {
        <div class="feedback-detail">
            <p class="feedback-detail__prompt">
                {move || entry.with(|e| e.reaction.map(Reaction::prompt))}
            </p>
            <div class="feedback-detail__tags">
                {move || {
                    let tags = entry.with(|e| e.reaction.map(Reaction::quick_tags).unwrap_or_default());
                    tags.iter()
                        .map(|&tag| {
                            view! {
                                <button
                                    class="feedback-detail__tag"
                                    class:feedback-detail__tag--selected=move || entry.with(|e| e.has_tag(tag))
                                    on:click=move |_| toggle_tag(tag)
                                >
                                    {tag}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <input
                class="feedback-detail__comment"
                type="text"
                placeholder="(Optional) Additional comments..."
                prop:value=move || entry.with(|e| e.comment.clone())
                on:input=on_comment
            />
            <div class="feedback-detail__actions">
                <button class="btn feedback-detail__skip" on:click=on_skip>
                    "Skip"
                </button>
                <button class="btn btn--primary feedback-detail__submit" on:click=on_submit>
                    "Submit"
                </button>
            </div>
        </div>
    }
}
