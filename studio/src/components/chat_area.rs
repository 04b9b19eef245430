//! Chat transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the message store top to bottom and keeps the view pinned to the
//! newest message unless the user has scrolled away. Feedback controls appear
//! only under the newest assistant message.

use leptos::html;
use leptos::prelude::*;
use plans::Payload;

use crate::components::message_feedback::MessageFeedbackBar;
use crate::state::messages::{Attachments, Message, MessageStore};
use crate::util::auto_scroll::Anchor;
use crate::util::markdown::render_markdown_html;
use crate::util::pinned_scroll::PinnedScroll;

#[component]
pub fn ChatArea() -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();

    let container = NodeRef::<html::Div>::new();
    let items = NodeRef::<html::Div>::new();
    let scroll = PinnedScroll::new(Anchor::Bottom, container, items);
    scroll.track(move || store.with(MessageStore::len));

    view! {
        <div
            class="chat-area"
            node_ref=container
            on:scroll=move |_| scroll.on_scroll()
            on:scrollend=move |_| scroll.on_scroll_end()
        >
            <div class="chat-area__inner">
                <div class="chat-area__divider">
                    <span>"Today"</span>
                </div>
                <div class="chat-area__messages" node_ref=items>
                    <For
                        each=move || store.with(|s| s.messages().to_vec())
                        key=|message| message.id
                        children=move |message| view! { <MessageRow message=message/> }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let store = expect_context::<RwSignal<MessageStore>>();

    let id = message.id;
    let is_assistant = message.is_assistant();
    let is_latest_assistant = move || store.with(|s| s.last_assistant_id() == Some(id));
    let plan_label = message.payload.as_ref().map(|p| format!("{}: {}", plan_kind_label(p), p.title()));

    view! {
        <div class="message" class:message--user=!is_assistant class:message--assistant=is_assistant>
            <div class="message__column">
                {is_assistant
                    .then(|| {
                        view! {
                            <div class="message__author">
                                <div class="message__avatar">"I"</div>
                                <span class="message__name">"Ima"</span>
                            </div>
                        }
                    })}
                <ImageStrip images=message.attachments.images.clone()/>
                <div class="message__bubble">
                    {if is_assistant {
                        let rendered = render_markdown_html(&message.content);
                        view! { <div class="message__markdown" inner_html=rendered></div> }.into_any()
                    } else {
                        view! { <p class="message__text">{message.content.clone()}</p> }.into_any()
                    }}
                </div>
                <MediaAttachments attachments=message.attachments.clone()/>
                {plan_label.map(|label| view! { <div class="message__plan-ref">{label}</div> })}
                <Show when=is_latest_assistant>
                    <MessageFeedbackBar message_id=id/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ImageStrip(images: Vec<String>) -> impl IntoView {
    (!images.is_empty()).then(|| {
        view! {
            <div class="message__images">
                {images
                    .into_iter()
                    .map(|src| {
                        view! {
                            <div class="message__image">
                                <img src=src alt=""/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
fn MediaAttachments(attachments: Attachments) -> impl IntoView {
    let Attachments { video, audio, generated_image, generated_video, .. } = attachments;
    view! {
        {video
            .map(|src| {
                view! {
                    <div class="message__video">
                        <img src=src alt=""/>
                        <div class="message__video-overlay">
                            <span class="message__play">"▶"</span>
                        </div>
                    </div>
                }
            })}
        {generated_image
            .map(|src| view! { <img class="message__generated-image" src=src alt="Generated image"/> })}
        {generated_video
            .map(|src| view! { <video class="message__generated-video" src=src controls=true></video> })}
        {audio.map(|src| view! { <audio class="message__audio" src=src controls=true></audio> })}
    }
}

fn plan_kind_label(payload: &Payload) -> &'static str {
    match payload {
        Payload::TaskPlanning(_) => "Task plan",
        Payload::VideoPlanning(_) => "Video plan",
        Payload::Storyboard(_) => "Storyboard",
        Payload::Script(_) => "Script",
    }
}
