//! Storyboard card. Scene descriptions are editable.

use leptos::prelude::*;
use plans::{Storyboard, StoryboardScene};

use crate::components::scene_actions::{SceneActions, apply_edit};
use crate::state::edit_session::SceneEditor;

#[component]
pub fn StoryboardCard(plan: Storyboard) -> impl IntoView {
    let editor = RwSignal::new(SceneEditor::new(&plan.scenes));

    view! {
        <div class="plan-card plan-card--storyboard" class:plan-card--editing=move || editor.with(|e| e.editing().is_some())>
            <div class="plan-card__header">
                <div class="plan-card__icon">"🎞"</div>
                <div>
                    <h3 class="plan-card__title">{plan.title.clone()}</h3>
                    <p class="plan-card__subtitle">{format!("{} shots", plan.total_scenes)}</p>
                </div>
            </div>
            <div class="plan-card__scenes">
                {plan
                    .scenes
                    .into_iter()
                    .map(|scene| view! { <StoryboardSceneRow editor=editor scene=scene/> })
                    .collect_view()}
            </div>
            <div class="plan-card__timeline">
                <div class="plan-card__timeline-track"></div>
                <span class="plan-card__timeline-label">"Ready to start"</span>
            </div>
        </div>
    }
}

#[component]
fn StoryboardSceneRow(editor: RwSignal<SceneEditor<StoryboardScene>>, scene: StoryboardScene) -> impl IntoView {
    let n = scene.scene_number;
    let editing = move || editor.with(|e| e.is_editing(n));
    let field = move |read: fn(&StoryboardScene) -> Option<String>| editor.with(|e| e.working(n).and_then(read));

    let thumbnail = match scene.image_url.clone() {
        Some(src) => view! { <img class="scene__thumb" src=src alt=scene.title.clone()/> }.into_any(),
        None => view! {
            <div class="scene__thumb scene__thumb--pending">
                <span>"Pending"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="scene" class:scene--editing=editing>
            <div class="scene__number">{n}</div>
            <div class="scene__content">
                <div class="scene__header">
                    <h4 class="scene__title">{move || field(|s| Some(s.title.clone()))}</h4>
                    {move || field(|s| s.duration.clone()).map(|d| view! { <span class="scene__duration">{d}</span> })}
                    <SceneActions editor=editor scene_number=n/>
                </div>
                <Show
                    when=editing
                    fallback=move || view! { <p class="scene__description">{field(|s| Some(s.description.clone()))}</p> }
                >
                    <textarea
                        class="scene__input"
                        rows="3"
                        prop:value=move || field(|s| Some(s.description.clone()))
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            apply_edit(editor, n, |s| s.description = value);
                        }
                    ></textarea>
                </Show>
                {move || field(|s| s.shot_type.clone()).map(|shot| view! { <div class="scene__shot">{shot}</div> })}
            </div>
            {thumbnail}
        </div>
    }
}
