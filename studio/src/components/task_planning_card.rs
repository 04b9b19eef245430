//! Read-only task plan: numbered steps with substeps and completion markers.

use leptos::prelude::*;
use plans::{TaskPlan, TaskStep};

#[component]
pub fn TaskPlanningCard(plan: TaskPlan) -> impl IntoView {
    let tracked = plan.steps.iter().filter(|s| s.completed.is_some()).count();
    let progress = (tracked > 0).then(|| format!("{} of {} steps done", plan.completed_steps(), plan.steps.len()));

    view! {
        <div class="plan-card plan-card--task">
            <div class="plan-card__header">
                <div class="plan-card__icon">"📋"</div>
                <div>
                    <h3 class="plan-card__title">{plan.title.clone()}</h3>
                    {progress.map(|p| view! { <p class="plan-card__subtitle">{p}</p> })}
                </div>
            </div>
            <ol class="plan-card__steps">
                {plan
                    .steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| view! { <StepRow number=index + 1 step=step/> })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn StepRow(number: usize, step: TaskStep) -> impl IntoView {
    let marker = step.completed.map(|done| {
        view! {
            <span class="plan-step__status" class:plan-step__status--done=done>
                {if done { "●" } else { "○" }}
            </span>
        }
    });

    view! {
        <li class="plan-step">
            <div class="plan-step__header">
                <span class="plan-step__number">{number}</span>
                <div class="plan-step__text">
                    <h4 class="plan-step__title">{step.title}</h4>
                    <p class="plan-step__description">{step.description}</p>
                </div>
                {marker}
            </div>
            {(!step.substeps.is_empty())
                .then(|| {
                    view! {
                        <ul class="plan-step__substeps">
                            {step.substeps.into_iter().map(|sub| view! { <li>{sub}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </li>
    }
}
