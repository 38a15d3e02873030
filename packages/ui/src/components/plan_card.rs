use api::models::SuggestedPlan;
use dioxus::prelude::*;

/// A weekly plan suggested by the coach, one block per training day.
#[component]
pub fn PlanCard(plan: SuggestedPlan) -> Element {
    rsx! {
        div {
            class: "plan-card",
            h4 { "Suggested Plan" }
            p { class: "muted", "{plan.week_overview}" }
            for day in plan.days.iter() {
                div {
                    key: "{day.day}",
                    class: "plan-card__day",
                    div {
                        class: "plan-card__day-head",
                        strong { "{day.day}" }
                        span { class: "muted", "{day.focus}" }
                    }
                    for exercise in day.exercises.iter() {
                        div {
                            key: "{day.day}-{exercise.name}",
                            class: "plan-card__exercise",
                            div { class: "plan-card__exercise-name", "{exercise.name}" }
                            div { class: "muted small", "{exercise.sets} • {exercise.reps} • Rest: {exercise.rest}" }
                            if !exercise.notes.is_empty() {
                                div { class: "muted small", "{exercise.notes}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
