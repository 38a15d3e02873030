//! AI coach chat with a persisted, per-user conversation and workout context.

use api::coach::timestamp;
use api::models::{ChatMessage, Equipment, ExperienceLevel, GOALS};
use api::{ApiError, ChatHistory};
use dioxus::prelude::*;

use crate::components::{ChatBubble, ChatComposer, ErrorBanner, Notice, PageHeader};
use crate::icons::FaRobot;
use crate::state::use_services;
use crate::Icon;

/// "muscle gain" -> "Muscle gain".
fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn AiCoachView() -> Element {
    let services = use_services();

    // Keyed by the user stored when the page opened.
    let history = use_hook({
        let services = services.clone();
        move || ChatHistory::for_user(services.storage().clone(), services.session().user().as_ref())
    });

    let mut messages = use_signal({
        let history = history.clone();
        move || history.messages()
    });
    let mut context = use_signal({
        let history = history.clone();
        move || history.context()
    });
    let mut input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect({
        let history = history.clone();
        move || history.save_messages(&messages.read())
    });
    use_effect({
        let history = history.clone();
        move || history.save_context(&context.read())
    });

    let send = {
        let coach = services.coach.clone();
        move |_: ()| {
            let text = input().trim().to_string();
            if text.is_empty() || loading() {
                return;
            }
            error.set(None);
            input.set(String::new());
            messages.write().push(ChatMessage::user(text.clone(), timestamp()));
            let conversation = messages.peek().clone();
            let ctx = context.peek().clone();
            loading.set(true);

            let coach = coach.clone();
            spawn(async move {
                match coach.send(&text, &ctx, &conversation).await {
                    Ok(reply) => messages.write().push(reply),
                    // The interceptor has already sent us to /login.
                    Err(ApiError::Unauthorized) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "coach message failed");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        }
    };

    let reset = move |_: MouseEvent| {
        messages.set(Vec::new());
        error.set(None);
        history.reset();
    };

    let ctx = context();
    let injuries = ctx.injuries.clone().unwrap_or_default();
    let goals: Vec<(&str, String)> = GOALS.iter().map(|g| (*g, sentence_case(g))).collect();
    let levels: Vec<(&str, String)> = ExperienceLevel::ALL
        .iter()
        .map(|l| (l.as_str(), sentence_case(l.as_str())))
        .collect();
    let equipment_options: Vec<(&str, String)> = Equipment::ALL
        .iter()
        .map(|e| (e.as_str(), sentence_case(e.as_str())))
        .collect();

    rsx! {
        div {
            class: "page ai-coach",
            PageHeader { title: "GymUnity AI Coach", subtitle: "Ask for workouts, form tips, and weekly plans." }
            div {
                class: "ai-coach__layout",
                aside {
                    class: "card",
                    div {
                        class: "card__head",
                        h2 { "Workout Context" }
                        button { class: "ghost", onclick: reset, "Reset chat" }
                    }
                    label {
                        "Goal"
                        select {
                            onchange: move |evt| context.write().goal = evt.value(),
                            for (value, label) in goals {
                                option {
                                    key: "{value}",
                                    value: "{value}",
                                    selected: ctx.goal == value,
                                    "{label}"
                                }
                            }
                        }
                    }
                    label {
                        "Experience"
                        select {
                            onchange: move |evt| context.write().level = evt.value(),
                            for (value, label) in levels {
                                option {
                                    key: "{value}",
                                    value: "{value}",
                                    selected: ctx.level == value,
                                    "{label}"
                                }
                            }
                        }
                    }
                    label {
                        "Days per week"
                        input {
                            r#type: "number",
                            min: "1",
                            max: "7",
                            value: "{ctx.days_per_week}",
                            oninput: move |evt| {
                                if let Ok(days) = evt.value().trim().parse::<u8>() {
                                    context.write().set_days_per_week(days);
                                }
                            },
                        }
                    }
                    label {
                        "Equipment"
                        select {
                            onchange: move |evt| context.write().equipment = evt.value(),
                            for (value, label) in equipment_options {
                                option {
                                    key: "{value}",
                                    value: "{value}",
                                    selected: ctx.equipment == value,
                                    "{label}"
                                }
                            }
                        }
                    }
                    label {
                        "Injury notes"
                        textarea {
                            rows: 3,
                            placeholder: "Optional",
                            value: "{injuries}",
                            oninput: move |evt| {
                                let text = evt.value();
                                context.write().injuries = (!text.is_empty()).then_some(text);
                            },
                        }
                    }
                }
                section {
                    class: "card chat",
                    div {
                        class: "chat__messages",
                        if messages.read().is_empty() {
                            Notice {
                                Icon { icon: FaRobot, width: 20, height: 20 }
                                " Tell the coach about your goals to get started."
                            }
                        }
                        for (i, message) in messages.read().iter().enumerate() {
                            ChatBubble { key: "{i}", message: message.clone() }
                        }
                        if loading() {
                            div { class: "chat-bubble chat-bubble--assistant muted", "Thinking..." }
                        }
                    }
                    if let Some(err) = error() {
                        ErrorBanner { message: err }
                    }
                    ChatComposer {
                        value: input(),
                        placeholder: "Message your AI coach...",
                        is_loading: loading(),
                        on_input: move |text| input.set(text),
                        on_send: send,
                    }
                }
            }
        }
    }
}

/// Plan builder entry point. Plans currently arrive through the coach chat.
#[component]
pub fn AiPlanView() -> Element {
    rsx! {
        div {
            class: "page",
            PageHeader { title: "AI Plan", subtitle: "Weekly plans suggested by your AI coach." }
            Notice {
                "Ask the "
                Link { to: "/ai-coach", "AI coach" }
                " for a plan. Suggested plans appear alongside its replies."
            }
        }
    }
}
